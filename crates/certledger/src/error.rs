//! Error types for the certificate service.

use certledger_core::{BlockId, ChainError};
use certledger_store::StoreError;
use thiserror::Error;

/// Errors that can occur during service operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Chain error: tampering, not-found, or an aborted mining run.
    #[error("chain error: {0}")]
    Chain(#[from] ChainError),

    /// Storage error. When returned from `issue`, the in-memory append has
    /// been rolled back and the certificate does not exist.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Startup refused because the persisted chain failed validation and
    /// the service is configured to halt rather than run truncated.
    #[error("persisted chain is tampered at block {block_id}")]
    TamperedHistory { block_id: BlockId },
}

impl LedgerError {
    /// True for the expected unknown-certificate outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LedgerError::Chain(ChainError::NotFound))
    }

    /// The offending block id, when this error signals tampering.
    pub fn tampered_block(&self) -> Option<BlockId> {
        match self {
            LedgerError::Chain(ChainError::Tampered { block_id })
            | LedgerError::TamperedHistory { block_id } => Some(*block_id),
            _ => None,
        }
    }
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
