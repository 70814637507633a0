//! Error types for the certledger core.

use thiserror::Error;

use crate::types::BlockId;

/// A block's stored hashes no longer match its contents.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("block {id}: total hash does not match block contents")]
    TotalHashMismatch { id: BlockId },

    #[error("block {id}: verification hash does not match total hash and token")]
    VerificationHashMismatch { id: BlockId },
}

impl ValidationError {
    /// The id of the offending block.
    pub fn block_id(&self) -> BlockId {
        match self {
            Self::TotalHashMismatch { id } | Self::VerificationHashMismatch { id } => *id,
        }
    }
}

/// Mining failed to satisfy the difficulty target.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MiningError {
    /// Only reachable when an attempt cap is configured; by default the
    /// nonce search runs unbounded.
    #[error("mining gave up after {attempts} attempts without meeting the difficulty target")]
    AttemptsExhausted { attempts: u64 },
}

/// Errors from chain-level operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ChainError {
    /// A block failed validation: on load this truncates the chain, on
    /// lookup it means the matched certificate cannot be trusted, and after
    /// mining it aborts the append.
    #[error("block {block_id} has been tampered with")]
    Tampered { block_id: BlockId },

    /// No block carries the queried verification hash. The expected outcome
    /// for an unknown certificate, distinct from tampering.
    #[error("no block matches the supplied verification hash")]
    NotFound,

    #[error(transparent)]
    Mining(#[from] MiningError),
}

impl From<ValidationError> for ChainError {
    fn from(e: ValidationError) -> Self {
        ChainError::Tampered {
            block_id: e.block_id(),
        }
    }
}
