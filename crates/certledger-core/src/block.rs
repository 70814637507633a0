//! Block: a single ledger entry, one per issued certificate.
//!
//! A block is immutable once appended to the chain. Its two digests make it
//! tamper-evident: the total hash binds the block's contents and its place
//! in the chain, the verification hash binds the total hash to the holder's
//! secret and doubles as the certificate's public identifier.

use std::fmt;

use crate::canonical::{previous_hash_text, total_hash_preimage, verification_preimage};
use crate::crypto::BlockHash;
use crate::error::ValidationError;
use crate::tokens::TokenMap;
use crate::types::BlockId;

/// A single block in the certificate chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Chain-assigned id, unique and monotonically increasing.
    pub id: BlockId,

    /// The certificate payload. Opaque to the chain.
    pub tokens: TokenMap,

    /// Total hash of the previous block; `None` for the genesis block.
    pub previous_hash: Option<BlockHash>,

    /// Proof-of-work counter. Mutated only by the miner.
    pub nonce: u64,

    /// Digest of `(id, tokens, previous_hash, nonce)`.
    pub total_hash: BlockHash,

    /// Caller-supplied secret, bound once at creation.
    pub additional_token: String,

    /// Digest of `(total_hash, additional_token)`; the holder-facing
    /// certificate identifier and sole lookup key.
    pub verification_hash: BlockHash,
}

impl Block {
    /// Assemble an unmined candidate: nonce 0, placeholder hashes.
    pub fn candidate(
        id: BlockId,
        tokens: TokenMap,
        previous_hash: Option<BlockHash>,
        additional_token: impl Into<String>,
    ) -> Self {
        Self {
            id,
            tokens,
            previous_hash,
            nonce: 0,
            total_hash: BlockHash::ZERO,
            additional_token: additional_token.into(),
            verification_hash: BlockHash::ZERO,
        }
    }

    /// Recompute the total hash from the block's current contents.
    ///
    /// Pure and deterministic: identical inputs always produce the same
    /// digest.
    pub fn compute_total_hash(&self) -> BlockHash {
        BlockHash::hash(&total_hash_preimage(
            self.id,
            &self.tokens,
            self.previous_hash,
            self.nonce,
        ))
    }

    /// Recompute the verification hash from the stored total hash and the
    /// additional token.
    pub fn compute_verification_hash(&self) -> BlockHash {
        BlockHash::hash(&verification_preimage(
            self.total_hash,
            &self.additional_token,
        ))
    }

    /// The single tamper check: both stored digests must match a fresh
    /// recomputation.
    ///
    /// Any mutation of id, tokens, previous hash, nonce, or additional
    /// token after the hashes were fixed is detected here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.total_hash != self.compute_total_hash() {
            return Err(ValidationError::TotalHashMismatch { id: self.id });
        }
        if self.verification_hash != self.compute_verification_hash() {
            return Err(ValidationError::VerificationHashMismatch { id: self.id });
        }
        Ok(())
    }

    /// Boolean convenience over [`Block::validate`].
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Textual previous-hash reference: hex, or `"0"` for genesis.
    pub fn previous_hash_text(&self) -> String {
        previous_hash_text(self.previous_hash)
    }

    /// True for the first block in a chain.
    pub fn is_genesis(&self) -> bool {
        self.previous_hash.is_none()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "block {} (nonce {}, total {}, verification {})",
            self.id,
            self.nonce,
            &self.total_hash.to_hex()[..16],
            &self.verification_hash.to_hex()[..16],
        )
    }
}
