//! Proof-of-work mining: nonce search against a difficulty target.

use crate::block::Block;
use crate::error::MiningError;

/// Result of a successful mining run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiningOutcome {
    /// The nonce that satisfied the difficulty target.
    pub nonce: u64,
    /// Total hashes computed, including the satisfying one.
    pub attempts: u64,
}

/// Searches for a nonce whose total hash has the required number of leading
/// zero hex digits.
///
/// The search is unbounded unless an attempt cap is configured; the
/// difficulty alone controls expected cost.
#[derive(Debug, Clone, Copy)]
pub struct Miner {
    difficulty: u32,
    max_attempts: Option<u64>,
}

impl Miner {
    /// Create a miner for the given difficulty (leading zero hex digits).
    pub fn new(difficulty: u32) -> Self {
        Self {
            difficulty,
            max_attempts: None,
        }
    }

    /// Cap the number of hash attempts. Exhausting the cap yields
    /// [`MiningError::AttemptsExhausted`] and leaves the block at the last
    /// tried nonce.
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// The configured difficulty.
    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    /// Mine the candidate in place.
    ///
    /// Recomputes the total hash at the current nonce, then increments the
    /// nonce and recomputes until the difficulty prefix holds. Mutates only
    /// `nonce` and `total_hash`; id, tokens, previous hash and additional
    /// token are untouched.
    pub fn mine(&self, block: &mut Block) -> Result<MiningOutcome, MiningError> {
        block.total_hash = block.compute_total_hash();
        let mut attempts: u64 = 1;

        while !block.total_hash.meets_difficulty(self.difficulty) {
            if let Some(max) = self.max_attempts {
                if attempts >= max {
                    return Err(MiningError::AttemptsExhausted { attempts });
                }
            }
            block.nonce += 1;
            block.total_hash = block.compute_total_hash();
            attempts += 1;
        }

        Ok(MiningOutcome {
            nonce: block.nonce,
            attempts,
        })
    }
}
