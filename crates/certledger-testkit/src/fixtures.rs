//! Test fixtures and helpers.
//!
//! Common setup code for unit, property, and integration tests. Fixtures
//! default to difficulty 1 so mining stays fast.

use certledger_core::{Block, BlockHash, Chain, ChainConfig, TokenMap};
use certledger_store::MemoryStore;

/// A typical certificate payload.
pub fn sample_tokens() -> TokenMap {
    TokenMap::new()
        .with("name", "Alice")
        .with("course", "Rust Fundamentals")
        .with("year", 2024i64)
}

/// A chain at a test-friendly difficulty with issuance helpers.
pub struct ChainFixture {
    pub chain: Chain,
}

impl ChainFixture {
    /// A fixture mining at difficulty 1.
    pub fn new() -> Self {
        Self::with_difficulty(1)
    }

    /// A fixture mining at the given difficulty.
    pub fn with_difficulty(difficulty: u32) -> Self {
        Self {
            chain: Chain::empty(ChainConfig {
                difficulty,
                max_mining_attempts: None,
            }),
        }
    }

    /// Issue a certificate for a holder name; returns its verification
    /// hash.
    pub fn issue(&mut self, name: &str, secret: &str) -> BlockHash {
        self.issue_tokens(TokenMap::new().with("name", name), secret)
    }

    /// Issue a certificate with an explicit payload; returns its
    /// verification hash.
    pub fn issue_tokens(&mut self, tokens: TokenMap, secret: &str) -> BlockHash {
        self.chain
            .append(tokens, secret)
            .expect("fixture append succeeds")
            .verification_hash
    }

    /// The chain's blocks, oldest first.
    pub fn blocks(&self) -> &[Block] {
        self.chain.blocks()
    }

    /// A memory store pre-seeded with this chain's blocks.
    pub fn seeded_store(&self) -> MemoryStore {
        MemoryStore::with_blocks(self.blocks().to_vec())
    }
}

impl Default for ChainFixture {
    fn default() -> Self {
        Self::new()
    }
}
