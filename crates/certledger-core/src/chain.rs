//! Chain: the ordered, validated, append-only sequence of blocks.
//!
//! The chain owns the linkage invariants. Every admitted block must carry
//! the chain-assigned id, reference the previous block's total hash (or the
//! genesis sentinel), satisfy the difficulty target, and pass the block's
//! own tamper check.

use crate::block::Block;
use crate::crypto::BlockHash;
use crate::error::ChainError;
use crate::miner::Miner;
use crate::tokens::TokenMap;
use crate::types::BlockId;

/// Default number of leading zero hex digits required of a total hash.
pub const DEFAULT_DIFFICULTY: u32 = 4;

/// Chain construction parameters.
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// Required leading zero hex digits in every block's total hash.
    pub difficulty: u32,
    /// Optional cap on mining attempts per append. `None` (the default)
    /// lets the nonce search run unbounded.
    pub max_mining_attempts: Option<u64>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            difficulty: DEFAULT_DIFFICULTY,
            max_mining_attempts: None,
        }
    }
}

/// Outcome of rebuilding a chain from persisted blocks.
///
/// `tampered` carries the id of the first block that failed validation;
/// everything from that block onward was discarded (fail-stop). The caller
/// decides whether to halt or continue with the truncated history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreReport {
    /// Number of blocks accepted into the chain.
    pub loaded: usize,
    /// First tampered block id, if loading stopped early.
    pub tampered: Option<BlockId>,
}

/// The certificate chain.
#[derive(Debug)]
pub struct Chain {
    blocks: Vec<Block>,
    next_id: BlockId,
    config: ChainConfig,
}

impl Chain {
    /// A fresh chain with no history.
    pub fn empty(config: ChainConfig) -> Self {
        Self {
            blocks: Vec::new(),
            next_id: BlockId::FIRST,
            config,
        }
    }

    /// Rebuild a chain from blocks in persisted order.
    ///
    /// Each block is re-validated before admission. On the first failure
    /// loading stops immediately: a broken segment invalidates trust in
    /// everything downstream of it, so later blocks are not loaded even if
    /// individually valid.
    pub fn restore(rows: Vec<Block>, config: ChainConfig) -> (Self, RestoreReport) {
        let mut chain = Self::empty(config);
        let mut tampered = None;

        for block in rows {
            let id = block.id;
            if chain.admit(block).is_err() {
                tampered = Some(id);
                break;
            }
        }

        let report = RestoreReport {
            loaded: chain.len(),
            tampered,
        };
        (chain, report)
    }

    /// Mine and append a new block for the given payload and secret.
    ///
    /// Assembles a candidate at the current tail, mines it, seals the
    /// verification hash, then re-validates before admission; a candidate
    /// that fails re-validation is discarded and never enters the chain.
    pub fn append(
        &mut self,
        tokens: TokenMap,
        additional_token: impl Into<String>,
    ) -> Result<&Block, ChainError> {
        let previous_hash = self.tail().map(|b| b.total_hash);
        let mut block = Block::candidate(self.next_id, tokens, previous_hash, additional_token);

        let mut miner = Miner::new(self.config.difficulty);
        if let Some(max) = self.config.max_mining_attempts {
            miner = miner.with_max_attempts(max);
        }
        miner.mine(&mut block)?;
        block.verification_hash = block.compute_verification_hash();

        self.admit(block)?;
        Ok(self.blocks.last().expect("block admitted at the tail"))
    }

    /// Find the block carrying the given verification hash.
    ///
    /// A match is re-validated before it is returned: a block whose stored
    /// hash matches but whose contents no longer do is reported as
    /// [`ChainError::Tampered`], not as found.
    pub fn find_by_verification_hash(&self, hash: &BlockHash) -> Result<&Block, ChainError> {
        for block in &self.blocks {
            if block.verification_hash == *hash {
                block.validate()?;
                return Ok(block);
            }
        }
        Err(ChainError::NotFound)
    }

    /// Remove the tail block and restore the id counter.
    ///
    /// Used when persisting an append fails and the in-memory mutation must
    /// be undone.
    pub fn rollback_last(&mut self) -> Option<Block> {
        let block = self.blocks.pop()?;
        self.next_id = block.id;
        Some(block)
    }

    /// All blocks, oldest first.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The most recently appended block.
    pub fn tail(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// Number of blocks in the chain.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// True if the chain has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The id the next appended block will receive.
    pub fn next_id(&self) -> BlockId {
        self.next_id
    }

    /// The chain's configuration.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Admit a fully sealed block at the tail, enforcing every chain
    /// invariant. The block is discarded on failure.
    fn admit(&mut self, block: Block) -> Result<(), ChainError> {
        if block.id != self.next_id {
            return Err(ChainError::Tampered { block_id: block.id });
        }

        let expected_previous = self.tail().map(|b| b.total_hash);
        if block.previous_hash != expected_previous {
            return Err(ChainError::Tampered { block_id: block.id });
        }

        if !block.total_hash.meets_difficulty(self.config.difficulty) {
            return Err(ChainError::Tampered { block_id: block.id });
        }

        block.validate()?;

        self.next_id = block.id.next();
        self.blocks.push(block);
        Ok(())
    }
}
