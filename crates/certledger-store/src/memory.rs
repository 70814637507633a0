//! In-memory implementation of the Store trait.
//!
//! Primarily for testing. Same semantics as SQLite, no persistence.

use std::sync::RwLock;

use async_trait::async_trait;
use certledger_core::Block;

use crate::error::Result;
use crate::traits::Store;

/// In-memory store implementation.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
pub struct MemoryStore {
    rows: RwLock<Vec<Block>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-seeded with blocks.
    pub fn with_blocks(blocks: Vec<Block>) -> Self {
        Self {
            rows: RwLock::new(blocks),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn load_all(&self) -> Result<Vec<Block>> {
        let rows = self
            .rows
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(rows.clone())
    }

    async fn save_all(&self, blocks: &[Block]) -> Result<()> {
        let mut rows = self
            .rows
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *rows = blocks.to_vec();
        Ok(())
    }
}
