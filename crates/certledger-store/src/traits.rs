//! Store trait: the abstract interface for chain persistence.
//!
//! This trait keeps the chain storage-agnostic. Implementations include
//! SQLite (primary) and in-memory (for tests).

use std::sync::Arc;

use async_trait::async_trait;
use certledger_core::Block;

use crate::error::Result;

/// The Store trait: async interface for chain persistence.
///
/// The chain is persisted as a whole: `save_all` rewrites the complete
/// block list on every successful append, and `load_all` returns it in the
/// same order. Incremental writes are a backend concern this contract does
/// not expose.
#[async_trait]
pub trait Store: Send + Sync {
    /// Load every persisted block in chain order.
    ///
    /// Returns [`StoreError::Unavailable`](crate::StoreError::Unavailable)
    /// when no backing data exists.
    async fn load_all(&self) -> Result<Vec<Block>>;

    /// Persist the full block list, replacing any previous contents.
    async fn save_all(&self, blocks: &[Block]) -> Result<()>;
}

#[async_trait]
impl<S: Store + ?Sized> Store for Arc<S> {
    async fn load_all(&self) -> Result<Vec<Block>> {
        (**self).load_all().await
    }

    async fn save_all(&self, blocks: &[Block]) -> Result<()> {
        (**self).save_all(blocks).await
    }
}
