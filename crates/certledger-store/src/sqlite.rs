//! SQLite implementation of the Store trait.
//!
//! The primary storage backend: rusqlite with bundled SQLite behind a
//! mutex-protected connection. `save_all` rewrites the blocks table in a
//! single transaction, so a failed write never leaves a partial chain on
//! disk.

use std::path::Path;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use rusqlite::{params, Connection};
use tracing::debug;

use certledger_core::canonical::{token_text, GENESIS_PREVIOUS_HASH};
use certledger_core::{Block, BlockHash, BlockId, TokenMap};

use crate::error::{Result, StoreError};
use crate::migration;
use crate::traits::Store;

/// SQLite-based store implementation.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory SQLite database. Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run a closure against the connection.
    fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        // A poisoned lock means another thread panicked mid-operation; the
        // connection itself is still usable.
        let mut conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut conn)
    }
}

/// Raw column values of one persisted block row.
type RawRow = (u64, String, String, u64, String, String, String);

fn parse_row(raw: RawRow) -> Result<Block> {
    let (block_id, tokens, previous_hash, nonce, total_hash, additional_token, verification_hash) =
        raw;

    let bad = |field: &str, detail: String| {
        StoreError::InvalidRow(format!("block {block_id}: bad {field}: {detail}"))
    };

    let tokens: TokenMap =
        serde_json::from_str(&tokens).map_err(|e| bad("tokens", e.to_string()))?;

    let previous_hash = if previous_hash == GENESIS_PREVIOUS_HASH {
        None
    } else {
        Some(
            BlockHash::from_hex(&previous_hash)
                .map_err(|e| bad("previous_hash", e.to_string()))?,
        )
    };

    let total_hash =
        BlockHash::from_hex(&total_hash).map_err(|e| bad("total_hash", e.to_string()))?;
    let verification_hash = BlockHash::from_hex(&verification_hash)
        .map_err(|e| bad("verification_hash", e.to_string()))?;

    Ok(Block {
        id: BlockId::new(block_id),
        tokens,
        previous_hash,
        nonce,
        total_hash,
        additional_token,
        verification_hash,
    })
}

#[async_trait]
impl Store for SqliteStore {
    async fn load_all(&self) -> Result<Vec<Block>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT block_id, tokens, previous_hash, nonce, total_hash,
                        additional_token, verification_hash
                 FROM blocks ORDER BY position",
            )?;

            let rows = stmt.query_map([], |row| {
                Ok((
                    row.get::<_, u64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, u64>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                    row.get::<_, String>(6)?,
                ))
            })?;

            let mut blocks = Vec::new();
            for row in rows {
                blocks.push(parse_row(row?)?);
            }

            debug!(blocks = blocks.len(), "loaded chain from sqlite");
            Ok(blocks)
        })
    }

    async fn save_all(&self, blocks: &[Block]) -> Result<()> {
        self.with_conn(|conn| {
            let tx = conn.transaction()?;
            tx.execute("DELETE FROM blocks", [])?;

            {
                let mut stmt = tx.prepare(
                    "INSERT INTO blocks (position, block_id, tokens, previous_hash, nonce,
                                         total_hash, additional_token, verification_hash)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                )?;

                for (position, block) in blocks.iter().enumerate() {
                    stmt.execute(params![
                        position as i64,
                        block.id.get(),
                        token_text(&block.tokens),
                        block.previous_hash_text(),
                        block.nonce,
                        block.total_hash.to_hex(),
                        block.additional_token,
                        block.verification_hash.to_hex(),
                    ])?;
                }
            }

            tx.commit()?;
            debug!(blocks = blocks.len(), "saved chain to sqlite");
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certledger_core::{Chain, ChainConfig};

    fn sample_blocks(count: usize) -> Vec<Block> {
        let mut chain = Chain::empty(ChainConfig {
            difficulty: 0,
            max_mining_attempts: None,
        });
        for i in 0..count {
            let tokens = TokenMap::new()
                .with("name", format!("holder-{i}"))
                .with("seq", i as i64);
            chain.append(tokens, format!("secret-{i}")).unwrap();
        }
        chain.blocks().to_vec()
    }

    #[tokio::test]
    async fn test_empty_store_loads_empty() {
        let store = SqliteStore::open_memory().unwrap();
        assert!(store.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_load_roundtrip() {
        let store = SqliteStore::open_memory().unwrap();
        let blocks = sample_blocks(3);

        store.save_all(&blocks).await.unwrap();
        let loaded = store.load_all().await.unwrap();

        assert_eq!(loaded, blocks);
    }

    #[tokio::test]
    async fn test_save_all_replaces_previous_contents() {
        let store = SqliteStore::open_memory().unwrap();
        let blocks = sample_blocks(3);

        store.save_all(&blocks).await.unwrap();
        store.save_all(&blocks[..1]).await.unwrap();

        let loaded = store.load_all().await.unwrap();
        assert_eq!(loaded, blocks[..1]);
    }

    #[tokio::test]
    async fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chain.db");
        let blocks = sample_blocks(2);

        {
            let store = SqliteStore::open(&path).unwrap();
            store.save_all(&blocks).await.unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.load_all().await.unwrap(), blocks);
    }

    #[tokio::test]
    async fn test_genesis_sentinel_roundtrips() {
        let store = SqliteStore::open_memory().unwrap();
        let blocks = sample_blocks(1);

        store.save_all(&blocks).await.unwrap();
        let loaded = store.load_all().await.unwrap();

        assert!(loaded[0].is_genesis());
        assert_eq!(loaded[0].previous_hash_text(), "0");
    }
}
