//! # Certledger
//!
//! Tamper-evident certificate issuance and verification over a local,
//! single-authority proof-of-work hash chain.
//!
//! ## Overview
//!
//! Every issued certificate is a block in an append-only chain. A block's
//! total hash binds its id, payload, previous-block hash and mined nonce; a
//! verification hash binds the total hash to a holder-supplied secret and
//! is the value the holder later presents to prove authenticity.
//!
//! This is not a distributed system: there is a single writer and no peer
//! network. "Blockchain" here means only hash chaining plus proof-of-work
//! applied to a local ledger.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use certledger::{CertificateService, ServiceConfig};
//! use certledger::core::TokenMap;
//! use certledger::store::SqliteStore;
//!
//! async fn example() {
//!     let store = SqliteStore::open("chain.db").unwrap();
//!     let service = CertificateService::load(store, ServiceConfig::default())
//!         .await
//!         .unwrap();
//!
//!     let tokens = TokenMap::new().with("name", "Alice").with("course", "Rust");
//!     let issued = service.issue(tokens, "holder-secret").await.unwrap();
//!
//!     let view = service.verify(&issued.verification_hash).await.unwrap();
//!     assert_eq!(view.block_id, issued.block_id);
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `certledger::core` - chain primitives (Block, Chain, Miner, hashes)
//! - `certledger::store` - the persistence boundary (Store, SqliteStore)

pub mod error;
pub mod service;

// Re-export component crates
pub use certledger_core as core;
pub use certledger_store as store;

// Re-export main types for convenience
pub use error::{LedgerError, Result};
pub use service::{CertificateService, CertificateView, IssuedCertificate, ServiceConfig};

// Re-export commonly used core types
pub use certledger_core::{
    Block, BlockHash, BlockId, Chain, ChainConfig, ChainError, Miner, TokenMap, TokenValue,
};
