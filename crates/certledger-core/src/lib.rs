//! # Certledger Core
//!
//! Pure primitives for the certledger chain: blocks, hashing, mining, and
//! the chain itself.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over the certificate ledger's data structures.
//!
//! ## Key Types
//!
//! - [`Block`] - A single ledger entry, one per issued certificate
//! - [`BlockHash`] - SHA-256 digest used for total and verification hashes
//! - [`Miner`] - Proof-of-work nonce search against a difficulty target
//! - [`Chain`] - Ordered, validated, append-only sequence of blocks
//!
//! ## Canonicalization
//!
//! Both hashes are derived from a frozen canonical text encoding. See the
//! [`canonical`] module.

pub mod block;
pub mod canonical;
pub mod chain;
pub mod crypto;
pub mod error;
pub mod miner;
pub mod tokens;
pub mod types;

pub use block::Block;
pub use canonical::GENESIS_PREVIOUS_HASH;
pub use chain::{Chain, ChainConfig, RestoreReport, DEFAULT_DIFFICULTY};
pub use crypto::BlockHash;
pub use error::{ChainError, MiningError, ValidationError};
pub use miner::{Miner, MiningOutcome};
pub use tokens::{TokenMap, TokenValue};
pub use types::BlockId;
