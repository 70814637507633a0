//! # Certledger Store
//!
//! Persistence boundary for the certificate chain. The chain reads and
//! writes its history through the [`Store`] trait; the primary backend is
//! [`SqliteStore`], with [`MemoryStore`] for tests.
//!
//! ## Contract
//!
//! - `load_all` returns every persisted block in chain order, or
//!   [`StoreError::Unavailable`] when no backing data exists. The service
//!   treats that as "no history yet", never as fatal.
//! - `save_all` rewrites the whole chain atomically. Every successful
//!   append re-persists the full block list.
//! - Rows carry exactly the seven block fields and round-trip through
//!   load/save without loss or reordering.

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::Store;
