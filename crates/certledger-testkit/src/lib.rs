//! # Certledger Testkit
//!
//! Testing utilities for the certledger chain.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: pre-built chains at fast difficulties and seeded stores
//! - **Generators**: proptest strategies for payloads and secrets
//!
//! The cross-crate property suite lives in this crate's `tests/` directory.
//!
//! ## Fixtures
//!
//! ```rust
//! use certledger_testkit::fixtures::ChainFixture;
//!
//! let mut fixture = ChainFixture::new();
//! let verification_hash = fixture.issue("Alice", "secret1");
//! assert_eq!(fixture.blocks()[0].verification_hash, verification_hash);
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{sample_tokens, ChainFixture};
pub use generators::{secret, token_map, token_value};
