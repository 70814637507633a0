//! Canonical text encoding for hash derivation.
//!
//! Both of a block's digests are computed over concatenated canonical text:
//!
//! - total hash:        `id || tokens_json || previous_hash_text || nonce`
//! - verification hash: `total_hash_hex || additional_token`
//!
//! Token payloads serialize as JSON over a `BTreeMap`, so key order is fixed
//! and the same payload always produces the same text.
//!
//! **CRITICAL**: This encoding is FROZEN. Changing it invalidates every hash
//! in every existing chain.

use crate::crypto::BlockHash;
use crate::tokens::TokenMap;
use crate::types::BlockId;

/// Sentinel previous-hash text for the genesis block.
pub const GENESIS_PREVIOUS_HASH: &str = "0";

/// Canonical text form of a payload.
pub fn token_text(tokens: &TokenMap) -> String {
    // BTreeMap keys serialize in sorted order; scalar values only, so this
    // cannot fail for any constructible TokenMap with finite floats.
    serde_json::to_string(tokens).expect("token payload serializes to canonical JSON")
}

/// Canonical text form of a previous-hash reference.
pub fn previous_hash_text(previous_hash: Option<BlockHash>) -> String {
    match previous_hash {
        Some(hash) => hash.to_hex(),
        None => GENESIS_PREVIOUS_HASH.to_string(),
    }
}

/// The preimage of a block's total hash.
pub fn total_hash_preimage(
    id: BlockId,
    tokens: &TokenMap,
    previous_hash: Option<BlockHash>,
    nonce: u64,
) -> Vec<u8> {
    format!(
        "{}{}{}{}",
        id.get(),
        token_text(tokens),
        previous_hash_text(previous_hash),
        nonce
    )
    .into_bytes()
}

/// The preimage of a block's verification hash.
pub fn verification_preimage(total_hash: BlockHash, additional_token: &str) -> Vec<u8> {
    format!("{}{}", total_hash.to_hex(), additional_token).into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_text_is_key_ordered() {
        let tokens = TokenMap::new().with("z", 1i64).with("a", "x");
        assert_eq!(token_text(&tokens), r#"{"a":"x","z":1}"#);
    }

    #[test]
    fn test_previous_hash_text_genesis_sentinel() {
        assert_eq!(previous_hash_text(None), "0");
        let hash = BlockHash::hash(b"prev");
        assert_eq!(previous_hash_text(Some(hash)), hash.to_hex());
    }

    #[test]
    fn test_total_preimage_deterministic() {
        let tokens = TokenMap::new().with("name", "Alice");
        let a = total_hash_preimage(BlockId::FIRST, &tokens, None, 7);
        let b = total_hash_preimage(BlockId::FIRST, &tokens, None, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn test_total_preimage_depends_on_every_field() {
        let tokens = TokenMap::new().with("name", "Alice");
        let base = total_hash_preimage(BlockId::FIRST, &tokens, None, 0);

        let other_tokens = TokenMap::new().with("name", "Bob");
        assert_ne!(base, total_hash_preimage(BlockId::new(2), &tokens, None, 0));
        assert_ne!(
            base,
            total_hash_preimage(BlockId::FIRST, &other_tokens, None, 0)
        );
        assert_ne!(
            base,
            total_hash_preimage(BlockId::FIRST, &tokens, Some(BlockHash::hash(b"p")), 0)
        );
        assert_ne!(base, total_hash_preimage(BlockId::FIRST, &tokens, None, 1));
    }

    #[test]
    fn test_verification_preimage_binds_secret() {
        let total = BlockHash::hash(b"total");
        let a = verification_preimage(total, "secret1");
        let b = verification_preimage(total, "secret2");
        assert_ne!(a, b);
        assert_eq!(a, verification_preimage(total, "secret1"));
    }
}
