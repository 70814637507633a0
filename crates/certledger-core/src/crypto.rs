//! Cryptographic primitives: SHA-256 hashing behind a strong type.

use sha2::{Digest, Sha256};
use std::fmt;

/// A 32-byte SHA-256 hash.
///
/// Used both for a block's total hash (binding id, payload, previous hash
/// and nonce) and for its verification hash (binding the total hash to the
/// holder's secret).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockHash(pub [u8; 32]);

impl BlockHash {
    /// Compute the SHA-256 hash of the given data.
    pub fn hash(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Number of leading zero hex digits in this hash.
    pub fn leading_zero_digits(&self) -> u32 {
        let mut count = 0;
        for byte in self.0 {
            if byte >> 4 != 0 {
                break;
            }
            count += 1;
            if byte & 0x0f != 0 {
                break;
            }
            count += 1;
        }
        count
    }

    /// Check whether the first `difficulty` hex digits are all zero.
    pub fn meets_difficulty(&self, difficulty: u32) -> bool {
        self.leading_zero_digits() >= difficulty
    }

    /// The zero hash (placeholder for an unmined candidate).
    pub const ZERO: Self = Self([0u8; 32]);
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for BlockHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for BlockHash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_deterministic() {
        let h1 = BlockHash::hash(b"test data");
        let h2 = BlockHash::hash(b"test data");
        assert_eq!(h1, h2);
        assert_ne!(h1, BlockHash::hash(b"different data"));
    }

    #[test]
    fn test_hex_roundtrip() {
        let h = BlockHash::hash(b"roundtrip");
        let recovered = BlockHash::from_hex(&h.to_hex()).unwrap();
        assert_eq!(h, recovered);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(BlockHash::from_hex("not-a-real-hash").is_err());
        assert!(BlockHash::from_hex("abcd").is_err());
    }

    #[test]
    fn test_leading_zero_digits() {
        let mut bytes = [0xffu8; 32];
        assert_eq!(BlockHash::from_bytes(bytes).leading_zero_digits(), 0);

        bytes[0] = 0x0f;
        assert_eq!(BlockHash::from_bytes(bytes).leading_zero_digits(), 1);

        bytes[0] = 0x00;
        bytes[1] = 0x0f;
        assert_eq!(BlockHash::from_bytes(bytes).leading_zero_digits(), 3);

        assert_eq!(BlockHash::ZERO.leading_zero_digits(), 64);
    }

    #[test]
    fn test_meets_difficulty() {
        let mut bytes = [0xffu8; 32];
        bytes[0] = 0x00;
        bytes[1] = 0x00;
        let hash = BlockHash::from_bytes(bytes);
        assert!(hash.meets_difficulty(0));
        assert!(hash.meets_difficulty(4));
        assert!(!hash.meets_difficulty(5));
    }
}
