//! Strong type definitions for the certledger chain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A block identifier: a monotonically increasing integer assigned by the
/// chain at creation, starting at 1, never reused.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BlockId(pub u64);

impl BlockId {
    /// The id of the genesis block.
    pub const FIRST: Self = Self(1);

    /// Create a BlockId from a raw integer.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw integer value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id that follows this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Debug for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockId({})", self.0)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BlockId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_id_next() {
        assert_eq!(BlockId::FIRST.next(), BlockId::new(2));
        assert_eq!(BlockId::new(41).next().get(), 42);
    }

    #[test]
    fn test_block_id_display() {
        assert_eq!(format!("{}", BlockId::new(7)), "7");
        assert_eq!(format!("{:?}", BlockId::new(7)), "BlockId(7)");
    }
}
