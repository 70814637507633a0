//! Property suite for the chain primitives.
//!
//! Mining in these properties runs at difficulty 0 or 1 so the suite stays
//! fast; the hash-derivation laws under test are difficulty-independent.

use proptest::prelude::*;

use certledger_core::{Block, BlockHash, BlockId, Chain, ChainConfig, Miner, TokenMap};
use certledger_testkit::generators::{secret, token_map};

/// Mine and seal a genesis block at difficulty 0.
fn sealed(tokens: TokenMap, secret: &str) -> Block {
    let mut block = Block::candidate(BlockId::FIRST, tokens, None, secret);
    Miner::new(0).mine(&mut block).expect("difficulty 0 mines");
    block.verification_hash = block.compute_verification_hash();
    block
}

fn fast_config() -> ChainConfig {
    ChainConfig {
        difficulty: 1,
        max_mining_attempts: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn total_hash_is_deterministic(tokens in token_map(), secret in secret()) {
        let a = Block::candidate(BlockId::FIRST, tokens.clone(), None, secret.clone());
        let b = Block::candidate(BlockId::FIRST, tokens, None, secret);
        prop_assert_eq!(a.compute_total_hash(), b.compute_total_hash());
        prop_assert_eq!(a.compute_total_hash(), a.compute_total_hash());
    }

    #[test]
    fn sealed_block_validates_repeatedly(tokens in token_map(), secret in secret()) {
        let block = sealed(tokens, &secret);
        prop_assert!(block.is_valid());
        prop_assert!(block.is_valid());
    }

    #[test]
    fn mined_hash_meets_difficulty(tokens in token_map(), secret in secret(), difficulty in 0u32..3) {
        let mut block = Block::candidate(BlockId::FIRST, tokens, None, secret);
        Miner::new(difficulty).mine(&mut block).expect("low difficulty mines");
        let hex = block.total_hash.to_hex();
        prop_assert!(hex.starts_with(&"0".repeat(difficulty as usize)));
    }

    #[test]
    fn tampering_nonce_is_detected(tokens in token_map(), secret in secret()) {
        let mut block = sealed(tokens, &secret);
        block.nonce += 1;
        prop_assert!(!block.is_valid());
    }

    #[test]
    fn tampering_tokens_is_detected(tokens in token_map(), secret in secret()) {
        let mut block = sealed(tokens, &secret);
        // Uppercase keys are outside the generator alphabet, so this entry
        // is always new and always changes the canonical text.
        block.tokens.insert("ZZ", 1i64);
        prop_assert!(!block.is_valid());
    }

    #[test]
    fn tampering_previous_hash_is_detected(tokens in token_map(), secret in secret()) {
        let mut block = sealed(tokens, &secret);
        block.previous_hash = Some(BlockHash::hash(b"forged"));
        prop_assert!(!block.is_valid());
    }

    #[test]
    fn tampering_additional_token_is_detected(tokens in token_map(), secret in secret()) {
        let mut block = sealed(tokens, &secret);
        block.additional_token.push('x');
        prop_assert!(!block.is_valid());
    }

    #[test]
    fn chain_linkage_holds(entries in prop::collection::vec((token_map(), secret()), 1..5)) {
        let mut chain = Chain::empty(fast_config());
        for (tokens, secret) in entries {
            chain.append(tokens, secret).expect("append succeeds");
        }

        let blocks = chain.blocks();
        prop_assert!(blocks[0].is_genesis());
        prop_assert_eq!(blocks[0].previous_hash_text(), "0");
        for i in 1..blocks.len() {
            prop_assert_eq!(blocks[i].previous_hash, Some(blocks[i - 1].total_hash));
            prop_assert_eq!(blocks[i].id, blocks[i - 1].id.next());
        }
        prop_assert!(blocks.iter().all(Block::is_valid));
    }

    #[test]
    fn restore_reproduces_chain(entries in prop::collection::vec((token_map(), secret()), 1..4)) {
        let mut chain = Chain::empty(fast_config());
        for (tokens, secret) in entries {
            chain.append(tokens, secret).expect("append succeeds");
        }

        let rows = chain.blocks().to_vec();
        let (restored, report) = Chain::restore(rows.clone(), fast_config());
        prop_assert_eq!(report.tampered, None);
        prop_assert_eq!(restored.blocks(), rows.as_slice());
        prop_assert_eq!(restored.next_id(), chain.next_id());
    }

    #[test]
    fn lookup_finds_every_issued_block(entries in prop::collection::vec((token_map(), secret()), 1..4)) {
        let mut chain = Chain::empty(fast_config());
        let mut hashes = Vec::new();
        for (tokens, secret) in entries {
            hashes.push(chain.append(tokens, secret).expect("append succeeds").verification_hash);
        }

        for (i, hash) in hashes.iter().enumerate() {
            let block = chain.find_by_verification_hash(hash).expect("issued block found");
            prop_assert_eq!(block.id, BlockId::new(i as u64 + 1));
        }
    }
}
