//! The certificate service: the one surface an API layer calls.
//!
//! One explicitly constructed instance owns the chain and its store.
//! Startup rehydrates the chain (or starts empty), `issue` and `verify` run
//! for the life of the process, and `flush` re-persists on shutdown.

use tokio::sync::RwLock;
use tracing::{info, warn};

use certledger_core::{Block, BlockHash, BlockId, Chain, ChainConfig, ChainError, TokenMap};
use certledger_store::{Store, StoreError};

use crate::error::{LedgerError, Result};

/// Service construction parameters.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Chain parameters: difficulty and the optional mining attempt cap.
    pub chain: ChainConfig,
    /// Refuse to start when the persisted chain fails validation, instead
    /// of continuing with the truncated known-good prefix.
    pub halt_on_tamper: bool,
}

/// Receipt handed back to the caller of [`CertificateService::issue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedCertificate {
    pub block_id: BlockId,
    /// Hex verification hash: the holder's proof-of-authenticity key.
    pub verification_hash: String,
}

/// Full block view returned by [`CertificateService::verify`].
#[derive(Debug, Clone, PartialEq)]
pub struct CertificateView {
    pub block_id: BlockId,
    pub tokens: TokenMap,
    pub previous_hash: String,
    pub nonce: u64,
    pub total_hash: String,
    pub verification_hash: String,
}

impl From<&Block> for CertificateView {
    fn from(block: &Block) -> Self {
        Self {
            block_id: block.id,
            tokens: block.tokens.clone(),
            previous_hash: block.previous_hash_text(),
            nonce: block.nonce,
            total_hash: block.total_hash.to_hex(),
            verification_hash: block.verification_hash.to_hex(),
        }
    }
}

/// The certificate service.
///
/// The chain behind it is the only mutable shared state; all mutation is
/// serialized behind the write lock, so appends can never interleave id
/// assignment or tail-hash reads. Verification takes the read lock and may
/// run concurrently with other verifications.
pub struct CertificateService<S: Store> {
    store: S,
    chain: RwLock<Chain>,
}

impl<S: Store> CertificateService<S> {
    /// Startup hook: rehydrate the chain from the store, or start empty.
    ///
    /// A missing store is "no history yet", not an error. A tampered store
    /// yields the truncated known-good prefix and a warning, unless
    /// [`ServiceConfig::halt_on_tamper`] is set.
    pub async fn load(store: S, config: ServiceConfig) -> Result<Self> {
        let rows = match store.load_all().await {
            Ok(rows) => rows,
            Err(StoreError::Unavailable) => {
                info!("no persisted chain data found, starting with an empty chain");
                Vec::new()
            }
            Err(err) => return Err(err.into()),
        };

        let (chain, report) = Chain::restore(rows, config.chain);

        match report.tampered {
            Some(block_id) if config.halt_on_tamper => {
                return Err(LedgerError::TamperedHistory { block_id });
            }
            Some(block_id) => {
                warn!(
                    %block_id,
                    loaded = report.loaded,
                    "persisted chain tampered, continuing with truncated history"
                );
            }
            None => {
                info!(blocks = report.loaded, "chain restored");
            }
        }

        Ok(Self {
            store,
            chain: RwLock::new(chain),
        })
    }

    /// Issue a certificate: mine and append a block, then persist the full
    /// chain.
    ///
    /// If persistence fails the in-memory append is rolled back, so an
    /// error here means the certificate does not exist anywhere.
    pub async fn issue(
        &self,
        tokens: TokenMap,
        secret: impl Into<String>,
    ) -> Result<IssuedCertificate> {
        let mut chain = self.chain.write().await;

        let (block_id, verification_hash) = {
            let block = chain.append(tokens, secret)?;
            (block.id, block.verification_hash)
        };

        if let Err(err) = self.store.save_all(chain.blocks()).await {
            chain.rollback_last();
            warn!(%block_id, "persisting chain failed, issuance rolled back");
            return Err(err.into());
        }

        info!(%block_id, "certificate issued");
        Ok(IssuedCertificate {
            block_id,
            verification_hash: verification_hash.to_hex(),
        })
    }

    /// Verify a certificate by its hex verification hash.
    ///
    /// Returns the full block view on success. An unknown hash (including
    /// one that is not valid hex and therefore can never name a block) is
    /// the not-found outcome; a matching block that fails re-validation is
    /// the distinct tampered outcome.
    pub async fn verify(&self, verification_hash: &str) -> Result<CertificateView> {
        let Ok(key) = BlockHash::from_hex(verification_hash) else {
            return Err(ChainError::NotFound.into());
        };

        let chain = self.chain.read().await;
        let block = chain.find_by_verification_hash(&key)?;
        Ok(CertificateView::from(block))
    }

    /// Shutdown hook: re-persist the current chain.
    pub async fn flush(&self) -> Result<()> {
        let chain = self.chain.read().await;
        self.store.save_all(chain.blocks()).await?;
        Ok(())
    }

    /// Number of blocks currently in the chain.
    pub async fn chain_len(&self) -> usize {
        self.chain.read().await.len()
    }
}
