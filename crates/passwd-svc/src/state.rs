//! Application state and shared resources.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crate::config::AppConfig;
use crate::secret::{BcryptHasher, SecretGenerator, SecretHasher};
use passwd_common::MetricsSnapshot;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Password hasher
    pub hasher: Arc<dyn SecretHasher>,

    /// Password generator
    pub generator: Arc<SecretGenerator>,

    /// Request counters
    pub stats: Arc<ServiceStats>,
}

impl AppState {
    /// Create application state from validated configuration
    pub fn new(config: AppConfig) -> Result<Self> {
        let hasher = BcryptHasher::new(config.hashing.cost).context("Failed to create hasher")?;
        tracing::info!(cost = hasher.cost(), "bcrypt hasher ready");
        Ok(Self::with_hasher(config, Arc::new(hasher)))
    }

    /// Create application state around an existing hasher
    pub fn with_hasher(config: AppConfig, hasher: Arc<dyn SecretHasher>) -> Self {
        let generator = Arc::new(SecretGenerator::new(config.generator.max_length));

        Self {
            config,
            hasher,
            generator,
            stats: Arc::new(ServiceStats::new()),
        }
    }
}

/// Monotonic counters for the metrics endpoint
#[derive(Debug)]
pub struct ServiceStats {
    started_at: DateTime<Utc>,
    started: Instant,
    secrets_hashed: AtomicU64,
    hash_failures: AtomicU64,
    verifications: AtomicU64,
    secrets_generated: AtomicU64,
    generation_failures: AtomicU64,
}

impl ServiceStats {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            started: Instant::now(),
            secrets_hashed: AtomicU64::new(0),
            hash_failures: AtomicU64::new(0),
            verifications: AtomicU64::new(0),
            secrets_generated: AtomicU64::new(0),
            generation_failures: AtomicU64::new(0),
        }
    }

    pub fn record_hash(&self, ok: bool) {
        let counter = if ok { &self.secrets_hashed } else { &self.hash_failures };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_verification(&self) {
        self.verifications.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_generation(&self, ok: bool) {
        let counter = if ok {
            &self.secrets_generated
        } else {
            &self.generation_failures
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            secrets_hashed: self.secrets_hashed.load(Ordering::Relaxed),
            hash_failures: self.hash_failures.load(Ordering::Relaxed),
            verifications: self.verifications.load(Ordering::Relaxed),
            secrets_generated: self.secrets_generated.load(Ordering::Relaxed),
            generation_failures: self.generation_failures.load(Ordering::Relaxed),
            uptime_secs: self.started.elapsed().as_secs(),
            started_at: self.started_at,
        }
    }
}

impl Default for ServiceStats {
    fn default() -> Self {
        Self::new()
    }
}
