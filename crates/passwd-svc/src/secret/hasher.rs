//! Adaptive password hashing.

use passwd_common::PasswdError;
use passwd_common::constants::{MAX_BCRYPT_COST, MIN_BCRYPT_COST};

/// One-way password hashing with verification
pub trait SecretHasher: Send + Sync {
    /// Hash a plaintext password. Salted, so repeated calls differ.
    fn hash(&self, plaintext: &str) -> Result<String, PasswdError>;

    /// Check a plaintext password against a digest from [`SecretHasher::hash`].
    ///
    /// Malformed digests verify as `false`.
    fn verify(&self, plaintext: &str, digest: &str) -> bool;
}

/// bcrypt-backed hasher
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    /// Work factor (log2 of rounds)
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Result<Self, PasswdError> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
            return Err(PasswdError::Config(format!(
                "bcrypt cost must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}, got {cost}"
            )));
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl SecretHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String, PasswdError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| PasswdError::Hashing(e.to_string()))
    }

    fn verify(&self, plaintext: &str, digest: &str) -> bool {
        match bcrypt::verify(plaintext, digest) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::debug!(error = %e, "Rejecting malformed digest");
                false
            }
        }
    }
}
