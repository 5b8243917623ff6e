//! Configuration management for the password service.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use passwd_common::PasswdError;
use passwd_common::constants::{
    DEFAULT_LISTEN_ADDR, DEFAULT_MAX_PASSWORD_LENGTH, ENV_PREFIX, MAX_BCRYPT_COST,
    MIN_BCRYPT_COST, MIN_PASSWORD_LENGTH,
};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Hashing configuration
    #[serde(default)]
    pub hashing: HashingConfig,

    /// Generator configuration
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// bcrypt configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HashingConfig {
    /// bcrypt work factor
    #[serde(default = "default_bcrypt_cost")]
    pub cost: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            cost: default_bcrypt_cost(),
        }
    }
}

/// Password generator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Longest password a client may request
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
        }
    }
}

// Default value functions
fn default_listen_addr() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}

fn default_bcrypt_cost() -> u32 {
    bcrypt::DEFAULT_COST
}

fn default_max_length() -> usize {
    DEFAULT_MAX_PASSWORD_LENGTH
}

impl AppConfig {
    /// Load configuration from file and `PASSWD_*` env vars, with CLI overrides
    pub fn load(config_path: &str, args: &super::Args) -> Result<Self> {
        let mut builder = config::Config::builder();

        if Path::new(config_path).exists() {
            builder = builder.add_source(config::File::with_name(config_path));
        } else {
            tracing::warn!(path = %config_path, "Config file not found, using defaults");
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to load config")?;

        let mut config: Self = settings
            .try_deserialize()
            .context("Failed to parse config")?;

        // Apply CLI overrides
        if let Some(ref listen) = args.listen {
            config.listen_addr = listen.clone();
        }
        if let Some(cost) = args.bcrypt_cost {
            config.hashing.cost = cost;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the service cannot run with
    pub fn validate(&self) -> Result<(), PasswdError> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.hashing.cost) {
            return Err(PasswdError::Config(format!(
                "hashing.cost must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}, got {}",
                self.hashing.cost
            )));
        }
        if self.generator.max_length < MIN_PASSWORD_LENGTH {
            return Err(PasswdError::Config(format!(
                "generator.max_length must be at least {MIN_PASSWORD_LENGTH}, got {}",
                self.generator.max_length
            )));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            hashing: HashingConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse_toml(toml: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(config.hashing.cost, bcrypt::DEFAULT_COST);
        assert_eq!(config.generator.max_length, DEFAULT_MAX_PASSWORD_LENGTH);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = parse_toml("[hashing]\ncost = 6\n");
        assert_eq!(config.hashing.cost, 6);
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(config.generator.max_length, DEFAULT_MAX_PASSWORD_LENGTH);
    }

    #[test]
    fn test_full_file() {
        let config = parse_toml(
            r#"
            listen_addr = "127.0.0.1:9000"

            [hashing]
            cost = 12

            [generator]
            max_length = 256
            "#,
        );
        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.hashing.cost, 12);
        assert_eq!(config.generator.max_length, 256);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.hashing.cost = 2;
        assert!(matches!(config.validate(), Err(PasswdError::Config(_))));

        let mut config = AppConfig::default();
        config.generator.max_length = 4;
        assert!(matches!(config.validate(), Err(PasswdError::Config(_))));
    }

    /// Sets an environment variable for the lifetime of the guard
    struct EnvGuard(&'static str);

    impl EnvGuard {
        fn set(key: &'static str, value: &str) -> Self {
            // SAFETY: PASSWD_* variables are only written here, and any value
            // a concurrent reader sees still passes validation.
            unsafe { std::env::set_var(key, value) };
            Self(key)
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            // SAFETY: see `EnvGuard::set`.
            unsafe { std::env::remove_var(self.0) };
        }
    }

    #[test]
    fn test_env_overrides() {
        let _cost = EnvGuard::set("PASSWD_HASHING__COST", "7");
        let _max = EnvGuard::set("PASSWD_GENERATOR__MAX_LENGTH", "64");

        let args = crate::Args::parse_from(["passwd-svc", "--config", "does/not/exist.toml"]);
        let config = AppConfig::load(&args.config, &args).unwrap();
        assert_eq!(config.hashing.cost, 7);
        assert_eq!(config.generator.max_length, 64);
    }

    #[test]
    fn test_cli_overrides() {
        let args = crate::Args::parse_from([
            "passwd-svc",
            "--config",
            "does/not/exist.toml",
            "--listen",
            "127.0.0.1:7000",
            "--bcrypt-cost",
            "5",
        ]);
        let config = AppConfig::load(&args.config, &args).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:7000");
        assert_eq!(config.hashing.cost, 5);
    }
}
