//! Shared constants for the password service.

/// Default HTTP listen address
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/passwd-svc.toml";

/// Prefix for environment variable overrides of the config file
pub const ENV_PREFIX: &str = "PASSWD";

/// Shortest password the generator will produce
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Default upper bound on generated password length
pub const DEFAULT_MAX_PASSWORD_LENGTH: usize = 1024;

/// Cheapest bcrypt cost accepted by the hasher
pub const MIN_BCRYPT_COST: u32 = 4;

/// Most expensive bcrypt cost accepted by the hasher
pub const MAX_BCRYPT_COST: u32 = 31;

/// Characters permitted by the symbol class
pub const SYMBOLS: &[u8; 10] = b"#!@$%&^*?~";

/// Response messages shared by handlers and their tests
pub mod messages {
    pub const BAD_REQUEST_BODY: &str = "Error in request body";
    pub const PONG: &str = "pong";
    pub const ENCRYPTED: &str = "password encrypted successfully";
    pub const ENCRYPT_FAILED: &str = "Error while encrypting the password";
    pub const VALIDATED: &str = "password validated successfully";
    pub const GENERATED: &str = "random password generated";
}
