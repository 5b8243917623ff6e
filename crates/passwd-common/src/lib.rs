//! # Passwd Common
//!
//! Shared types, errors, and constants used by the password service.
//!
//! ## Modules
//! - `types` - Core data structures (GenerationRequest, CharacterClass, wire bodies)
//! - `error` - Common error types
//! - `constants` - Shared configuration constants

pub mod constants;
pub mod error;
pub mod types;

pub use error::PasswdError;
pub use types::*;
