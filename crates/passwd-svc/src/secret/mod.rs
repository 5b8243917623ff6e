//! Password generation and hashing.
//!
//! The generator is pure and synchronous. The hasher wraps bcrypt, which is
//! deliberately slow, so callers on the async runtime should run it on the
//! blocking pool.

mod generator;
mod hasher;

pub use generator::SecretGenerator;
pub use hasher::{BcryptHasher, SecretHasher};
