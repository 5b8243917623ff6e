//! Core types shared across the password service.

use serde::{Deserialize, Serialize};

use crate::constants::SYMBOLS;

/// A character class the generator can draw from.
///
/// Lowercase is always enabled and acts as the fill class for any position
/// not claimed by another class's minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Every class, in table order. `index()` is the position in this array.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// Number of classes
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this class in [`CharacterClass::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Lowercase => 0,
            Self::Uppercase => 1,
            Self::Digit => 2,
            Self::Symbol => 3,
        }
    }

    /// The fixed alphabet for this class
    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            Self::Lowercase => b"abcdefghijklmnopqrstuvwxyz",
            Self::Uppercase => b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            Self::Digit => b"0123456789",
            Self::Symbol => SYMBOLS,
        }
    }

    /// Classify a character, returning `None` if no alphabet contains it
    pub fn of(c: char) -> Option<Self> {
        if !c.is_ascii() {
            return None;
        }
        let byte = c as u8;
        Self::ALL
            .into_iter()
            .find(|class| class.alphabet().contains(&byte))
    }
}

/// Constraints for a single password generation.
///
/// Accepts both the snake_case field names of the HTTP API and the
/// camelCase aliases. Missing flags default to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Exact length of the generated password
    pub length: usize,

    /// Require at least one uppercase letter
    #[serde(default, rename = "has_caps", alias = "includeUppercase")]
    pub include_uppercase: bool,

    /// Require at least one digit
    #[serde(default, rename = "has_numbers", alias = "includeDigits")]
    pub include_digits: bool,

    /// Require at least one symbol
    #[serde(default, rename = "has_symbols", alias = "includeSymbols")]
    pub include_symbols: bool,
}

impl GenerationRequest {
    /// Lowercase-only request of the given length
    pub fn new(length: usize) -> Self {
        Self {
            length,
            include_uppercase: false,
            include_digits: false,
            include_symbols: false,
        }
    }

    pub fn with_uppercase(mut self) -> Self {
        self.include_uppercase = true;
        self
    }

    pub fn with_digits(mut self) -> Self {
        self.include_digits = true;
        self
    }

    pub fn with_symbols(mut self) -> Self {
        self.include_symbols = true;
        self
    }

    /// Whether a class is enabled. Lowercase always is.
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => true,
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Digit => self.include_digits,
            CharacterClass::Symbol => self.include_symbols,
        }
    }

    /// Number of enabled classes, lowercase included
    pub fn variations(&self) -> usize {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.is_enabled(*class))
            .count()
    }
}

/// Body of `POST /password/encrypt`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptRequest {
    pub password: String,
}

/// Response of `POST /password/encrypt`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptResponse {
    pub status: u16,
    pub message: String,
    pub encrypted_password: String,
}

/// Body of `POST /password/validate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateRequest {
    pub password: String,
    pub stored_password: String,
}

/// Response of `POST /password/validate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub status: u16,
    pub message: String,
    pub is_valid: bool,
}

/// Response of `POST /password/generate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub status: u16,
    pub message: String,
    pub random_password: String,
}

/// Metrics snapshot for monitoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Passwords hashed since startup
    pub secrets_hashed: u64,

    /// Hash failures since startup
    pub hash_failures: u64,

    /// Verifications performed since startup
    pub verifications: u64,

    /// Passwords generated since startup
    pub secrets_generated: u64,

    /// Generation requests rejected since startup
    pub generation_failures: u64,

    /// Seconds since startup
    pub uptime_secs: u64,

    /// Startup time
    pub started_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(CharacterClass::Lowercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Uppercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Digit.alphabet().len(), 10);
        assert_eq!(CharacterClass::Symbol.alphabet().len(), 10);
    }

    #[test]
    fn test_index_matches_table_order() {
        for (i, class) in CharacterClass::ALL.into_iter().enumerate() {
            assert_eq!(class.index(), i);
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(CharacterClass::of('q'), Some(CharacterClass::Lowercase));
        assert_eq!(CharacterClass::of('Q'), Some(CharacterClass::Uppercase));
        assert_eq!(CharacterClass::of('7'), Some(CharacterClass::Digit));
        assert_eq!(CharacterClass::of('~'), Some(CharacterClass::Symbol));
        assert_eq!(CharacterClass::of('-'), None);
        assert_eq!(CharacterClass::of('é'), None);
    }

    #[test]
    fn test_variations() {
        assert_eq!(GenerationRequest::new(8).variations(), 1);
        let all = GenerationRequest::new(12)
            .with_uppercase()
            .with_digits()
            .with_symbols();
        assert_eq!(all.variations(), 4);
        assert_eq!(GenerationRequest::new(12).with_digits().variations(), 2);
    }

    #[test]
    fn test_request_wire_names() {
        let req: GenerationRequest = serde_json::from_str(
            r#"{"has_caps": true, "has_numbers": false, "has_symbols": true, "length": 16}"#,
        )
        .unwrap();
        assert_eq!(req.length, 16);
        assert!(req.include_uppercase);
        assert!(!req.include_digits);
        assert!(req.include_symbols);
    }

    #[test]
    fn test_request_camel_case_aliases() {
        let req: GenerationRequest = serde_json::from_str(
            r#"{"includeUppercase": true, "includeDigits": true, "length": 10}"#,
        )
        .unwrap();
        assert!(req.include_uppercase);
        assert!(req.include_digits);
        assert!(!req.include_symbols);
    }

    #[test]
    fn test_request_requires_length() {
        let result = serde_json::from_str::<GenerationRequest>(r#"{"has_caps": true}"#);
        assert!(result.is_err());
    }
}
