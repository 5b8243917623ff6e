//! Constrained random password generation.
//!
//! Each enabled non-lowercase class gets a random minimum drawn from
//! `[1, length / variations]`. A minimum-driven pass places characters by
//! picking classes uniformly at random until every minimum is met, then the
//! rest of the buffer is filled with lowercase. Output therefore skews
//! toward lowercase, with only the guaranteed floor of each other class.

use passwd_common::constants::MIN_PASSWORD_LENGTH;
use passwd_common::{CharacterClass, GenerationRequest, PasswdError};
use rand::Rng;

/// Per-class quotas for the minimum-driven pass of one generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    /// Capacity ceiling per class (`length / variations`, at least 1)
    ceiling: usize,
    /// Quota per class, indexed by `CharacterClass::index`
    quotas: [usize; CharacterClass::COUNT],
}

impl GenerationPlan {
    /// Draw the minimums for a request.
    ///
    /// Disabled classes get a zero quota. Lowercase may take up to the
    /// ceiling during the minimum-driven pass and fills whatever is left.
    pub fn draw<R: Rng>(rng: &mut R, request: &GenerationRequest) -> Self {
        // `length >= 8` keeps this at 2 or more; the clamp keeps the draw
        // range non-empty for any length.
        let ceiling = (request.length / request.variations()).max(1);

        let mut quotas = [0; CharacterClass::COUNT];
        for class in CharacterClass::ALL {
            quotas[class.index()] = match class {
                CharacterClass::Lowercase => ceiling,
                _ if request.is_enabled(class) => rng.random_range(1..=ceiling),
                _ => 0,
            };
        }

        Self { ceiling, quotas }
    }

    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    /// Quota for a class in the minimum-driven pass
    pub fn quota(&self, class: CharacterClass) -> usize {
        self.quotas[class.index()]
    }

    /// Guaranteed minimum for a class in the final password
    pub fn minimum(&self, class: CharacterClass) -> usize {
        match class {
            CharacterClass::Lowercase => 0,
            _ => self.quota(class),
        }
    }

    /// True once every non-lowercase class has reached its minimum
    fn floors_met(&self, counts: &[usize; CharacterClass::COUNT]) -> bool {
        CharacterClass::ALL
            .into_iter()
            .all(|class| counts[class.index()] >= self.minimum(class))
    }
}

/// Random password generator
#[derive(Debug, Clone)]
pub struct SecretGenerator {
    /// Longest password accepted
    max_length: usize,
}

impl SecretGenerator {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Generate a password using the thread-local CSPRNG
    pub fn generate(&self, request: &GenerationRequest) -> Result<String, PasswdError> {
        self.generate_with(&mut rand::rng(), request)
    }

    /// Generate a password drawing every random choice from `rng`
    pub fn generate_with<R: Rng>(
        &self,
        rng: &mut R,
        request: &GenerationRequest,
    ) -> Result<String, PasswdError> {
        self.validate(request)?;

        let plan = GenerationPlan::draw(rng, request);
        let mut password = Vec::with_capacity(request.length);
        let mut counts = [0usize; CharacterClass::COUNT];

        while password.len() < request.length && !plan.floors_met(&counts) {
            let class = CharacterClass::ALL[rng.random_range(0..CharacterClass::COUNT)];
            if counts[class.index()] < plan.quota(class) {
                password.push(draw_char(rng, class));
                counts[class.index()] += 1;
            }
        }

        while password.len() < request.length {
            password.push(draw_char(rng, CharacterClass::Lowercase));
        }

        tracing::trace!(
            length = request.length,
            ceiling = plan.ceiling(),
            uppercase = counts[CharacterClass::Uppercase.index()],
            digits = counts[CharacterClass::Digit.index()],
            symbols = counts[CharacterClass::Symbol.index()],
            "Generated password"
        );

        Ok(password.into_iter().map(char::from).collect())
    }

    fn validate(&self, request: &GenerationRequest) -> Result<(), PasswdError> {
        if (MIN_PASSWORD_LENGTH..=self.max_length).contains(&request.length) {
            Ok(())
        } else {
            Err(PasswdError::InvalidLength {
                length: request.length,
                min: MIN_PASSWORD_LENGTH,
                max: self.max_length,
            })
        }
    }
}

impl Default for SecretGenerator {
    fn default() -> Self {
        Self::new(passwd_common::constants::DEFAULT_MAX_PASSWORD_LENGTH)
    }
}

/// Draw one character uniformly from a class's alphabet
fn draw_char<R: Rng>(rng: &mut R, class: CharacterClass) -> u8 {
    let alphabet = class.alphabet();
    alphabet[rng.random_range(0..alphabet.len())]
}
