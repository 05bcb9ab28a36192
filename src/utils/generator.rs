//! Random name and token generation.
//!
//! Shortcut names and edit keys are both drawn from the same 62-character
//! alphanumeric alphabet; only the length differs.

use rand::Rng;

/// Characters a generated string may contain: `a-z`, `A-Z`, `0-9`, each once.
pub const ALPHABET: &[u8; 62] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of generated shortcut names.
pub const NAME_LENGTH: usize = 6;

/// Length of generated edit keys.
pub const TOKEN_LENGTH: usize = 18;

/// Source of random fixed-alphabet strings.
#[cfg_attr(test, mockall::automock)]
pub trait Generator: Send + Sync {
    /// Returns `length` characters, each drawn uniformly and independently
    /// from [`ALPHABET`].
    fn generate(&self, length: usize) -> String;
}

/// [`Generator`] backed by the thread-local CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomGenerator;

impl RandomGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator for RandomGenerator {
    fn generate(&self, length: usize) -> String {
        let mut rng = rand::rng();

        (0..length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}
