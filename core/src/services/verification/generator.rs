//! Verification code generation and hashing.
//!
//! The same normalization and digest are used on the issuance and the
//! verification path; an encoding mismatch between the two would make
//! every correct code look wrong, so both live here and nowhere else.

use constant_time_eq::constant_time_eq;
use rand::rngs::OsRng;
use rand::Rng;
use sha2::{Digest, Sha256};

use super::config::{CodeAlphabet, VerificationConfig};

/// Generates human-enterable verification codes and their digests
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    alphabet: CodeAlphabet,
    length: usize,
}

impl CodeGenerator {
    /// Create a generator from the service configuration
    pub fn new(config: &VerificationConfig) -> Self {
        Self {
            alphabet: config.alphabet,
            length: config.code_length,
        }
    }

    /// Generate a random code using the OS CSPRNG.
    ///
    /// `gen_range` is unbiased over the alphabet, unlike a modulo draw.
    pub fn generate(&self) -> String {
        let symbols = self.alphabet.symbols();
        let mut rng = OsRng;
        (0..self.length)
            .map(|_| symbols[rng.gen_range(0..symbols.len())] as char)
            .collect()
    }

    /// Normalize a submitted code before hashing.
    ///
    /// Codes are case-insensitive on entry: generated codes are already
    /// uppercase, and user input is uppercased to match, so `"a1b2c3"`
    /// verifies a code issued as `"A1B2C3"`.
    pub fn normalize(code: &str) -> String {
        code.trim().to_uppercase()
    }

    /// One-way digest of a code: lowercase hex SHA-256 of the normalized
    /// plaintext. This exact encoding is what gets persisted.
    pub fn hash_code(code: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(Self::normalize(code).as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Constant-time comparison of a stored digest against the digest of
    /// a submitted code.
    pub fn matches(stored_hash: &str, submitted_code: &str) -> bool {
        let submitted_hash = Self::hash_code(submitted_code);
        stored_hash.len() == submitted_hash.len()
            && constant_time_eq(stored_hash.as_bytes(), submitted_hash.as_bytes())
    }
}
