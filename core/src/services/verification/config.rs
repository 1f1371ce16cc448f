//! Configuration for the verification service

use serde::{Deserialize, Serialize};

/// Default length of a verification code
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// Alphabet a verification code is drawn from.
///
/// Both variants are in use across deployments; the alphabet is a
/// configuration choice and nothing outside the generator may assume one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeAlphabet {
    /// Uppercase letters and digits (36 symbols)
    UppercaseAlphanumeric,
    /// Digits only (10 symbols)
    Digits,
}

impl CodeAlphabet {
    /// The symbols of this alphabet
    pub fn symbols(&self) -> &'static [u8] {
        match self {
            CodeAlphabet::UppercaseAlphanumeric => b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789",
            CodeAlphabet::Digits => b"0123456789",
        }
    }
}

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationConfig {
    /// Number of characters in a verification code
    pub code_length: usize,

    /// Alphabet codes are drawn from
    pub alphabet: CodeAlphabet,

    /// Minutes from issuance until a code expires
    pub code_expiration_minutes: i64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            alphabet: CodeAlphabet::UppercaseAlphanumeric,
            code_expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
        }
    }
}
