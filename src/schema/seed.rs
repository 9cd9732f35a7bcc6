//! Seed tokens for reproducible attractor searches.
//!
//! A token is the base64 rendering of the hex XXH64 digest of a seed phrase.
//! Decoding a token yields the hex digest; its value modulo 2^32 seeds the
//! search generator.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use twox_hash::XxHash64;

/// Hex digits that determine the generator seed (16^8 = 2^32).
const SEED_HEX_DIGITS: usize = 8;

/// Reversibly encoded seed string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeedToken(String);

impl SeedToken {
    /// Derive a token from a human-chosen seed phrase.
    pub fn from_phrase(phrase: &str) -> Self {
        let digest = XxHash64::oneshot(0, phrase.as_bytes());
        Self(STANDARD.encode(format!("{digest:016x}")))
    }

    /// Derive a token from process entropy.
    pub fn from_entropy() -> Self {
        let phrase = rand::random::<u64>().to_string();
        Self::from_phrase(&phrase)
    }

    /// Validate an externally supplied token.
    pub fn parse(token: &str) -> Result<Self, SeedError> {
        let token = Self(token.trim().to_string());
        token.rng_seed()?;
        Ok(token)
    }

    /// Encoded form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reverse the text encoding, yielding the hex digest.
    pub fn decode(&self) -> Result<String, SeedError> {
        let bytes = STANDARD.decode(self.0.as_bytes())?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Generator seed: the decoded digest modulo 2^32.
    pub fn rng_seed(&self) -> Result<u64, SeedError> {
        let digest = self.decode()?;
        if digest.is_empty() || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SeedError::Hex(digest));
        }
        let tail = &digest[digest.len().saturating_sub(SEED_HEX_DIGITS)..];
        u64::from_str_radix(tail, 16).map_err(|_| SeedError::Hex(digest.clone()))
    }
}

impl fmt::Display for SeedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SeedToken {
    type Error = SeedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SeedToken> for String {
    fn from(token: SeedToken) -> Self {
        token.0
    }
}

/// Where a search takes its randomness from.
#[derive(Debug, Clone, Default)]
pub enum SeedSource {
    /// Fresh token from process entropy.
    #[default]
    Entropy,
    /// Seed phrase chosen by the user.
    Phrase(String),
    /// Token from an earlier run.
    Token(SeedToken),
}

impl SeedSource {
    /// Resolve to a concrete token.
    pub fn resolve(self) -> SeedToken {
        match self {
            SeedSource::Entropy => SeedToken::from_entropy(),
            SeedSource::Phrase(phrase) => SeedToken::from_phrase(&phrase),
            SeedSource::Token(token) => token,
        }
    }
}

/// Seed token decoding errors.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SeedError {
    #[error("Seed token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Seed token does not decode to text: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("Seed token does not decode to a hex digest: {0:?}")]
    Hex(String),
}
