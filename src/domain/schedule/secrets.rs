// src/domain/schedule/secrets.rs
//! Identifier and edit-token issuance.
//!
//! Edit tokens are the only access-control primitive in the system, so every
//! byte comes from an [`EntropySource`] backed by the operating system CSPRNG
//! in production. Failures of that source are surfaced, never retried.
use crate::domain::errors::DomainResult;
use uuid::Builder;

/// Number of random bytes behind an edit token (256 bits).
pub const EDIT_TOKEN_BYTES: usize = 32;

/// Length of the hex-encoded edit token.
pub const EDIT_TOKEN_LEN: usize = EDIT_TOKEN_BYTES * 2;

pub trait EntropySource: Send + Sync {
    /// Fill `dest` with cryptographically secure random bytes.
    ///
    /// Implementations return `DomainError::RandomSourceUnavailable` when the
    /// underlying source cannot deliver.
    fn fill_bytes(&self, dest: &mut [u8]) -> DomainResult<()>;
}

/// Random UUID v4 rendered as the canonical 36-character hyphenated string.
pub fn new_identifier(entropy: &dyn EntropySource) -> DomainResult<String> {
    let mut bytes = [0u8; 16];
    entropy.fill_bytes(&mut bytes)?;
    // sets the version nibble to 4 and the variant bits to 10xx
    let uuid = Builder::from_random_bytes(bytes).into_uuid();
    Ok(uuid.hyphenated().to_string())
}

/// 256 random bits, lowercase hex.
pub fn new_edit_token(entropy: &dyn EntropySource) -> DomainResult<String> {
    let mut bytes = [0u8; EDIT_TOKEN_BYTES];
    entropy.fill_bytes(&mut bytes)?;
    Ok(hex::encode(bytes))
}

/// Compare two secrets without short-circuiting on the first differing byte.
pub fn constant_time_eq(left: &[u8], right: &[u8]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    left.iter()
        .zip(right.iter())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
