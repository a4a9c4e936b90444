// tests/support/mocks/entropy.rs
use kareru::domain::errors::{DomainError, DomainResult};
use kareru::domain::schedule::EntropySource;

/// 乱数源が利用できない状況を再現する
pub struct FailingEntropy;

impl EntropySource for FailingEntropy {
    fn fill_bytes(&self, _dest: &mut [u8]) -> DomainResult<()> {
        Err(DomainError::RandomSourceUnavailable(
            "entropy pool unavailable".into(),
        ))
    }
}
