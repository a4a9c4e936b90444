// src/infrastructure/security/entropy.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::schedule::EntropySource;
use rand_core::{OsRng, RngCore};

/// Operating-system CSPRNG. Every call reads fresh bytes; nothing is buffered.
#[derive(Default, Clone)]
pub struct OsEntropySource;

impl EntropySource for OsEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> DomainResult<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|err| DomainError::RandomSourceUnavailable(err.to_string()))
    }
}
