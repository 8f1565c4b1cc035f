//! Unique identifier sources for registrations and observations.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

/// Supplies opaque, unique string tokens.
///
/// The generator draws every registration and observation identifier from
/// one source, so tests can swap in predictable sequences.
pub trait IdSource {
    /// Return the next identifier.
    fn next_id(&mut self) -> String;
}

/// UUID-shaped identifiers derived from a seeded RNG.
///
/// The same seed always yields the same identifier sequence.
#[derive(Debug, Clone)]
pub struct SeededIds {
    rng: ChaCha8Rng,
}

impl SeededIds {
    /// Create a source seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl IdSource for SeededIds {
    fn next_id(&mut self) -> String {
        Uuid::from_u128(self.rng.random()).to_string()
    }
}

/// Identifiers built from a prefix and an incrementing counter.
///
/// Produces `"{prefix}-0"`, `"{prefix}-1"` and so on.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    /// Create a counter-backed source.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

impl<T: IdSource + ?Sized> IdSource for &mut T {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}
