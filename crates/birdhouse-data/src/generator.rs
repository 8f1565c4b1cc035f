//! Dataset generation from reference pools.
//!
//! A generation pass creates every registration from scratch. When empty
//! registrations are requested but a pass happens to produce none, the whole
//! pass is discarded and generation starts over. The loop is probabilistic:
//! it terminates with probability one but has no fixed iteration bound.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, DatasetBuilder, Structure};
use crate::error::GenerationError;
use crate::ids::IdSource;
use crate::noise_field::NoiseSource;
use crate::occupancy::{OccupancyCadence, OccupancySynthesizer};
use crate::pools::ReferencePools;

/// Inputs controlling the size and shape of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    /// Number of registrations to create.
    pub registrations: usize,
    /// Probability that a registration has no structure, within `[0, 1]`.
    pub empty_probability: f64,
    /// Occupancy history shape for populated registrations.
    pub occupancy: OccupancyCadence,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            registrations: 20,
            empty_probability: 0.1,
            occupancy: OccupancyCadence::default(),
        }
    }
}

impl GenerationParameters {
    /// Check every parameter is in range.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidParameters`] when the empty
    /// probability is not a finite value within `[0, 1]` or the occupancy
    /// cadence is invalid.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if !(0.0..=1.0).contains(&self.empty_probability) {
            return Err(GenerationError::InvalidParameters {
                message: format!(
                    "empty registration probability must be within [0, 1], got {}",
                    self.empty_probability
                ),
            });
        }
        self.occupancy.validate()
    }

    /// Whether a pass with `empty_generated` empty registrations is kept.
    fn accepts(&self, empty_generated: usize) -> bool {
        self.registrations == 0 || self.empty_probability <= 0.0 || empty_generated > 0
    }
}

/// A dataset together with the number of passes it took.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    /// The accepted dataset.
    pub dataset: Dataset,
    /// Generation passes run, including the accepted one. Always at least 1.
    pub passes: usize,
}

/// Drives dataset generation.
///
/// # Example
///
/// ```
/// use birdhouse_data::{
///     DatasetGenerator, GenerationParameters, PerlinNoise, ReferencePools, SeededIds,
/// };
/// use chrono::Utc;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let pools = ReferencePools::bundled().expect("bundled pools");
/// let mut generator = DatasetGenerator::new(pools, SeededIds::new(1), PerlinNoise);
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let generated = generator
///     .generate(&GenerationParameters::default(), &mut rng, Utc::now())
///     .expect("generation succeeds");
///
/// assert_eq!(generated.dataset.len(), 20);
/// assert!(generated.dataset.empty_count() >= 1);
/// ```
#[derive(Debug)]
pub struct DatasetGenerator<I, N> {
    pools: ReferencePools,
    ids: I,
    noise: N,
}

impl<I: IdSource, N: NoiseSource> DatasetGenerator<I, N> {
    /// Create a generator over `pools`, drawing identifiers from `ids` and
    /// noise fields from `noise`.
    #[must_use]
    pub const fn new(pools: ReferencePools, ids: I, noise: N) -> Self {
        Self { pools, ids, noise }
    }

    /// Generate a dataset, regenerating from scratch until the pass is
    /// accepted.
    ///
    /// `now` anchors the newest observation of every history.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidParameters`] for out-of-range
    /// parameters and [`GenerationError::Dataset`] if the identifier source
    /// repeats itself.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        params: &GenerationParameters,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Result<Generated, GenerationError> {
        params.validate()?;

        let mut passes = 0_usize;
        loop {
            passes = passes.saturating_add(1);
            let (dataset, empty_generated) = self.generate_pass(params, rng, now)?;
            if params.accepts(empty_generated) {
                return Ok(Generated { dataset, passes });
            }
        }
    }

    fn generate_pass<R: Rng + ?Sized>(
        &mut self,
        params: &GenerationParameters,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Result<(Dataset, usize), GenerationError> {
        let synthesizer = OccupancySynthesizer::new(&self.noise, params.occupancy);
        let mut builder = DatasetBuilder::default();
        let mut empty_generated = 0_usize;

        for _ in 0..params.registrations {
            let id = self.ids.next_id();

            if rng.random_bool(params.empty_probability) {
                empty_generated = empty_generated.saturating_add(1);
                builder.push(id, None)?;
                continue;
            }

            let name = self.pools.pick_display_name(rng);
            let location = self.pools.pick_location(rng);
            let history = synthesizer.synthesize(rng, &mut self.ids, now);
            builder.push(id, Some(Structure::new(name, location, history)))?;
        }

        Ok((builder.finish(), empty_generated))
    }
}
