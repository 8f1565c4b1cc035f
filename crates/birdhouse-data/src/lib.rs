//! Synthetic birdhouse data for the mock backend.
//!
//! This crate fabricates a plausible set of birdhouse registrations. Each
//! registration is either empty or linked to a structure with a name, a
//! location and an occupancy history. The crate is independent of any HTTP
//! framework; the backend generates one dataset at startup and serves it
//! read-only.
//!
//! # Overview
//!
//! - [`ReferencePools`]: bundled display names and coordinates
//! - [`OccupancySynthesizer`]: smoothed random-walk occupancy histories
//! - [`DatasetGenerator`]: registration creation with the empty-registration
//!   acceptance rule
//! - [`Dataset`]: identifier mapping plus insertion order
//!
//! Randomness, identifiers, noise and the wall clock are all injected so a
//! fixed seed reproduces the same dataset.
//!
//! # Example
//!
//! ```
//! use birdhouse_data::{
//!     DatasetGenerator, GenerationParameters, OccupancyCadence, PerlinNoise, ReferencePools,
//!     SeededIds,
//! };
//! use chrono::Utc;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let params = GenerationParameters {
//!     registrations: 5,
//!     empty_probability: 0.0,
//!     occupancy: OccupancyCadence { weeks: 1, updates_per_week: 7 },
//! };
//! let pools = ReferencePools::bundled().expect("bundled pools");
//! let mut generator = DatasetGenerator::new(pools, SeededIds::new(42), PerlinNoise);
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let generated = generator.generate(&params, &mut rng, Utc::now()).expect("generated");
//!
//! for registration in generated.dataset.registrations() {
//!     let structure = registration.structure.expect("no empty registrations");
//!     assert_eq!(structure.history().len(), 7);
//! }
//! ```

mod dataset;
mod error;
mod generator;
mod ids;
mod noise_field;
mod occupancy;
mod pools;

pub use dataset::{Dataset, DatasetBuilder, Registration, Structure};
pub use error::{DatasetError, GenerationError, PoolError};
pub use generator::{DatasetGenerator, Generated, GenerationParameters};
pub use ids::{IdSource, SeededIds, SequentialIds};
pub use noise_field::{NoiseField, NoiseSource, PerlinField, PerlinNoise};
pub use occupancy::{Observation, OccupancyCadence, OccupancySynthesizer, WEEK_MILLIS};
pub use pools::{BUNDLED_LOCATIONS, BUNDLED_NAMES, Location, ReferencePools};
