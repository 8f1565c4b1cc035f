//! Startup dataset generation.
//!
//! Loads the reference pools, seeds the generator and produces the dataset
//! served for the lifetime of the process.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use birdhouse_data::{
    BUNDLED_LOCATIONS, BUNDLED_NAMES, Dataset, DatasetGenerator, GenerationError, PerlinNoise,
    PoolError, ReferencePools, SeededIds,
};
use cap_std::{ambient_authority, fs::Dir};
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::{info, warn};

use crate::settings::MockSettings;

/// Errors returned while building the startup dataset.
#[derive(Debug, Error)]
pub enum StartupError {
    /// A pool override file could not be read.
    #[error("failed to read pool file at {path}: {source}")]
    PoolRead {
        /// Path to the pool file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A pool source could not be parsed.
    #[error("reference pool error: {0}")]
    Pools(#[from] PoolError),
    /// The broken-birdhouse share is out of range.
    #[error("broken birdhouse share must be within [0, 1], got {0}")]
    BrokenBirdhouses(f64),
    /// Generation rejected the parameters or failed.
    #[error("dataset generation error: {0}")]
    Generation(#[from] GenerationError),
}

/// Generate the dataset described by `settings` using the system clock.
///
/// # Errors
///
/// Returns [`StartupError`] when a pool override cannot be read or parsed,
/// or when a generation parameter is out of range.
///
/// # Examples
///
/// ```rust,no_run
/// use birdhouse_mock::settings::MockSettings;
/// use birdhouse_mock::startup::build_dataset;
///
/// let settings = MockSettings {
///     registrations: Some(5),
///     seed: Some(7),
///     ..MockSettings::default()
/// };
/// let dataset = build_dataset(&settings).expect("dataset builds");
/// assert_eq!(dataset.len(), 5);
/// ```
pub fn build_dataset(settings: &MockSettings) -> Result<Arc<Dataset>, StartupError> {
    build_dataset_at(settings, &DefaultClock)
}

/// Generate the dataset, anchoring the newest observations at `clock.utc()`.
///
/// # Errors
///
/// See [`build_dataset`].
pub fn build_dataset_at(
    settings: &MockSettings,
    clock: &impl Clock,
) -> Result<Arc<Dataset>, StartupError> {
    let broken = settings.broken_birdhouses();
    if !(0.0..=1.0).contains(&broken) {
        return Err(StartupError::BrokenBirdhouses(broken));
    }
    if broken > 0.0 {
        warn!(
            broken_birdhouses = broken,
            "broken birdhouse injection is not implemented; serving intact data"
        );
    }

    let pools = load_pools(settings)?;
    let params = settings.generation_parameters();
    let seed = settings.seed.unwrap_or_else(rand::random);
    info!(
        seed,
        registrations = params.registrations,
        empty_probability = params.empty_probability,
        occupancy_weeks = params.occupancy.weeks,
        updates_per_week = params.occupancy.updates_per_week,
        "generating dataset"
    );

    let now: DateTime<Utc> = clock.utc();
    let mut generator = DatasetGenerator::new(pools, SeededIds::new(seed), PerlinNoise);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let generated = generator.generate(&params, &mut rng, now)?;

    info!(
        passes = generated.passes,
        registrations = generated.dataset.len(),
        empty = generated.dataset.empty_count(),
        "dataset generated"
    );
    Ok(Arc::new(generated.dataset))
}

fn load_pools(settings: &MockSettings) -> Result<ReferencePools, StartupError> {
    if settings.names_path().is_none() && settings.locations_path().is_none() {
        return Ok(ReferencePools::bundled()?);
    }
    let names = match settings.names_path() {
        Some(path) => read_pool(path)?,
        None => BUNDLED_NAMES.to_owned(),
    };
    let locations = match settings.locations_path() {
        Some(path) => read_pool(path)?,
        None => BUNDLED_LOCATIONS.to_owned(),
    };
    let pools = ReferencePools::from_sources(&names, &locations)?;
    info!(
        names = pools.names().len(),
        locations = pools.locations().len(),
        "loaded reference pool overrides"
    );
    Ok(pools)
}

fn read_pool(path: &Path) -> Result<String, StartupError> {
    let read_error = |source| StartupError::PoolRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "pool path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    dir.read_to_string(Path::new(file_name)).map_err(read_error)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use chrono::TimeZone;
    use mockable::MockClock;
    use rstest::{fixture, rstest};
    use tempfile::NamedTempFile;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[fixture]
    fn clock() -> MockClock {
        let mut clock = MockClock::new();
        clock.expect_utc().returning(fixed_now);
        clock
    }

    fn seeded(registrations: usize) -> MockSettings {
        MockSettings {
            registrations: Some(registrations),
            empty_registrations: Some(0.0),
            occupancy_weeks: Some(1),
            updates_per_week: Some(7),
            broken_birdhouses: Some(0.0),
            seed: Some(11),
            ..MockSettings::default()
        }
    }

    fn temp_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[rstest]
    fn generates_requested_size_anchored_at_clock(clock: MockClock) {
        let dataset = build_dataset_at(&seeded(4), &clock).expect("dataset builds");
        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.empty_count(), 0);
        for registration in dataset.registrations() {
            let structure = registration.structure.expect("populated");
            assert_eq!(structure.history().len(), 7);
            let latest = structure.latest().expect("history is not empty");
            assert!(latest.created_at <= fixed_now());
        }
    }

    #[rstest]
    fn same_seed_reproduces_the_dataset(clock: MockClock) {
        let first = build_dataset_at(&seeded(3), &clock).expect("first dataset");
        let second = build_dataset_at(&seeded(3), &clock).expect("second dataset");
        assert_eq!(first, second);
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.5)]
    fn rejects_out_of_range_broken_share(clock: MockClock, #[case] broken: f64) {
        let settings = MockSettings {
            broken_birdhouses: Some(broken),
            ..seeded(1)
        };
        let err = build_dataset_at(&settings, &clock).expect_err("out of range");
        assert!(matches!(err, StartupError::BrokenBirdhouses(value) if value == broken));
    }

    #[rstest]
    fn rejects_invalid_generation_parameters(clock: MockClock) {
        let settings = MockSettings {
            empty_registrations: Some(2.0),
            ..seeded(1)
        };
        let err = build_dataset_at(&settings, &clock).expect_err("invalid probability");
        assert!(matches!(err, StartupError::Generation(_)));
    }

    #[rstest]
    fn names_override_replaces_bundled_pool(clock: MockClock) {
        let names = temp_file("Zelda\n\n");
        let settings = MockSettings {
            names_path: Some(names.path().to_path_buf()),
            ..seeded(3)
        };
        let dataset = build_dataset_at(&settings, &clock).expect("dataset builds");
        for registration in dataset.registrations() {
            let structure = registration.structure.expect("populated");
            assert_eq!(structure.name, "Zelda's Birdhouse");
        }
    }

    #[rstest]
    fn locations_override_replaces_bundled_pool(clock: MockClock) {
        let locations = temp_file("1;Austria;Vienna;48.2082;16.3738;190\n");
        let settings = MockSettings {
            locations_path: Some(locations.path().to_path_buf()),
            ..seeded(2)
        };
        let dataset = build_dataset_at(&settings, &clock).expect("dataset builds");
        for registration in dataset.registrations() {
            let structure = registration.structure.expect("populated");
            assert!((structure.location.latitude - 48.2082).abs() < f64::EPSILON);
            assert!((structure.location.longitude - 16.3738).abs() < f64::EPSILON);
        }
    }

    #[rstest]
    fn missing_override_reports_the_path(clock: MockClock) {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.txt");
        let settings = MockSettings {
            names_path: Some(path.clone()),
            ..seeded(1)
        };
        let err = build_dataset_at(&settings, &clock).expect_err("file is missing");
        assert!(matches!(err, StartupError::PoolRead { path: reported, .. } if reported == path));
    }

    #[rstest]
    fn empty_override_is_rejected(clock: MockClock) {
        let names = temp_file("\n   \n");
        let settings = MockSettings {
            names_path: Some(names.path().to_path_buf()),
            ..seeded(1)
        };
        let err = build_dataset_at(&settings, &clock).expect_err("empty pool");
        assert!(matches!(err, StartupError::Pools(PoolError::EmptyNames)));
    }
}
