//! Mock server configuration loaded via OrthoConfig.
//!
//! Every value is optional; accessors fall back to the defaults below. A
//! value that is present but does not parse fails the load.
//! Environment variables use the `BH_` prefix, e.g. `BH_REGISTRATIONS=50`.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;
use std::path::PathBuf;

use birdhouse_data::{GenerationParameters, OccupancyCadence};
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_REGISTRATIONS: usize = 20;
const DEFAULT_EMPTY_REGISTRATIONS: f64 = 0.1;
const DEFAULT_OCCUPANCY_WEEKS: u32 = 25;
const DEFAULT_UPDATES_PER_WEEK: u32 = 14;
const DEFAULT_BROKEN_BIRDHOUSES: f64 = 0.1;
const DEFAULT_SERVE_PORT: u16 = 7000;

/// Configuration for dataset generation and the HTTP listener.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BH")]
pub struct MockSettings {
    /// Number of registrations to generate.
    pub registrations: Option<usize>,
    /// Probability that a registration has no birdhouse.
    pub empty_registrations: Option<f64>,
    /// Length of each occupancy history in weeks.
    pub occupancy_weeks: Option<u32>,
    /// Occupancy observations per week.
    pub updates_per_week: Option<u32>,
    /// Share of birdhouses reserved for fault injection.
    pub broken_birdhouses: Option<f64>,
    /// TCP port the server listens on.
    pub serve_port: Option<u16>,
    /// Seed for a reproducible dataset; random when unset.
    pub seed: Option<u64>,
    /// Replacement for the bundled name pool.
    pub names_path: Option<PathBuf>,
    /// Replacement for the bundled location pool.
    pub locations_path: Option<PathBuf>,
}

impl MockSettings {
    /// Configured registration count.
    #[must_use]
    pub fn registrations(&self) -> usize {
        self.registrations.unwrap_or(DEFAULT_REGISTRATIONS)
    }

    /// Configured empty-registration probability.
    #[must_use]
    pub fn empty_registrations(&self) -> f64 {
        self.empty_registrations
            .unwrap_or(DEFAULT_EMPTY_REGISTRATIONS)
    }

    /// Configured history length in weeks.
    #[must_use]
    pub fn occupancy_weeks(&self) -> u32 {
        self.occupancy_weeks.unwrap_or(DEFAULT_OCCUPANCY_WEEKS)
    }

    /// Configured observations per week.
    #[must_use]
    pub fn updates_per_week(&self) -> u32 {
        self.updates_per_week.unwrap_or(DEFAULT_UPDATES_PER_WEEK)
    }

    /// Configured broken-birdhouse share.
    #[must_use]
    pub fn broken_birdhouses(&self) -> f64 {
        self.broken_birdhouses.unwrap_or(DEFAULT_BROKEN_BIRDHOUSES)
    }

    /// Configured listener port.
    #[must_use]
    pub fn serve_port(&self) -> u16 {
        self.serve_port.unwrap_or(DEFAULT_SERVE_PORT)
    }

    /// Address the server binds: all interfaces on [`Self::serve_port`].
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.serve_port()))
    }

    /// Name pool override, if any.
    #[must_use]
    pub fn names_path(&self) -> Option<&Path> {
        self.names_path.as_deref()
    }

    /// Location pool override, if any.
    #[must_use]
    pub fn locations_path(&self) -> Option<&Path> {
        self.locations_path.as_deref()
    }

    /// Generator inputs derived from the settings.
    ///
    /// # Examples
    /// ```
    /// use birdhouse_mock::settings::MockSettings;
    ///
    /// let params = MockSettings::default().generation_parameters();
    /// assert_eq!(params.registrations, 20);
    /// assert_eq!(params.occupancy.weeks, 25);
    /// ```
    #[must_use]
    pub fn generation_parameters(&self) -> GenerationParameters {
        GenerationParameters {
            registrations: self.registrations(),
            empty_probability: self.empty_registrations(),
            occupancy: OccupancyCadence {
                weeks: self.occupancy_weeks(),
                updates_per_week: self.updates_per_week(),
            },
        }
    }
}
