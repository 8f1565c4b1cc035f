//! Reference pools of display names and coordinates.
//!
//! The bundled pools are embedded at compile time so generation never touches
//! the filesystem. Callers that want different pools can parse their own text
//! through [`ReferencePools::from_sources`].

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::error::PoolError;

/// Name pool bundled with the crate, one name per line.
pub const BUNDLED_NAMES: &str = include_str!("../resources/names.txt");
/// Location pool bundled with the crate, `id;country;city;lat;lon;alt` per line.
pub const BUNDLED_LOCATIONS: &str = include_str!("../resources/locations.csv");

/// Column count of a location record: id, country, city, latitude,
/// longitude, altitude.
const LOCATION_COLUMNS: usize = 6;

const LOCATION_DELIMITER: u8 = b';';

/// A geographic coordinate pair, copied verbatim from the pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in decimal degrees, within `[-90, 90]`.
    pub latitude: f64,
    /// Longitude in decimal degrees, within `[-180, 180]`.
    pub longitude: f64,
}

/// Candidate names and locations sampled by the generator.
///
/// ## Invariants
/// - Both pools are non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferencePools {
    names: Vec<String>,
    locations: Vec<Location>,
}

impl ReferencePools {
    /// Parse the pools bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError`] if the embedded resources are malformed.
    ///
    /// # Example
    ///
    /// ```
    /// use birdhouse_data::ReferencePools;
    ///
    /// let pools = ReferencePools::bundled().expect("bundled pools parse");
    /// assert!(!pools.names().is_empty());
    /// assert!(!pools.locations().is_empty());
    /// ```
    pub fn bundled() -> Result<Self, PoolError> {
        Self::from_sources(BUNDLED_NAMES, BUNDLED_LOCATIONS)
    }

    /// Parse pools from a newline-separated name list and a
    /// semicolon-separated location table.
    ///
    /// Blank lines in either source are ignored. Location fields may be
    /// double-quoted, so a quoted city can contain the delimiter.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::EmptyNames`] or [`PoolError::EmptyLocations`] when
    /// a source yields no entries, and [`PoolError::MalformedLocation`] when a
    /// location record cannot be parsed.
    pub fn from_sources(names: &str, locations: &str) -> Result<Self, PoolError> {
        let names = parse_names(names);
        if names.is_empty() {
            return Err(PoolError::EmptyNames);
        }

        let locations = parse_locations(locations)?;
        if locations.is_empty() {
            return Err(PoolError::EmptyLocations);
        }

        Ok(Self { names, locations })
    }

    /// Candidate names.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Candidate locations.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Pick a structure display name uniformly at random, with replacement.
    pub(crate) fn pick_display_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let name = self.names.choose(rng).map_or("Anonymous", String::as_str);
        format!("{name}'s Birdhouse")
    }

    /// Pick a location uniformly at random, with replacement.
    pub(crate) fn pick_location<R: Rng + ?Sized>(&self, rng: &mut R) -> Location {
        self.locations.choose(rng).copied().unwrap_or(Location {
            latitude: 0.0,
            longitude: 0.0,
        })
    }
}

fn parse_names(source: &str) -> Vec<String> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

fn parse_locations(source: &str) -> Result<Vec<Location>, PoolError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(LOCATION_DELIMITER)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source.as_bytes());

    let mut locations = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|err| {
            let line = err.position().map_or(0, csv::Position::line);
            malformed(line, err.to_string())
        })?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        locations.push(parse_location(&record)?);
    }
    Ok(locations)
}

fn parse_location(record: &csv::StringRecord) -> Result<Location, PoolError> {
    let line = record.position().map_or(0, csv::Position::line);
    if record.len() != LOCATION_COLUMNS {
        return Err(malformed(
            line,
            format!("expected {LOCATION_COLUMNS} columns, found {}", record.len()),
        ));
    }

    let latitude = parse_coordinate(line, record.get(3), "latitude", 90.0)?;
    let longitude = parse_coordinate(line, record.get(4), "longitude", 180.0)?;

    Ok(Location {
        latitude,
        longitude,
    })
}

fn parse_coordinate(
    line: u64,
    column: Option<&str>,
    label: &str,
    bound: f64,
) -> Result<f64, PoolError> {
    let raw = column.unwrap_or_default();
    let value: f64 = raw
        .parse()
        .map_err(|_| malformed(line, format!("{label} '{raw}' is not a number")))?;

    if !value.is_finite() || value.abs() > bound {
        return Err(malformed(
            line,
            format!("{label} {value} is outside [-{bound}, {bound}]"),
        ));
    }

    Ok(value)
}

fn malformed(line: u64, message: String) -> PoolError {
    PoolError::MalformedLocation {
        line: usize::try_from(line).unwrap_or(usize::MAX),
        message,
    }
}
