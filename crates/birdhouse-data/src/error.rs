//! Error types for the birdhouse-data crate.
//!
//! One enum per concern: pool parsing, dataset assembly and the overall
//! generation pass.

use thiserror::Error;

/// Errors raised while parsing reference pools.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// The name source contained no usable names.
    #[error("name pool is empty")]
    EmptyNames,

    /// The location source contained no usable records.
    #[error("location pool is empty")]
    EmptyLocations,

    /// A location record could not be parsed.
    #[error("malformed location record on line {line}: {message}")]
    MalformedLocation {
        /// One-based line number of the offending record.
        line: usize,
        /// Description of the problem.
        message: String,
    },
}

/// Errors raised while assembling a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// An identifier was inserted twice.
    #[error("registration identifier '{id}' is not unique")]
    DuplicateIdentifier {
        /// The repeated identifier.
        id: String,
    },

    /// A populated registration was pushed without any observations.
    #[error("registration '{id}' has a structure with no occupancy history")]
    EmptyHistory {
        /// The offending identifier.
        id: String,
    },
}

/// Errors raised by the dataset generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Generation parameters are out of range.
    #[error("invalid generation parameters: {message}")]
    InvalidParameters {
        /// Description of the rejected parameter.
        message: String,
    },

    /// The reference pools could not be used.
    #[error(transparent)]
    Pools(#[from] PoolError),

    /// The generated dataset violated an identity invariant.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_location_formats_correctly() {
        let err = PoolError::MalformedLocation {
            line: 4,
            message: "expected 6 columns, found 2".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "malformed location record on line 4: expected 6 columns, found 2"
        );
    }

    #[test]
    fn duplicate_identifier_formats_correctly() {
        let err = DatasetError::DuplicateIdentifier { id: "a".to_owned() };
        assert_eq!(err.to_string(), "registration identifier 'a' is not unique");
    }

    #[test]
    fn generation_error_is_transparent_over_pool_errors() {
        let err = GenerationError::from(PoolError::EmptyNames);
        assert_eq!(err.to_string(), "name pool is empty");
    }
}
