//! Domain types and services.
//!
//! Public surface:
//! - [`Error`] and [`ErrorCode`]: transport-agnostic failure payload.
//! - [`TraceId`]: request correlation identifier.
//! - [`RegistrationService`]: the dataset-backed query port implementation.

pub mod error;
pub mod ports;
mod registration_service;
mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::registration_service::{RegistrationService, TIMESTAMP_FORMAT, format_timestamp};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
