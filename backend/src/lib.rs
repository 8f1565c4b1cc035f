//! Birdhouse mock backend library.
//!
//! Domain ports and services live in [`domain`], HTTP handlers in
//! [`inbound`], and dataset generation at startup in [`startup`].

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod settings;
pub mod startup;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
