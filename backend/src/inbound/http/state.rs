//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and stay testable without a generated dataset.

use std::sync::Arc;

use crate::domain::ports::RegistrationsQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Registration and occupancy reads.
    pub registrations: Arc<dyn RegistrationsQuery>,
}

impl HttpState {
    /// Construct state from the query port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use birdhouse_mock::domain::ports::FixtureRegistrationsQuery;
    /// use birdhouse_mock::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureRegistrationsQuery));
    /// let _registrations = state.registrations.clone();
    /// ```
    pub fn new(registrations: Arc<dyn RegistrationsQuery>) -> Self {
        Self { registrations }
    }
}
