//! HTTP inbound adapter exposing the mock REST endpoints.

pub mod cors;
pub mod error;
pub mod health;
pub mod occupancy;
pub mod ping;
pub mod registrations;
pub mod schemas;
pub mod state;

use actix_web::web;

pub use error::ApiResult;

/// Register the birdhouse endpoints.
///
/// Handlers expect [`state::HttpState`] in the application data.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use birdhouse_mock::domain::ports::FixtureRegistrationsQuery;
/// use birdhouse_mock::inbound::http::{configure, state::HttpState};
///
/// let state = web::Data::new(HttpState::new(Arc::new(FixtureRegistrationsQuery)));
/// let _app = App::new().app_data(state).configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(ping::ping)
        .service(registrations::list_registrations)
        .service(registrations::get_registration)
        .service(occupancy::list_occupancy);
}
