//! Domain ports for the hexagonal boundary.

mod registrations_query;

pub(crate) use registrations_query::identifier_params;
#[cfg(test)]
pub use registrations_query::MockRegistrationsQuery;
pub use registrations_query::{
    BirdhouseSummary, FixtureRegistrationsQuery, OccupancyEntry, RegistrationSummary,
    RegistrationsQuery,
};
