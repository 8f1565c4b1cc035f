//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the mock together with the
//! schema wrappers from [`crate::inbound::http::schemas`], so domain types
//! stay free of utoipa derives.
//!
//! The document backs Swagger UI in debug builds and is printed by the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    BirdhouseSummarySchema, ErrorCodeSchema, ErrorSchema, OccupancyEntrySchema,
    OccupancyPageSchema, PageMetaSchema, PingSchema, RegistrationPageSchema,
    RegistrationSummarySchema,
};

/// OpenAPI document for the mock REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Birdhouse mock API",
        description = "Synthetic birdhouse registrations and occupancy history for frontend development."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::registrations::list_registrations,
        crate::inbound::http::registrations::get_registration,
        crate::inbound::http::occupancy::list_occupancy,
        crate::inbound::http::ping::ping,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        BirdhouseSummarySchema,
        RegistrationSummarySchema,
        RegistrationPageSchema,
        OccupancyEntrySchema,
        OccupancyPageSchema,
        PageMetaSchema,
        PingSchema
    )),
    tags(
        (name = "registrations", description = "Registered birdhouses"),
        (name = "occupancy", description = "Occupancy history of a birdhouse"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
