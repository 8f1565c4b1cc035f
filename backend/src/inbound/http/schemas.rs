//! OpenAPI schema definitions for domain and port types.
//!
//! Domain types and the pagination envelope stay framework-agnostic by not
//! deriving `ToSchema`. The wrappers below mirror their wire shape and live
//! in the inbound adapter where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The `X-Id` header does not match the requested identifier.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// The requested registration or birdhouse does not exist.
    #[schema(rename = "not_found")]
    NotFound,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable explanation.
    #[schema(example = "registration not found")]
    error: String,
    /// The parameters that caused the failure.
    #[schema(value_type = Option<Object>, example = json!({"value": "a"}))]
    params: Option<serde_json::Value>,
    /// Correlation identifier, also sent in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
}

/// OpenAPI schema for [`crate::domain::ports::BirdhouseSummary`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ports::BirdhouseSummary, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BirdhouseSummarySchema {
    /// Identifier of the owning registration.
    #[schema(example = "3b1f7c2e-9a4d-4f6e-8c1a-2d5e7f9b0a13")]
    ubid_value: String,
    /// Display name.
    #[schema(example = "Ada's Birdhouse")]
    name: String,
    /// Installation latitude.
    #[schema(example = 48.2082)]
    latitude: f64,
    /// Installation longitude.
    #[schema(example = 16.3738)]
    longitude: f64,
    /// Timestamp of the newest observation.
    #[schema(example = "2023-06-01T12:00:00.000Z")]
    last_occupancy_update: Option<String>,
}

/// OpenAPI schema for [`crate::domain::ports::RegistrationSummary`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ports::RegistrationSummary)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct RegistrationSummarySchema {
    /// Registration identifier.
    #[schema(example = "3b1f7c2e-9a4d-4f6e-8c1a-2d5e7f9b0a13")]
    value: String,
    /// Linked structure; absent for empty registrations.
    birdhouse: Option<BirdhouseSummarySchema>,
}

/// OpenAPI schema for [`crate::domain::ports::OccupancyEntry`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ports::OccupancyEntry)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct OccupancyEntrySchema {
    /// Observation identifier.
    id: String,
    /// Eggs counted.
    #[schema(example = 3)]
    eggs: u32,
    /// Birds counted.
    #[schema(example = 2)]
    birds: u32,
    /// Observation time.
    #[schema(example = "2023-06-01T12:00:00.000Z")]
    created_at: String,
}

/// OpenAPI schema for [`pagination::PageMeta`].
#[derive(ToSchema)]
#[schema(as = pagination::PageMeta, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PageMetaSchema {
    /// Items in the whole sequence.
    total_items: usize,
    /// Items on this page.
    item_count: usize,
    /// Effective page size.
    items_per_page: usize,
    /// Number of pages at this page size.
    total_pages: usize,
    /// The requested 1-based page.
    current_page: usize,
}

/// One page of registrations.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct RegistrationPageSchema {
    /// Registrations in insertion order.
    items: Vec<RegistrationSummarySchema>,
    /// Window metadata.
    meta: PageMetaSchema,
}

/// One page of occupancy observations.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct OccupancyPageSchema {
    /// Observations in the requested order.
    items: Vec<OccupancyEntrySchema>,
    /// Window metadata.
    meta: PageMetaSchema,
}

/// Body of `GET /ping`.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PingSchema {
    /// Always `pong`.
    #[schema(example = "pong")]
    message: String,
}
