//! Occupancy history handler.
//!
//! ```text
//! GET /structures/{id}/occupancy?page=1&limit=10&order=asc
//! X-Id: {id}
//! ```

use actix_web::{HttpRequest, get, web};
use pagination::{Page, PageRequest, SortDirection};
use utoipa::IntoParams;

use crate::domain::Error;
use crate::domain::ports::{OccupancyEntry, identifier_params};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, OccupancyPageSchema};
use crate::inbound::http::state::HttpState;

/// Header that must repeat the structure identifier.
pub const CALLER_ID_HEADER: &str = "X-Id";

/// Page selection and traversal order for occupancy history.
#[derive(IntoParams)]
#[into_params(parameter_in = Query)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI parameter generation via utoipa"
)]
pub struct OccupancyQuery {
    /// 1-based page number.
    #[param(example = 1)]
    page: Option<usize>,
    /// Page size; omitted means the whole history on one page.
    #[param(example = 10)]
    limit: Option<usize>,
    /// `asc` for oldest first; anything else is newest first.
    #[param(example = "desc")]
    order: Option<String>,
}

fn authorise(req: &HttpRequest, id: &str) -> ApiResult<()> {
    let caller = req
        .headers()
        .get(CALLER_ID_HEADER)
        .and_then(|value| value.to_str().ok());
    if caller == Some(id) {
        Ok(())
    } else {
        Err(Error::unauthorized("caller is not allowed to read this birdhouse")
            .with_params(identifier_params(id)))
    }
}

/// Page through a structure's occupancy history.
///
/// The caller must send its identifier in `X-Id`; it has to equal `{id}`.
#[utoipa::path(
    get,
    path = "/structures/{id}/occupancy",
    params(
        ("id" = String, Path, description = "Registration identifier"),
        ("X-Id" = String, Header, description = "Caller identifier; must equal `id`"),
        OccupancyQuery
    ),
    responses(
        (status = 200, description = "One page of occupancy history", body = OccupancyPageSchema),
        (status = 401, description = "`X-Id` is missing or does not match", body = ErrorSchema),
        (status = 404, description = "No birdhouse under this identifier", body = ErrorSchema)
    ),
    tags = ["occupancy"],
    operation_id = "listOccupancy"
)]
#[get("/structures/{id}/occupancy")]
pub async fn list_occupancy(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    req: HttpRequest,
) -> ApiResult<web::Json<Page<OccupancyEntry>>> {
    let id = path.into_inner();
    authorise(&req, &id)?;
    let request = PageRequest::from_query_str(req.query_string());
    let direction = SortDirection::from_query_str(req.query_string());
    let page = state
        .registrations
        .occupancy(&id, request, direction)
        .await?;
    Ok(web::Json(page))
}

#[cfg(test)]
#[path = "occupancy_tests.rs"]
mod tests;
