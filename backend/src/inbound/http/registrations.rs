//! Registration API handlers.
//!
//! ```text
//! GET /registrations?page=1&limit=20
//! GET /registrations/{id}
//! ```

use actix_web::{HttpRequest, get, web};
use pagination::{Page, PageRequest};
use utoipa::IntoParams;

use crate::domain::ports::RegistrationSummary;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    ErrorSchema, RegistrationPageSchema, RegistrationSummarySchema,
};
use crate::inbound::http::state::HttpState;

/// Page selection accepted by the list endpoints.
///
/// Values are parsed leniently from the raw query string; anything that does
/// not parse falls back to the first page or to no limit.
#[derive(IntoParams)]
#[into_params(parameter_in = Query)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI parameter generation via utoipa"
)]
pub struct PageQuery {
    /// 1-based page number.
    #[param(example = 1)]
    page: Option<usize>,
    /// Page size; omitted means every item on one page.
    #[param(example = 20)]
    limit: Option<usize>,
}

/// List registrations in insertion order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use birdhouse_mock::inbound::http::registrations::list_registrations;
///
/// let app = App::new().service(list_registrations);
/// ```
#[utoipa::path(
    get,
    path = "/registrations",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of registrations", body = RegistrationPageSchema)
    ),
    tags = ["registrations"],
    operation_id = "listRegistrations"
)]
#[get("/registrations")]
pub async fn list_registrations(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> web::Json<Page<RegistrationSummary>> {
    let request = PageRequest::from_query_str(req.query_string());
    web::Json(state.registrations.list_registrations(request).await)
}

/// Fetch one registration.
///
/// Empty registrations are returned without a `birdhouse` field.
#[utoipa::path(
    get,
    path = "/registrations/{id}",
    params(("id" = String, Path, description = "Registration identifier")),
    responses(
        (status = 200, description = "Registration", body = RegistrationSummarySchema),
        (status = 404, description = "Unknown registration", body = ErrorSchema)
    ),
    tags = ["registrations"],
    operation_id = "getRegistration"
)]
#[get("/registrations/{id}")]
pub async fn get_registration(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<RegistrationSummary>> {
    let id = path.into_inner();
    let summary = state.registrations.registration(&id).await?;
    Ok(web::Json(summary))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use pagination::{PageMeta, PageWindow};
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::ports::{
        BirdhouseSummary, FixtureRegistrationsQuery, MockRegistrationsQuery, RegistrationsQuery,
    };

    async fn call(query: impl RegistrationsQuery + 'static, uri: &str) -> (StatusCode, Value) {
        let state = web::Data::new(HttpState::new(Arc::new(query)));
        let app = actix_test::init_service(
            App::new()
                .app_data(state)
                .service(list_registrations)
                .service(get_registration),
        )
        .await;
        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        let status = res.status();
        let body = actix_test::read_body_json(res).await;
        (status, body)
    }

    fn populated(id: &str) -> RegistrationSummary {
        RegistrationSummary {
            value: id.to_owned(),
            birdhouse: Some(BirdhouseSummary {
                ubid_value: id.to_owned(),
                name: "Ada's Birdhouse".to_owned(),
                latitude: 48.2,
                longitude: 16.37,
                last_occupancy_update: Some("2023-06-01T12:00:00.000Z".to_owned()),
            }),
        }
    }

    #[rstest]
    #[case("/registrations", PageRequest::default())]
    #[case("/registrations?page=2&limit=5", PageRequest::new(2, Some(5)))]
    #[case("/registrations?page=oops&limit=-3", PageRequest::default())]
    #[actix_web::test]
    async fn list_parses_page_request_leniently(#[case] uri: &str, #[case] expected: PageRequest) {
        let mut query = MockRegistrationsQuery::new();
        query
            .expect_list_registrations()
            .withf(move |request| *request == expected)
            .times(1)
            .returning(|request| Page {
                items: vec![populated("a"), RegistrationSummary::empty("b")],
                meta: PageMeta::from(PageWindow::compute(request, 2)),
            });

        let (status, body) = call(query, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"][0]["birdhouse"]["ubidValue"], "a");
        assert_eq!(body["items"][1], json!({"value": "b"}));
        assert_eq!(body["meta"]["totalItems"], 2);
    }

    #[rstest]
    #[actix_web::test]
    async fn list_on_empty_dataset_reports_zero_pages() {
        let (status, body) = call(FixtureRegistrationsQuery, "/registrations?limit=10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "items": [],
                "meta": {
                    "totalItems": 0,
                    "itemCount": 0,
                    "itemsPerPage": 10,
                    "totalPages": 0,
                    "currentPage": 1
                }
            })
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn get_returns_the_summary() {
        let mut query = MockRegistrationsQuery::new();
        query
            .expect_registration()
            .withf(|id| id == "a")
            .times(1)
            .returning(|id| Ok(populated(id)));

        let (status, body) = call(query, "/registrations/a").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["value"], "a");
        assert_eq!(body["birdhouse"]["name"], "Ada's Birdhouse");
    }

    #[rstest]
    #[actix_web::test]
    async fn get_unknown_registration_is_not_found() {
        let (status, body) = call(FixtureRegistrationsQuery, "/registrations/zzz").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "not_found");
        assert_eq!(body["params"], json!({"value": "zzz"}));
        assert!(body["error"].as_str().is_some_and(|message| !message.is_empty()));
    }
}
