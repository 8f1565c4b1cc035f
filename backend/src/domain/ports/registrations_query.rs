//! Driving port for registration and occupancy reads.
//!
//! HTTP handlers depend on this port only. Production backs it with the
//! generated dataset; tests use [`FixtureRegistrationsQuery`] or the mockall
//! double.

use async_trait::async_trait;
use pagination::{Page, PageMeta, PageRequest, PageWindow, SortDirection};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::Error;

/// Summary of the structure linked to a registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirdhouseSummary {
    /// Identifier of the owning registration.
    pub ubid_value: String,
    /// Display name.
    pub name: String,
    /// Installation latitude.
    pub latitude: f64,
    /// Installation longitude.
    pub longitude: f64,
    /// Timestamp of the newest observation, `YYYY-MM-DDTHH:MM:SS.sssZ`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_occupancy_update: Option<String>,
}

/// One registration as reported to clients.
///
/// `birdhouse` is absent for empty registrations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationSummary {
    /// Registration identifier.
    pub value: String,
    /// Linked structure, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birdhouse: Option<BirdhouseSummary>,
}

impl RegistrationSummary {
    /// Summary of a registration without a structure.
    #[must_use]
    pub fn empty(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            birdhouse: None,
        }
    }
}

/// One occupancy observation as reported to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyEntry {
    /// Observation identifier.
    pub id: String,
    /// Eggs counted.
    pub eggs: u32,
    /// Birds counted.
    pub birds: u32,
    /// Observation time, `YYYY-MM-DDTHH:MM:SS.sssZ`.
    pub created_at: String,
}

/// Parameters reported with errors about a single identifier.
pub(crate) fn identifier_params(id: &str) -> serde_json::Value {
    json!({ "value": id })
}

/// Read-only queries over the registration dataset.
///
/// # Examples
///
/// ```rust,no_run
/// use birdhouse_mock::domain::ports::{FixtureRegistrationsQuery, RegistrationsQuery};
/// use pagination::PageRequest;
///
/// # async fn example() {
/// let query = FixtureRegistrationsQuery;
/// let page = query.list_registrations(PageRequest::default()).await;
/// assert!(page.items.is_empty());
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationsQuery: Send + Sync {
    /// One page of registrations in insertion order.
    async fn list_registrations(&self, request: PageRequest) -> Page<RegistrationSummary>;

    /// A single registration.
    ///
    /// Unknown identifiers yield a not-found error; empty registrations are
    /// returned without a birdhouse.
    async fn registration(&self, id: &str) -> Result<RegistrationSummary, Error>;

    /// One page of a structure's occupancy history.
    ///
    /// Unknown identifiers and empty registrations both yield a not-found
    /// error.
    async fn occupancy(
        &self,
        id: &str,
        request: PageRequest,
        direction: SortDirection,
    ) -> Result<Page<OccupancyEntry>, Error>;
}

/// Query fixture over an empty dataset.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRegistrationsQuery;

#[async_trait]
impl RegistrationsQuery for FixtureRegistrationsQuery {
    async fn list_registrations(&self, request: PageRequest) -> Page<RegistrationSummary> {
        Page {
            items: Vec::new(),
            meta: PageMeta::from(PageWindow::compute(request, 0)),
        }
    }

    async fn registration(&self, id: &str) -> Result<RegistrationSummary, Error> {
        Err(Error::not_found("registration not found").with_params(identifier_params(id)))
    }

    async fn occupancy(
        &self,
        id: &str,
        _request: PageRequest,
        _direction: SortDirection,
    ) -> Result<Page<OccupancyEntry>, Error> {
        Err(Error::not_found("birdhouse not found").with_params(identifier_params(id)))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::domain::ErrorCode;

    #[rstest]
    #[tokio::test]
    async fn fixture_lists_nothing() {
        let page = FixtureRegistrationsQuery
            .list_registrations(PageRequest::new(2, Some(5)))
            .await;
        assert!(page.items.is_empty());
        assert_eq!(page.meta.total_items, 0);
        assert_eq!(page.meta.current_page, 2);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_reports_every_identifier_missing() {
        let error = FixtureRegistrationsQuery
            .registration("a")
            .await
            .expect_err("fixture has no registrations");
        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.params(), Some(&json!({"value": "a"})));
    }

    #[rstest]
    fn empty_summary_omits_birdhouse() {
        let value = serde_json::to_value(RegistrationSummary::empty("b")).expect("serialise");
        assert_eq!(value, json!({"value": "b"}));
    }

    #[rstest]
    fn birdhouse_summary_uses_camel_case() {
        let summary = RegistrationSummary {
            value: "a".to_owned(),
            birdhouse: Some(BirdhouseSummary {
                ubid_value: "a".to_owned(),
                name: "Ada's Birdhouse".to_owned(),
                latitude: 1.5,
                longitude: -2.25,
                last_occupancy_update: Some("2023-06-01T12:00:00.000Z".to_owned()),
            }),
        };
        let value = serde_json::to_value(summary).expect("serialise");
        assert_eq!(
            value,
            json!({
                "value": "a",
                "birdhouse": {
                    "ubidValue": "a",
                    "name": "Ada's Birdhouse",
                    "latitude": 1.5,
                    "longitude": -2.25,
                    "lastOccupancyUpdate": "2023-06-01T12:00:00.000Z"
                }
            })
        );
    }
}
