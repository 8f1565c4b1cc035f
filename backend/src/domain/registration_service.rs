//! Registration queries over the generated dataset.
//!
//! The dataset is immutable once generated, so the service shares it through
//! an `Arc` and every request is a lock-free read.

use std::sync::Arc;

use async_trait::async_trait;
use birdhouse_data::{Dataset, Observation, Registration, Structure};
use chrono::{DateTime, Utc};
use pagination::{Page, PageRequest, SortDirection};

use crate::domain::Error;
use crate::domain::ports::{
    BirdhouseSummary, OccupancyEntry, RegistrationSummary, RegistrationsQuery, identifier_params,
};

/// Wire format for observation timestamps: UTC with milliseconds.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Render `at` with [`TIMESTAMP_FORMAT`].
///
/// # Examples
/// ```
/// use birdhouse_mock::domain::format_timestamp;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 5).single().expect("valid");
/// assert_eq!(format_timestamp(at), "2023-06-01T12:00:05.000Z");
/// ```
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// [`RegistrationsQuery`] backed by an in-memory [`Dataset`].
#[derive(Debug, Clone)]
pub struct RegistrationService {
    dataset: Arc<Dataset>,
}

impl RegistrationService {
    /// Serve queries from `dataset`.
    #[must_use]
    pub const fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    fn summary(&self, id: &str) -> RegistrationSummary {
        self.dataset
            .registration(id)
            .map_or_else(|| RegistrationSummary::empty(id), summarise)
    }

    fn structure(&self, id: &str) -> Result<&Structure, Error> {
        self.dataset
            .registration(id)
            .and_then(|registration| registration.structure)
            .ok_or_else(|| {
                Error::not_found("no birdhouse is registered under this identifier")
                    .with_params(identifier_params(id))
            })
    }
}

fn summarise(registration: Registration<'_>) -> RegistrationSummary {
    RegistrationSummary {
        value: registration.id.to_owned(),
        birdhouse: registration.structure.map(|structure| BirdhouseSummary {
            ubid_value: registration.id.to_owned(),
            name: structure.name.clone(),
            latitude: structure.location.latitude,
            longitude: structure.location.longitude,
            last_occupancy_update: structure
                .latest()
                .map(|observation| format_timestamp(observation.created_at)),
        }),
    }
}

fn render(observation: &Observation) -> OccupancyEntry {
    OccupancyEntry {
        id: observation.id.clone(),
        eggs: observation.eggs,
        birds: observation.birds,
        created_at: format_timestamp(observation.created_at),
    }
}

#[async_trait]
impl RegistrationsQuery for RegistrationService {
    async fn list_registrations(&self, request: PageRequest) -> Page<RegistrationSummary> {
        Page::from_slice(
            self.dataset.order(),
            request,
            SortDirection::Descending,
            |id| self.summary(id),
        )
    }

    async fn registration(&self, id: &str) -> Result<RegistrationSummary, Error> {
        self.dataset.registration(id).map(summarise).ok_or_else(|| {
            Error::not_found("registration not found").with_params(identifier_params(id))
        })
    }

    async fn occupancy(
        &self,
        id: &str,
        request: PageRequest,
        direction: SortDirection,
    ) -> Result<Page<OccupancyEntry>, Error> {
        let structure = self.structure(id)?;
        Ok(Page::from_slice(
            structure.history(),
            request,
            direction,
            render,
        ))
    }
}

#[cfg(test)]
mod tests {
    use birdhouse_data::Location;
    use chrono::{TimeDelta, TimeZone};
    use rstest::{fixture, rstest};
    use serde_json::json;

    use super::*;
    use crate::domain::ErrorCode;

    fn newest() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn structure(name: &str, observations: u32) -> Structure {
        let history = (0..observations)
            .map(|index| Observation {
                id: format!("{name}-{index}"),
                created_at: newest() - TimeDelta::hours(i64::from(index)),
                eggs: index,
                birds: index * 2,
            })
            .collect();
        Structure::new(
            format!("{name}'s Birdhouse"),
            Location {
                latitude: 48.2,
                longitude: 16.37,
            },
            history,
        )
    }

    /// Three registrations `a`, `b`, `c`; `b` is empty.
    #[fixture]
    fn service() -> RegistrationService {
        let dataset = Dataset::from_entries([
            ("a".to_owned(), Some(structure("a", 5))),
            ("b".to_owned(), None),
            ("c".to_owned(), Some(structure("c", 2))),
        ])
        .expect("unique identifiers");
        RegistrationService::new(Arc::new(dataset))
    }

    #[rstest]
    #[tokio::test]
    async fn lists_registrations_in_insertion_order(service: RegistrationService) {
        let page = service
            .list_registrations(PageRequest::new(1, Some(2)))
            .await;

        let ids: Vec<&str> = page.items.iter().map(|item| item.value.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert!(page.items.get(1).is_some_and(|item| item.birdhouse.is_none()));
        assert_eq!(page.meta.total_items, 3);
        assert_eq!(page.meta.item_count, 2);
        assert_eq!(page.meta.total_pages, 2);
        assert_eq!(page.meta.current_page, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn populated_summary_reports_the_newest_observation(service: RegistrationService) {
        let summary = service.registration("a").await.expect("a exists");
        let birdhouse = summary.birdhouse.expect("a is populated");
        assert_eq!(birdhouse.ubid_value, "a");
        assert_eq!(birdhouse.name, "a's Birdhouse");
        assert_eq!(
            birdhouse.last_occupancy_update.as_deref(),
            Some("2023-06-01T12:00:00.000Z")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn empty_registration_is_found_without_birdhouse(service: RegistrationService) {
        let summary = service.registration("b").await.expect("b exists");
        assert_eq!(summary, RegistrationSummary::empty("b"));
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_registration_is_not_found(service: RegistrationService) {
        let error = service.registration("zzz").await.expect_err("unknown id");
        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.params(), Some(&json!({"value": "zzz"})));
    }

    #[rstest]
    #[case("b")]
    #[case("zzz")]
    #[tokio::test]
    async fn occupancy_of_empty_or_unknown_is_not_found(
        service: RegistrationService,
        #[case] id: &str,
    ) {
        let error = service
            .occupancy(id, PageRequest::default(), SortDirection::Descending)
            .await
            .expect_err("no structure");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[case(SortDirection::Descending, 1, vec!["a-0", "a-1"])]
    #[case(SortDirection::Descending, 3, vec!["a-4"])]
    #[case(SortDirection::Ascending, 1, vec!["a-4", "a-3"])]
    #[case(SortDirection::Ascending, 3, vec!["a-0"])]
    #[case(SortDirection::Ascending, 4, vec![])]
    #[tokio::test]
    async fn occupancy_pages_walk_in_either_direction(
        service: RegistrationService,
        #[case] direction: SortDirection,
        #[case] page: usize,
        #[case] expected: Vec<&str>,
    ) {
        let page = service
            .occupancy("a", PageRequest::new(page, Some(2)), direction)
            .await
            .expect("a has history");
        let ids: Vec<&str> = page.items.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids, expected);
        assert_eq!(page.meta.total_items, 5);
        assert_eq!(page.meta.total_pages, 3);
    }

    #[rstest]
    #[tokio::test]
    async fn occupancy_entries_carry_counts_and_formatted_timestamps(
        service: RegistrationService,
    ) {
        let page = service
            .occupancy("a", PageRequest::new(1, Some(1)), SortDirection::Ascending)
            .await
            .expect("a has history");
        let entry = page.items.first().expect("one entry");
        assert_eq!(entry.eggs, 4);
        assert_eq!(entry.birds, 8);
        assert_eq!(entry.created_at, "2023-06-01T08:00:00.000Z");
    }

    #[rstest]
    fn timestamps_keep_milliseconds() {
        let at = newest() + TimeDelta::milliseconds(7);
        assert_eq!(format_timestamp(at), "2023-06-01T12:00:00.007Z");
    }
}
