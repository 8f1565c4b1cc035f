//! The generated dataset: registrations keyed by identifier plus the
//! authoritative insertion order used for pagination.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::error::DatasetError;
use crate::occupancy::Observation;
use crate::pools::Location;

/// A monitored birdhouse and its occupancy history.
///
/// ## Invariants
/// - `history` is ordered newest first.
/// - A structure inside a [`Dataset`] has a non-empty history.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    /// Display name, e.g. `"Ada's Birdhouse"`.
    pub name: String,
    /// Where the structure is installed.
    pub location: Location,
    history: Vec<Observation>,
}

impl Structure {
    /// Create a structure from a history ordered newest first.
    #[must_use]
    pub fn new(name: impl Into<String>, location: Location, history: Vec<Observation>) -> Self {
        Self {
            name: name.into(),
            location,
            history,
        }
    }

    /// Occupancy history, newest first.
    #[must_use]
    pub fn history(&self) -> &[Observation] {
        &self.history
    }

    /// The most recent observation.
    #[must_use]
    pub fn latest(&self) -> Option<&Observation> {
        self.history.first()
    }
}

/// A borrowed view of one registration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Registration<'a> {
    /// Registration identifier.
    pub id: &'a str,
    /// Linked structure; `None` for an empty registration.
    pub structure: Option<&'a Structure>,
}

impl Registration<'_> {
    /// Whether the registration has no linked structure.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.structure.is_none()
    }
}

/// Immutable registration dataset.
///
/// ## Invariants
/// - Every identifier in `order` is a key of `entries` and vice versa.
/// - `order` contains no duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    order: Vec<String>,
    entries: HashMap<String, Option<Structure>>,
}

impl Dataset {
    /// Build a dataset from `(identifier, structure)` pairs in insertion
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::DuplicateIdentifier`] if an identifier repeats
    /// and [`DatasetError::EmptyHistory`] for a structure without observations.
    ///
    /// # Example
    ///
    /// ```
    /// use birdhouse_data::Dataset;
    ///
    /// let dataset = Dataset::from_entries([("a".to_owned(), None), ("b".to_owned(), None)])
    ///     .expect("unique identifiers");
    /// assert_eq!(dataset.order(), ["a".to_owned(), "b".to_owned()]);
    /// ```
    pub fn from_entries<I>(entries: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = (String, Option<Structure>)>,
    {
        let mut builder = DatasetBuilder::default();
        for (id, structure) in entries {
            builder.push(id, structure)?;
        }
        Ok(builder.finish())
    }

    /// Number of registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the dataset has no registrations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Identifiers in insertion order.
    #[must_use]
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Look up a registration by identifier.
    ///
    /// `None` means the identifier is unknown; an empty registration is
    /// `Some` with no structure.
    #[must_use]
    pub fn registration(&self, id: &str) -> Option<Registration<'_>> {
        self.entries
            .get_key_value(id)
            .map(|(id, structure)| Registration {
                id: id.as_str(),
                structure: structure.as_ref(),
            })
    }

    /// Iterate registrations in insertion order.
    pub fn registrations(&self) -> impl Iterator<Item = Registration<'_>> {
        self.order.iter().filter_map(|id| self.registration(id))
    }

    /// Number of registrations without a structure.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.entries.values().filter(|entry| entry.is_none()).count()
    }
}

/// Accumulates a dataset, keeping the order and mapping in lockstep.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    dataset: Dataset,
}

impl DatasetBuilder {
    /// Append a registration.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::DuplicateIdentifier`] if `id` was already
    /// pushed and [`DatasetError::EmptyHistory`] if `structure` has no
    /// observations. The builder is left unchanged on error.
    pub fn push(&mut self, id: String, structure: Option<Structure>) -> Result<(), DatasetError> {
        if structure.as_ref().is_some_and(|s| s.history.is_empty()) {
            return Err(DatasetError::EmptyHistory { id });
        }
        match self.dataset.entries.entry(id) {
            Entry::Occupied(occupied) => Err(DatasetError::DuplicateIdentifier {
                id: occupied.key().clone(),
            }),
            Entry::Vacant(vacant) => {
                self.dataset.order.push(vacant.key().clone());
                vacant.insert(structure);
                Ok(())
            }
        }
    }

    /// Finish building.
    #[must_use]
    pub fn finish(self) -> Dataset {
        self.dataset
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn structure(name: &str) -> Structure {
        Structure::new(
            name,
            Location {
                latitude: 1.0,
                longitude: 2.0,
            },
            vec![Observation {
                id: format!("{name}-obs"),
                created_at: Utc::now(),
                eggs: 1,
                birds: 2,
            }],
        )
    }

    #[test]
    fn order_follows_insertion_not_hashing() {
        let ids: Vec<String> = (0..50).map(|i| format!("id-{i}")).collect();
        let dataset = Dataset::from_entries(ids.iter().cloned().map(|id| (id, None)))
            .expect("unique identifiers");

        assert_eq!(dataset.order(), ids.as_slice());
        let iterated: Vec<&str> = dataset.registrations().map(|reg| reg.id).collect();
        assert_eq!(iterated, ids.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn duplicate_identifiers_are_rejected() {
        let result = Dataset::from_entries([
            ("a".to_owned(), None),
            ("a".to_owned(), Some(structure("a"))),
        ]);
        assert_eq!(
            result,
            Err(DatasetError::DuplicateIdentifier { id: "a".to_owned() })
        );
    }

    #[test]
    fn structures_without_history_are_rejected() {
        let hollow = Structure::new(
            "a",
            Location {
                latitude: 1.0,
                longitude: 2.0,
            },
            Vec::new(),
        );
        let mut builder = DatasetBuilder::default();

        assert_eq!(
            builder.push("a".to_owned(), Some(hollow)),
            Err(DatasetError::EmptyHistory { id: "a".to_owned() })
        );
        assert!(builder.finish().is_empty());
    }

    #[test]
    fn lookup_distinguishes_unknown_from_empty() {
        let dataset = Dataset::from_entries([
            ("a".to_owned(), Some(structure("a"))),
            ("b".to_owned(), None),
        ])
        .expect("unique identifiers");

        assert!(dataset.registration("missing").is_none());
        let empty = dataset.registration("b").expect("b exists");
        assert!(empty.is_empty());
        let populated = dataset.registration("a").expect("a exists");
        assert_eq!(populated.structure.map(|s| s.name.as_str()), Some("a"));
    }

    #[test]
    fn empty_count_tallies_structureless_registrations() {
        let dataset = Dataset::from_entries([
            ("a".to_owned(), None),
            ("b".to_owned(), Some(structure("b"))),
            ("c".to_owned(), None),
        ])
        .expect("unique identifiers");
        assert_eq!(dataset.empty_count(), 2);
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn latest_is_the_first_history_entry() {
        let structure = structure("a");
        assert_eq!(structure.latest().map(|obs| obs.id.as_str()), Some("a-obs"));
    }
}
