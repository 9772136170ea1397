//! # Record Book
//!
//! [`RecordBook`] owns the authoritative in-memory [`Snapshot`] and keeps the
//! backing [`DataStore`] in step with it. It is the only writer: every mutation
//! goes through [`RecordBook::add`], [`RecordBook::update`] or
//! [`RecordBook::remove`], and each one ends with a full save.
//!
//! ## Failure policy
//!
//! - Reads never fail. A missing or corrupt medium yields the empty snapshot and
//!   the error is logged.
//! - Writes report a [`SaveOutcome`]. When a save fails the in-memory change is
//!   kept, so callers can warn that it was not persisted without losing it.
//! - Unknown ids on update/remove are silent no-ops and cause no write.
//!
//! All operations are generic over [`Record`], so the three collections share
//! one contract.

use crate::model::{Record, RecordId, Snapshot};
use crate::store::DataStore;
use tracing::{debug, error, warn};

/// What happened to the backing medium after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// Nothing changed, nothing was written.
    Unchanged,
    /// The change is in memory only.
    Failed(String),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SaveOutcome::Failed(_))
    }
}

/// Result of a mutation: the touched value plus the persistence outcome.
#[derive(Debug, Clone)]
pub struct Change<T> {
    pub value: T,
    pub outcome: SaveOutcome,
}

/// Loads the snapshot, substituting the empty one on any failure.
pub fn load_or_default<S: DataStore>(store: &S) -> Snapshot {
    match store.load() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!(error = %e, "failed to load data, starting from an empty snapshot");
            Snapshot::default()
        }
    }
}

pub struct RecordBook<S: DataStore> {
    store: S,
    snapshot: Snapshot,
    created: bool,
}

impl<S: DataStore> RecordBook<S> {
    /// Initializes the medium if needed and loads it.
    pub fn open(mut store: S) -> Self {
        let created = match store.initialize() {
            Ok(true) => {
                debug!("initialized empty data store");
                true
            }
            Ok(false) => false,
            Err(e) => {
                warn!(error = %e, "could not initialize data store");
                false
            }
        };
        let snapshot = load_or_default(&store);
        Self {
            store,
            snapshot,
            created,
        }
    }

    /// Whether opening this book wrote the initial empty medium.
    pub fn created(&self) -> bool {
        self.created
    }

    /// Re-reads the medium, replacing the in-memory snapshot.
    pub fn load(&mut self) -> &Snapshot {
        self.snapshot = load_or_default(&self.store);
        &self.snapshot
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Writes the current snapshot to the medium.
    pub fn save(&mut self) -> SaveOutcome {
        match self.store.save(&self.snapshot) {
            Ok(()) => SaveOutcome::Saved,
            Err(e) => {
                warn!(error = %e, "failed to save data");
                SaveOutcome::Failed(e.to_string())
            }
        }
    }

    /// Swaps in a whole new snapshot and saves it.
    pub fn replace(&mut self, snapshot: Snapshot) -> SaveOutcome {
        self.snapshot = snapshot;
        self.save()
    }

    pub fn records<R: Record>(&self) -> &[R] {
        R::collection(&self.snapshot)
    }

    pub fn get<R: Record>(&self, id: &RecordId) -> Option<&R> {
        self.records::<R>().iter().find(|r| r.id() == id)
    }

    /// Assigns a fresh id, appends the record and saves.
    pub fn add<R: Record>(&mut self, draft: R::Draft) -> Change<R> {
        let id = self.fresh_id::<R>();
        let record = R::from_draft(id, draft);
        R::collection_mut(&mut self.snapshot).push(record.clone());
        debug!(collection = %R::COLLECTION, id = %record.id(), "added record");

        let outcome = self.save();
        Change {
            value: record,
            outcome,
        }
    }

    /// Shallow-merges `patch` onto the record with `id` and saves.
    /// Returns the updated record, or `None` when no record has that id.
    pub fn update<R: Record>(&mut self, id: &RecordId, patch: R::Patch) -> Change<Option<R>> {
        let Some(record) = R::collection_mut(&mut self.snapshot)
            .iter_mut()
            .find(|r| r.id() == id)
        else {
            debug!(collection = %R::COLLECTION, id = %id, "update of unknown id ignored");
            return Change {
                value: None,
                outcome: SaveOutcome::Unchanged,
            };
        };

        record.apply(patch);
        let updated = record.clone();
        debug!(collection = %R::COLLECTION, id = %id, "updated record");

        let outcome = self.save();
        Change {
            value: Some(updated),
            outcome,
        }
    }

    /// Drops the record with `id` and saves. Other records keep their order.
    pub fn remove<R: Record>(&mut self, id: &RecordId) -> Change<Option<R>> {
        let records = R::collection_mut(&mut self.snapshot);
        let Some(position) = records.iter().position(|r| r.id() == id) else {
            debug!(collection = %R::COLLECTION, id = %id, "remove of unknown id ignored");
            return Change {
                value: None,
                outcome: SaveOutcome::Unchanged,
            };
        };

        let removed = records.remove(position);
        debug!(collection = %R::COLLECTION, id = %id, "removed record");

        let outcome = self.save();
        Change {
            value: Some(removed),
            outcome,
        }
    }

    fn fresh_id<R: Record>(&self) -> RecordId {
        loop {
            let id = RecordId::generate();
            if self.get::<R>(&id).is_none() {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Campaign, CampaignPatch, CampaignStatus, Client, ClientPatch, ContentItem,
        ContentStatus, Platform,
    };
    use crate::store::memory::fixtures::{campaign_draft, client_draft, content_draft, date};
    use crate::store::memory::InMemoryStore;
    use std::collections::HashSet;

    fn book() -> RecordBook<InMemoryStore> {
        RecordBook::open(InMemoryStore::new())
    }

    #[test]
    fn fresh_store_loads_empty_snapshot() {
        let mut book = book();
        assert_eq!(book.load(), &Snapshot::default());
        assert_eq!(book.store().writes(), 1);
    }

    #[test]
    fn open_remembers_whether_it_created_the_medium() {
        assert!(book().created());
        assert!(!RecordBook::open(InMemoryStore::with_raw("{}")).created());
    }

    #[test]
    fn corrupt_medium_degrades_to_empty() {
        let book = RecordBook::open(InMemoryStore::with_raw("{ definitely not json"));
        assert_eq!(book.snapshot(), &Snapshot::default());
        // initialize must not overwrite what is there
        assert_eq!(book.store().raw(), Some("{ definitely not json"));
    }

    #[test]
    fn unknown_enum_value_degrades_to_empty() {
        let raw = r#"{"clients":[],"campaigns":[{"id":"1","name":"x","clientName":"","objective":"","budget":"","startDate":"2024-01-01","endDate":"2024-01-02","status":"cancelled"}],"contentCalendar":[],"reports":[]}"#;
        let book = RecordBook::open(InMemoryStore::with_raw(raw));
        assert!(book.snapshot().campaigns.is_empty());
    }

    #[test]
    fn add_assigns_unique_non_empty_ids() {
        let mut book = book();
        let mut seen = HashSet::new();
        for i in 0..50 {
            let change = book.add::<Client>(client_draft(&format!("C{}", i), "Co"));
            assert!(change.outcome.is_saved());
            assert!(!change.value.id.as_str().is_empty());
            assert!(seen.insert(change.value.id.clone()));
        }
        assert_eq!(book.snapshot().clients.len(), 50);
    }

    #[test]
    fn add_preserves_insertion_order_and_persists() {
        let mut book = book();
        book.add::<Client>(client_draft("Ann", "Acme"));
        book.add::<Client>(client_draft("Bob", "Bolt"));

        let names: Vec<_> = book.load().clients.iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, vec!["Ann", "Bob"]);
    }

    #[test]
    fn update_merges_supplied_fields_only() {
        let mut book = book();
        let before = book
            .add::<Campaign>(campaign_draft("Q1", "Acme", "500", CampaignStatus::Planning))
            .value;

        let change = book.update::<Campaign>(
            &before.id,
            CampaignPatch {
                status: Some(CampaignStatus::Active),
                ..Default::default()
            },
        );
        assert!(change.outcome.is_saved());

        let after = book.load().campaigns[0].clone();
        let mut expected = before.clone();
        expected.status = CampaignStatus::Active;
        assert_eq!(after, expected);
    }

    #[test]
    fn update_unknown_id_is_silent_noop() {
        let mut book = book();
        book.add::<Client>(client_draft("Ann", "Acme"));
        let writes = book.store().writes();
        let before = book.snapshot().clone();

        let change = book.update::<Client>(
            &RecordId::from("missing"),
            ClientPatch {
                name: Some("Zed".into()),
                ..Default::default()
            },
        );

        assert!(change.value.is_none());
        assert_eq!(change.outcome, SaveOutcome::Unchanged);
        assert_eq!(book.snapshot(), &before);
        assert_eq!(book.store().writes(), writes);
    }

    #[test]
    fn remove_drops_one_record_and_keeps_order() {
        let mut book = book();
        let today = date("2024-06-01");
        let ids: Vec<_> = ["a", "b", "c"]
            .iter()
            .map(|t| {
                book.add::<ContentItem>(content_draft(
                    t,
                    Platform::Blog,
                    ContentStatus::Draft,
                    today,
                ))
                .value
                .id
            })
            .collect();

        let change = book.remove::<ContentItem>(&ids[1]);
        assert_eq!(change.value.map(|r| r.title), Some("b".to_string()));

        let titles: Vec<_> = book
            .load()
            .content_calendar
            .iter()
            .map(|r| r.title.clone())
            .collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn remove_unknown_id_is_silent_noop() {
        let mut book = book();
        book.add::<Client>(client_draft("Ann", "Acme"));
        let change = book.remove::<Client>(&RecordId::from("nope"));
        assert!(change.value.is_none());
        assert_eq!(change.outcome, SaveOutcome::Unchanged);
        assert_eq!(book.snapshot().clients.len(), 1);
    }

    #[test]
    fn failed_save_keeps_in_memory_change() {
        let mut book = RecordBook::open(InMemoryStore::new());
        book.store_mut().set_fail_writes(true);

        let change = book.add::<Client>(client_draft("Ann", "Acme"));
        assert!(change.outcome.is_failed());
        assert_eq!(book.snapshot().clients.len(), 1);

        // the medium still holds the last good write
        assert!(book.load().clients.is_empty());
    }

    #[test]
    fn deleting_client_does_not_cascade() {
        let mut book = book();
        let ann = book.add::<Client>(client_draft("Ann", "Acme")).value;
        book.add::<Campaign>(campaign_draft("Q1", "Acme", "500", CampaignStatus::Active));

        book.remove::<Client>(&ann.id);
        assert!(book.snapshot().clients.is_empty());
        assert_eq!(book.snapshot().campaigns.len(), 1);
    }

    #[test]
    fn replace_round_trips_through_the_store() {
        let mut source = book();
        source.add::<Client>(client_draft("Ann", "Acme"));
        let mut campaign = campaign_draft("Q1", "Acme", "", CampaignStatus::Paused);
        campaign.description = Some("no metrics on purpose".into());
        source.add::<Campaign>(campaign);
        let snapshot = source.snapshot().clone();

        let mut target = book();
        assert!(target.replace(snapshot.clone()).is_saved());
        assert_eq!(target.load(), &snapshot);
    }
}
