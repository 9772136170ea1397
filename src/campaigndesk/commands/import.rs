use crate::book::RecordBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{RecordId, Snapshot};
use crate::store::DataStore;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::warn;

use super::helpers::outcome_message;

/// Replaces all data with the snapshot in `source`.
///
/// Unlike loading the store, an unreadable file is an error here and the
/// current data is left untouched. Missing or repeated ids within a collection
/// are replaced with fresh ones; the first record holding an id keeps it.
pub fn run<S: DataStore>(book: &mut RecordBook<S>, source: &Path) -> Result<CmdResult> {
    let content = fs::read_to_string(source)?;
    let mut snapshot: Snapshot = serde_json::from_str(&content)?;
    let reassigned = reassign_ids(&mut snapshot);

    let summary = format!(
        "Imported {} clients, {} campaigns, {} content items from {}",
        snapshot.clients.len(),
        snapshot.campaigns.len(),
        snapshot.content_calendar.len(),
        source.display()
    );
    let outcome = book.replace(snapshot);

    let mut result = CmdResult::default();
    if reassigned > 0 {
        result.add_message(CmdMessage::warning(format!(
            "Assigned new ids to {} records with a missing or repeated id",
            reassigned
        )));
    }
    result.add_message(outcome_message(&outcome, summary));
    Ok(result)
}

fn reassign_ids(snapshot: &mut Snapshot) -> usize {
    fresh_ids("client", snapshot.clients.iter_mut().map(|r| &mut r.id))
        + fresh_ids("campaign", snapshot.campaigns.iter_mut().map(|r| &mut r.id))
        + fresh_ids(
            "content item",
            snapshot.content_calendar.iter_mut().map(|r| &mut r.id),
        )
}

fn fresh_ids<'a>(noun: &str, ids: impl Iterator<Item = &'a mut RecordId>) -> usize {
    let mut seen: HashSet<RecordId> = HashSet::new();
    let mut reassigned = 0;
    for id in ids {
        if id.as_str().is_empty() || seen.contains(&*id) {
            let fresh = RecordId::generate();
            warn!(
                kind = noun,
                old = id.as_str(),
                new = fresh.as_str(),
                "reassigning imported id"
            );
            *id = fresh;
            reassigned += 1;
        }
        seen.insert(id.clone());
    }
    reassigned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    #[test]
    fn replaces_current_data() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("in.json");
        let incoming = StoreFixture::new()
            .with_client("Ann", "Acme")
            .with_client("Bob", "Bolt");
        fs::write(&source, serde_json::to_string(incoming.snapshot()).unwrap()).unwrap();

        let mut book = RecordBook::open(StoreFixture::new().with_client("Old", "Gone").store);
        let result = run(&mut book, &source).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(book.load(), incoming.snapshot());
    }

    #[test]
    fn accepts_legacy_numeric_ids() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("in.json");
        fs::write(
            &source,
            r#"{"clients":[{"id":"1700000000000","name":"Ann","company":"Acme","email":"","phone":"","industry":""}],"campaigns":[],"contentCalendar":[],"reports":[]}"#,
        )
        .unwrap();

        let mut book = RecordBook::open(InMemoryStore::new());
        run(&mut book, &source).unwrap();
        assert_eq!(book.snapshot().clients[0].id.as_str(), "1700000000000");
    }

    #[test]
    fn repeated_and_missing_ids_get_fresh_ones() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("in.json");
        let client = |id: &str, name: &str| {
            format!(
                r#"{{"id":"{}","name":"{}","company":"Acme","email":"","phone":"","industry":""}}"#,
                id, name
            )
        };
        fs::write(
            &source,
            format!(
                r#"{{"clients":[{},{},{}],"campaigns":[],"contentCalendar":[],"reports":[]}}"#,
                client("7", "Ann"),
                client("7", "Bob"),
                client("", "Cy")
            ),
        )
        .unwrap();

        let mut book = RecordBook::open(StoreFixture::new().with_client("Old", "Gone").store);
        let result = run(&mut book, &source).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains('2'));
        let clients = &book.load().clients;
        let names: Vec<_> = clients.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Ann", "Bob", "Cy"]);
        assert_eq!(clients[0].id.as_str(), "7");
        let ids: HashSet<_> = clients.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids.len(), 3);
        assert!(clients.iter().all(|c| !c.id.as_str().is_empty()));
    }

    #[test]
    fn same_id_in_different_collections_is_kept() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("in.json");
        fs::write(
            &source,
            r#"{"clients":[{"id":"7","name":"Ann","company":"Acme","email":"","phone":"","industry":""}],"campaigns":[{"id":"7","name":"Spring","clientName":"Acme","objective":"","budget":"","startDate":"2024-01-01","endDate":"2024-02-01","status":"planning"}],"contentCalendar":[],"reports":[]}"#,
        )
        .unwrap();

        let mut book = RecordBook::open(InMemoryStore::new());
        let result = run(&mut book, &source).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(book.snapshot().campaigns[0].id.as_str(), "7");
    }

    #[test]
    fn rejects_unparseable_file() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("in.json");
        fs::write(&source, "nope").unwrap();

        let mut book = RecordBook::open(InMemoryStore::new());
        assert!(matches!(
            run(&mut book, &source),
            Err(crate::error::DeskError::Serialization(_))
        ));
    }
}
