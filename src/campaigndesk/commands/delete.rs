use crate::book::RecordBook;
use crate::commands::{CmdResult, Listed};
use crate::error::Result;
use crate::index::{Indexed, RecordSelector};
use crate::model::Record;
use crate::store::DataStore;

use super::helpers::{outcome_message, resolve_selectors};

/// Removes every selected record. Related records are left alone.
pub fn run<S: DataStore, R: Listed>(
    book: &mut RecordBook<S>,
    selectors: &[RecordSelector],
) -> Result<CmdResult> {
    let targets = resolve_selectors(book.records::<R>(), selectors)?;
    let mut result = CmdResult::default();

    for target in targets {
        let change = book.remove::<R>(target.record.id());
        if let Some(removed) = change.value {
            result.add_message(outcome_message(
                &change.outcome,
                format!(
                    "{} deleted ({}): {}",
                    R::COLLECTION.noun(),
                    target.index,
                    removed.label()
                ),
            ));
            R::listed_mut(&mut result).push(Indexed {
                index: target.index,
                record: removed,
            });
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CampaignStatus, Client, ContentItem, ContentStatus, Platform};
    use crate::store::memory::fixtures::{date, StoreFixture};

    #[test]
    fn deletes_several_by_original_index() {
        let today = date("2024-06-01");
        let fx = StoreFixture::new()
            .with_content("a", Platform::Blog, ContentStatus::Draft, today)
            .with_content("b", Platform::Blog, ContentStatus::Draft, today)
            .with_content("c", Platform::Blog, ContentStatus::Draft, today);
        let mut book = RecordBook::open(fx.store);

        let result = run::<_, ContentItem>(
            &mut book,
            &[RecordSelector::Index(1), RecordSelector::Index(3)],
        )
        .unwrap();

        assert_eq!(result.content.len(), 2);
        let left: Vec<_> = book
            .load()
            .content_calendar
            .iter()
            .map(|i| i.title.clone())
            .collect();
        assert_eq!(left, vec!["b"]);
    }

    #[test]
    fn duplicate_selectors_delete_once() {
        let fx = StoreFixture::new()
            .with_client("Ann", "Acme")
            .with_client("Bob", "Bolt");
        let ann_id = fx.snapshot().clients[0].id.to_string();
        let mut book = RecordBook::open(fx.store);

        let result = run::<_, Client>(
            &mut book,
            &[RecordSelector::Index(1), RecordSelector::Id(ann_id)],
        )
        .unwrap();

        assert_eq!(result.clients.len(), 1);
        assert_eq!(book.snapshot().clients.len(), 1);
        assert_eq!(book.snapshot().clients[0].name, "Bob");
    }

    #[test]
    fn leaves_campaigns_of_deleted_client() {
        let fx = StoreFixture::new()
            .with_client("Ann", "Acme")
            .with_campaign("Q1", "Acme", "500", CampaignStatus::Active);
        let mut book = RecordBook::open(fx.store);

        run::<_, Client>(&mut book, &[RecordSelector::Index(1)]).unwrap();
        assert_eq!(book.load().campaigns.len(), 1);
    }

    #[test]
    fn any_bad_selector_aborts_before_deleting() {
        let fx = StoreFixture::new().with_client("Ann", "Acme");
        let mut book = RecordBook::open(fx.store);

        let result = run::<_, Client>(
            &mut book,
            &[RecordSelector::Index(1), RecordSelector::Id("missing".into())],
        );
        assert!(result.is_err());
        assert_eq!(book.snapshot().clients.len(), 1);
    }
}
