use crate::book::RecordBook;
use crate::commands::{CmdResult, Listed};
use crate::error::Result;
use crate::index::Indexed;
use crate::model::Record;
use crate::store::DataStore;

use super::helpers::outcome_message;

pub fn run<S: DataStore, R: Listed>(book: &mut RecordBook<S>, draft: R::Draft) -> Result<CmdResult> {
    let change = book.add::<R>(draft);
    let index = book.records::<R>().len();

    let mut result = CmdResult::default();
    result.add_message(outcome_message(
        &change.outcome,
        format!(
            "{} added ({}): {}",
            R::COLLECTION.noun(),
            index,
            change.value.label()
        ),
    ));
    R::listed_mut(&mut result).push(Indexed {
        index,
        record: change.value,
    });
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::{Campaign, CampaignStatus, Client};
    use crate::store::memory::fixtures::{campaign_draft, client_draft};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_and_reports_index() {
        let mut book = RecordBook::open(InMemoryStore::new());
        run::<_, Client>(&mut book, client_draft("Ann", "Acme")).unwrap();
        let result = run::<_, Client>(&mut book, client_draft("Bob", "Bolt")).unwrap();

        assert_eq!(result.clients.len(), 1);
        assert_eq!(result.clients[0].index, 2);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Client added (2): Bob");
        assert_eq!(book.load().clients.len(), 2);
    }

    #[test]
    fn warns_when_save_fails() {
        let mut book = RecordBook::open(InMemoryStore::new().failing_writes());
        let result = run::<_, Campaign>(
            &mut book,
            campaign_draft("Q1", "Acme", "500", CampaignStatus::Active),
        )
        .unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("NOT saved"));
        assert_eq!(book.snapshot().campaigns.len(), 1);
    }
}
