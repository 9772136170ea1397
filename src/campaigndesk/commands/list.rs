use crate::book::RecordBook;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{index_records, index_refs};
use crate::model::{Campaign, CampaignStatus, Client, ContentItem, ContentStatus, Platform};
use crate::reports;
use crate::store::DataStore;

pub fn clients<S: DataStore>(book: &RecordBook<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed::<Client>(index_records(book.records::<Client>())))
}

/// Campaigns in insertion order, optionally narrowed to one status.
pub fn campaigns<S: DataStore>(
    book: &RecordBook<S>,
    status: Option<CampaignStatus>,
) -> Result<CmdResult> {
    let listed = index_records(book.records::<Campaign>())
        .into_iter()
        .filter(|c| status.is_none_or(|s| c.record.status == s))
        .collect();
    Ok(CmdResult::default().with_listed::<Campaign>(listed))
}

/// The content calendar ordered by publish date.
pub fn content<S: DataStore>(
    book: &RecordBook<S>,
    platform: Option<Platform>,
    status: Option<ContentStatus>,
) -> Result<CmdResult> {
    let refs: Vec<&ContentItem> = reports::calendar(book.snapshot(), platform)
        .into_iter()
        .filter(|i| status.is_none_or(|s| i.status == s))
        .collect();
    let listed = index_refs(book.records::<ContentItem>(), &refs);
    Ok(CmdResult::default().with_listed::<ContentItem>(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{date, StoreFixture};

    fn book() -> RecordBook<crate::store::memory::InMemoryStore> {
        let fx = StoreFixture::new()
            .with_client("Ann", "Acme")
            .with_campaign("Q1", "Acme", "500", CampaignStatus::Active)
            .with_campaign("Q2", "Acme", "300", CampaignStatus::Planning)
            .with_content("late", Platform::Blog, ContentStatus::Draft, date("2024-07-01"))
            .with_content("early", Platform::Twitter, ContentStatus::Scheduled, date("2024-06-01"))
            .with_content("mid", Platform::Blog, ContentStatus::Scheduled, date("2024-06-15"));
        RecordBook::open(fx.store)
    }

    #[test]
    fn clients_are_indexed_from_one() {
        let result = clients(&book()).unwrap();
        assert_eq!(result.clients.len(), 1);
        assert_eq!(result.clients[0].index, 1);
    }

    #[test]
    fn campaigns_filter_by_status_keeps_index() {
        let result = campaigns(&book(), Some(CampaignStatus::Planning)).unwrap();
        assert_eq!(result.campaigns.len(), 1);
        assert_eq!(result.campaigns[0].record.name, "Q2");
        assert_eq!(result.campaigns[0].index, 2);
    }

    #[test]
    fn content_is_sorted_by_date_with_own_indexes() {
        let result = content(&book(), None, None).unwrap();
        let listed: Vec<_> = result
            .content
            .iter()
            .map(|i| (i.index, i.record.title.as_str()))
            .collect();
        assert_eq!(listed, vec![(2, "early"), (3, "mid"), (1, "late")]);
    }

    #[test]
    fn content_filters_compose() {
        let result = content(&book(), Some(Platform::Blog), Some(ContentStatus::Scheduled)).unwrap();
        assert_eq!(result.content.len(), 1);
        assert_eq!(result.content[0].record.title, "mid");
    }
}
