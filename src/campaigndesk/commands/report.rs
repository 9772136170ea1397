use crate::book::RecordBook;
use crate::commands::{CmdResult, ReportOutput};
use crate::error::Result;
use crate::index::index_refs;
use crate::model::ContentItem;
use crate::reports;
use crate::store::DataStore;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Overview,
    Clients,
    CampaignStatus,
    Platforms,
    Upcoming { days: u32 },
}

pub fn run<S: DataStore>(
    book: &RecordBook<S>,
    kind: ReportKind,
    today: NaiveDate,
) -> Result<CmdResult> {
    let snapshot = book.snapshot();
    let report = match kind {
        ReportKind::Overview => ReportOutput::Overview(reports::overview(snapshot, today)),
        ReportKind::Clients => ReportOutput::Clients(reports::by_client(snapshot)),
        ReportKind::CampaignStatus => {
            ReportOutput::CampaignStatus(reports::by_campaign_status(snapshot))
        }
        ReportKind::Platforms => ReportOutput::Platforms(reports::by_platform(snapshot)),
        ReportKind::Upcoming { days } => {
            let mut refs = reports::upcoming(snapshot, today, days);
            refs.sort_by_key(|i| i.publish_date);
            ReportOutput::Upcoming {
                days,
                items: index_refs(book.records::<ContentItem>(), &refs),
            }
        }
    };
    Ok(CmdResult::default().with_report(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CampaignStatus, ContentStatus, Platform};
    use crate::store::memory::fixtures::{date, StoreFixture};

    fn book() -> RecordBook<crate::store::memory::InMemoryStore> {
        let fx = StoreFixture::new()
            .with_client("Ann", "Acme")
            .with_campaign("Q1", "Acme", "500", CampaignStatus::Active)
            .with_content("far", Platform::Blog, ContentStatus::Draft, date("2024-06-20"))
            .with_content("soon", Platform::Blog, ContentStatus::Scheduled, date("2024-06-12"))
            .with_content("past", Platform::Blog, ContentStatus::Published, date("2024-06-01"));
        RecordBook::open(fx.store)
    }

    #[test]
    fn client_report_joins_campaign_budget() {
        let result = run(&book(), ReportKind::Clients, date("2024-06-10")).unwrap();
        let Some(ReportOutput::Clients(rows)) = result.report else {
            panic!("expected a client report");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].campaigns, 1);
        assert_eq!(rows[0].budget, 500.0);
    }

    #[test]
    fn upcoming_report_honours_window_and_sorts() {
        let result = run(&book(), ReportKind::Upcoming { days: 14 }, date("2024-06-10")).unwrap();
        let Some(ReportOutput::Upcoming { days, items }) = result.report else {
            panic!("expected an upcoming report");
        };
        assert_eq!(days, 14);
        let listed: Vec<_> = items.iter().map(|i| (i.index, i.record.title.as_str())).collect();
        assert_eq!(listed, vec![(2, "soon"), (1, "far")]);

        let result = run(&book(), ReportKind::Upcoming { days: 3 }, date("2024-06-10")).unwrap();
        let Some(ReportOutput::Upcoming { items, .. }) = result.report else {
            panic!("expected an upcoming report");
        };
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn overview_counts_everything() {
        let result = run(&book(), ReportKind::Overview, date("2024-06-10")).unwrap();
        let Some(ReportOutput::Overview(overview)) = result.report else {
            panic!("expected an overview");
        };
        assert_eq!(overview.total_clients, 1);
        assert_eq!(overview.total_content, 3);
        assert_eq!(overview.published_content, 1);
    }
}
