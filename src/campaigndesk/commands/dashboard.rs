use crate::book::RecordBook;
use crate::commands::{CmdResult, DashboardView};
use crate::config::DeskConfig;
use crate::error::Result;
use crate::index::index_refs;
use crate::model::{Campaign, ContentItem};
use crate::reports;
use crate::store::DataStore;
use chrono::NaiveDate;

pub fn run<S: DataStore>(
    book: &RecordBook<S>,
    today: NaiveDate,
    config: &DeskConfig,
) -> Result<CmdResult> {
    let summary = reports::dashboard(
        book.snapshot(),
        today,
        config.upcoming_days,
        config.recent_limit,
    );
    let view = DashboardView {
        total_clients: summary.total_clients,
        active_campaigns: summary.active_campaigns,
        upcoming_content: summary.upcoming_content,
        upcoming_days: summary.upcoming_days,
        total_campaigns: summary.total_campaigns,
        recent_campaigns: index_refs(book.records::<Campaign>(), &summary.recent_campaigns),
        next_content: index_refs(book.records::<ContentItem>(), &summary.next_content),
    };
    Ok(CmdResult::default().with_dashboard(view))
}
