//! # Reports
//!
//! Pure aggregation over a [`Snapshot`]. Nothing here mutates, caches or
//! persists; every report is recomputed from scratch on request.
//!
//! "Now" is passed in as `today`. Dates are compared at day granularity, so an
//! item published today counts as on/after now.
//!
//! Budgets are free text. [`parse_budget`] reads them leniently and anything it
//! cannot read counts as zero, so one bad record never spoils an aggregate.

use crate::join::ClientJoin;
use crate::model::{
    Campaign, CampaignStatus, ContentItem, ContentStatus, Platform, RecordId, Snapshot,
};
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Reads a budget the way a lenient float parser would: the whole trimmed text,
/// or failing that its longest numeric prefix. Everything else is 0.
pub fn parse_budget(raw: &str) -> f64 {
    let text = raw.trim();
    let value = text
        .parse::<f64>()
        .ok()
        .or_else(|| numeric_prefix(text).parse::<f64>().ok())
        .unwrap_or(0.0);
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {}
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    &text[..end]
}

fn budget_sum<'a>(campaigns: impl Iterator<Item = &'a Campaign>) -> f64 {
    campaigns.map(|c| parse_budget(&c.budget)).sum()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub total_clients: usize,
    pub total_campaigns: usize,
    pub active_campaigns: usize,
    pub completed_campaigns: usize,
    pub total_budget: f64,
    pub total_content: usize,
    /// Scheduled items dated today or later.
    pub upcoming_content: usize,
    pub published_content: usize,
}

pub fn overview(snapshot: &Snapshot, today: NaiveDate) -> Overview {
    let campaigns_with = |status: CampaignStatus| {
        snapshot
            .campaigns
            .iter()
            .filter(|c| c.status == status)
            .count()
    };
    let content = &snapshot.content_calendar;

    Overview {
        total_clients: snapshot.clients.len(),
        total_campaigns: snapshot.campaigns.len(),
        active_campaigns: campaigns_with(CampaignStatus::Active),
        completed_campaigns: campaigns_with(CampaignStatus::Completed),
        total_budget: budget_sum(snapshot.campaigns.iter()),
        total_content: content.len(),
        upcoming_content: content
            .iter()
            .filter(|i| i.status == ContentStatus::Scheduled && i.publish_date >= today)
            .count(),
        published_content: content
            .iter()
            .filter(|i| i.status == ContentStatus::Published)
            .count(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientRollup {
    pub client_id: RecordId,
    pub name: String,
    pub company: String,
    pub campaigns: usize,
    pub active_campaigns: usize,
    pub content: usize,
    pub budget: f64,
}

/// One rollup per client, in client order.
pub fn by_client(snapshot: &Snapshot) -> Vec<ClientRollup> {
    snapshot
        .clients
        .iter()
        .map(|client| {
            let join = ClientJoin::new(client);
            let campaigns: Vec<&Campaign> = join.campaigns(snapshot).collect();
            ClientRollup {
                client_id: client.id.clone(),
                name: client.name.clone(),
                company: client.company.clone(),
                campaigns: campaigns.len(),
                active_campaigns: campaigns
                    .iter()
                    .filter(|c| c.status == CampaignStatus::Active)
                    .count(),
                content: join.content(snapshot).count(),
                budget: budget_sum(campaigns.into_iter()),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusBucket {
    pub status: CampaignStatus,
    pub count: usize,
    pub budget: f64,
}

/// Always four buckets, in lifecycle order.
pub fn by_campaign_status(snapshot: &Snapshot) -> Vec<StatusBucket> {
    CampaignStatus::ALL
        .iter()
        .map(|&status| {
            let matching: Vec<&Campaign> = snapshot
                .campaigns
                .iter()
                .filter(|c| c.status == status)
                .collect();
            StatusBucket {
                status,
                count: matching.len(),
                budget: budget_sum(matching.into_iter()),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformTally {
    pub platform: Platform,
    pub total: usize,
    pub scheduled: usize,
    pub published: usize,
    pub draft: usize,
}

/// Always all seven platforms, zero counts included.
pub fn by_platform(snapshot: &Snapshot) -> Vec<PlatformTally> {
    Platform::ALL
        .iter()
        .map(|&platform| {
            let mut tally = PlatformTally {
                platform,
                total: 0,
                scheduled: 0,
                published: 0,
                draft: 0,
            };
            for item in snapshot
                .content_calendar
                .iter()
                .filter(|i| i.platform == platform)
            {
                tally.total += 1;
                match item.status {
                    ContentStatus::Scheduled => tally.scheduled += 1,
                    ContentStatus::Published => tally.published += 1,
                    ContentStatus::Draft => tally.draft += 1,
                }
            }
            tally
        })
        .collect()
}

/// Content dated within `[today, today + horizon_days]`, in insertion order.
pub fn upcoming(snapshot: &Snapshot, today: NaiveDate, horizon_days: u32) -> Vec<&ContentItem> {
    let until = today
        .checked_add_days(Days::new(u64::from(horizon_days)))
        .unwrap_or(NaiveDate::MAX);
    snapshot
        .content_calendar
        .iter()
        .filter(|i| i.publish_date >= today && i.publish_date <= until)
        .collect()
}

/// The last `n` campaigns added, most recent first.
pub fn recent_campaigns(snapshot: &Snapshot, n: usize) -> Vec<&Campaign> {
    snapshot.campaigns.iter().rev().take(n).collect()
}

/// The next `n` content items dated today or later, soonest first.
/// Items sharing a date keep their insertion order.
pub fn upcoming_sorted(snapshot: &Snapshot, today: NaiveDate, n: usize) -> Vec<&ContentItem> {
    let mut items: Vec<&ContentItem> = snapshot
        .content_calendar
        .iter()
        .filter(|i| i.publish_date >= today)
        .collect();
    items.sort_by_key(|i| i.publish_date);
    items.truncate(n);
    items
}

/// The content calendar, optionally limited to one platform, by publish date.
pub fn calendar(snapshot: &Snapshot, platform: Option<Platform>) -> Vec<&ContentItem> {
    let mut items: Vec<&ContentItem> = snapshot
        .content_calendar
        .iter()
        .filter(|i| platform.is_none_or(|p| i.platform == p))
        .collect();
    items.sort_by_key(|i| i.publish_date);
    items
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard<'a> {
    pub total_clients: usize,
    pub active_campaigns: usize,
    /// Content dated within the upcoming window (any status).
    pub upcoming_content: usize,
    pub upcoming_days: u32,
    pub total_campaigns: usize,
    pub recent_campaigns: Vec<&'a Campaign>,
    pub next_content: Vec<&'a ContentItem>,
}

pub fn dashboard(
    snapshot: &Snapshot,
    today: NaiveDate,
    upcoming_days: u32,
    recent_limit: usize,
) -> Dashboard<'_> {
    Dashboard {
        total_clients: snapshot.clients.len(),
        active_campaigns: snapshot
            .campaigns
            .iter()
            .filter(|c| c.status == CampaignStatus::Active)
            .count(),
        upcoming_content: upcoming(snapshot, today, upcoming_days).len(),
        upcoming_days,
        total_campaigns: snapshot.campaigns.len(),
        recent_campaigns: recent_campaigns(snapshot, recent_limit),
        next_content: upcoming_sorted(snapshot, today, recent_limit),
    }
}
