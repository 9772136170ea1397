//! # Data Model
//!
//! Three flat record kinds live in one [`Snapshot`]: [`Client`], [`Campaign`]
//! and [`ContentItem`]. Every record carries an opaque [`RecordId`] assigned by
//! the record book at creation time.
//!
//! Records reference clients only by free-text name (`client_name`). There is no
//! foreign key; see [`crate::join`] for how the loose match is performed.
//!
//! The serialized shape is the on-disk format: camelCase keys, `YYYY-MM-DD`
//! dates, absent optional fields omitted.
//!
//! ## Records, drafts and patches
//!
//! Each record kind comes with two companions:
//! - a *draft* holding everything except the id, consumed by `add`
//! - a *patch* where every field is optional, applied by `update` as a
//!   shallow merge (`Some` overwrites, `None` leaves the field alone)
//!
//! The [`Record`] trait ties the three together so the record book can offer
//! one contract for all collections.

use crate::error::{DeskError, Result};
use chrono::NaiveDate;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque record identifier. Unique within its collection and never changed
/// once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The mutable collections of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Clients,
    Campaigns,
    ContentCalendar,
}

impl Collection {
    /// Key used for the collection in the data file.
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Clients => "clients",
            Collection::Campaigns => "campaigns",
            Collection::ContentCalendar => "contentCalendar",
        }
    }

    /// Singular noun for user-facing messages.
    pub fn noun(&self) -> &'static str {
        match self {
            Collection::Clients => "Client",
            Collection::Campaigns => "Campaign",
            Collection::ContentCalendar => "Content item",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

macro_rules! labeled_enum {
    ($(#[$meta:meta])* $name:ident, $noun:literal { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $label)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DeskError;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| {
                        let expected: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
                        DeskError::Api(format!(
                            "Unknown {}: {} (expected one of: {})",
                            $noun,
                            s,
                            expected.join(", ")
                        ))
                    })
            }
        }
    };
}

labeled_enum!(
    /// Lifecycle state of a campaign.
    CampaignStatus, "campaign status" {
        Planning => "planning",
        Active => "active",
        Paused => "paused",
        Completed => "completed",
    }
);

labeled_enum!(
    /// Publishing channel of a content item. The set is fixed.
    Platform, "platform" {
        Facebook => "Facebook",
        Instagram => "Instagram",
        Twitter => "Twitter",
        LinkedIn => "LinkedIn",
        Blog => "Blog",
        Email => "Email",
        YouTube => "YouTube",
    }
);

labeled_enum!(
    ContentType, "content type" {
        Post => "Post",
        Story => "Story",
        Video => "Video",
        Article => "Article",
        Newsletter => "Newsletter",
        Ad => "Ad",
    }
);

labeled_enum!(
    ContentStatus, "content status" {
        Scheduled => "scheduled",
        Draft => "draft",
        Published => "published",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    /// Free text, matched against client name or company when reporting.
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub objective: String,
    /// Kept as entered. Parsed leniently by the reports.
    #[serde(default)]
    pub budget: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: CampaignStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_metrics: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
    pub platform: Platform,
    pub content_type: ContentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    pub publish_date: NaiveDate,
    #[serde(default)]
    pub publish_time: String,
    pub status: ContentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Placeholder for the `reports` collection of the data file.
///
/// Always written as `[]`. Whatever a file holds there is ignored on read:
/// computed reports are never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reserved;

impl Serialize for Reserved {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_seq(Some(0))?.end()
    }
}

impl<'de> Deserialize<'de> for Reserved {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        serde::de::IgnoredAny::deserialize(deserializer)?;
        Ok(Reserved)
    }
}

/// Every collection at one point in time. This is exactly what the data file holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
    #[serde(default)]
    pub content_calendar: Vec<ContentItem>,
    #[serde(default)]
    pub reports: Reserved,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty() && self.campaigns.is_empty() && self.content_calendar.is_empty()
    }
}

/// Binds a record kind to its collection, draft and patch types.
pub trait Record: Clone {
    type Draft;
    type Patch;

    const COLLECTION: Collection;

    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;

    fn id(&self) -> &RecordId;

    /// Human label used in messages (name or title).
    fn label(&self) -> &str;

    /// Shallow merge. Never touches the id.
    fn apply(&mut self, patch: Self::Patch);

    fn collection(snapshot: &Snapshot) -> &[Self];

    fn collection_mut(snapshot: &mut Snapshot) -> &mut Vec<Self>;
}

fn merge<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}

fn merge_optional<T>(field: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *field = value;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientDraft {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub industry: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPatch {
    pub name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub industry: Option<String>,
    pub notes: Option<String>,
}

impl Record for Client {
    type Draft = ClientDraft;
    type Patch = ClientPatch;

    const COLLECTION: Collection = Collection::Clients;

    fn from_draft(id: RecordId, draft: ClientDraft) -> Self {
        Self {
            id,
            name: draft.name,
            company: draft.company,
            email: draft.email,
            phone: draft.phone,
            industry: draft.industry,
            notes: draft.notes,
        }
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn apply(&mut self, patch: ClientPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.company, patch.company);
        merge(&mut self.email, patch.email);
        merge(&mut self.phone, patch.phone);
        merge(&mut self.industry, patch.industry);
        merge_optional(&mut self.notes, patch.notes);
    }

    fn collection(snapshot: &Snapshot) -> &[Self] {
        &snapshot.clients
    }

    fn collection_mut(snapshot: &mut Snapshot) -> &mut Vec<Self> {
        &mut snapshot.clients
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CampaignDraft {
    pub name: String,
    pub client_name: String,
    pub objective: String,
    pub budget: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: CampaignStatus,
    pub description: Option<String>,
    pub target_metrics: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPatch {
    pub name: Option<String>,
    pub client_name: Option<String>,
    pub objective: Option<String>,
    pub budget: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<CampaignStatus>,
    pub description: Option<String>,
    pub target_metrics: Option<String>,
}

impl Record for Campaign {
    type Draft = CampaignDraft;
    type Patch = CampaignPatch;

    const COLLECTION: Collection = Collection::Campaigns;

    fn from_draft(id: RecordId, draft: CampaignDraft) -> Self {
        Self {
            id,
            name: draft.name,
            client_name: draft.client_name,
            objective: draft.objective,
            budget: draft.budget,
            start_date: draft.start_date,
            end_date: draft.end_date,
            status: draft.status,
            description: draft.description,
            target_metrics: draft.target_metrics,
        }
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn apply(&mut self, patch: CampaignPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.client_name, patch.client_name);
        merge(&mut self.objective, patch.objective);
        merge(&mut self.budget, patch.budget);
        merge(&mut self.start_date, patch.start_date);
        merge(&mut self.end_date, patch.end_date);
        merge(&mut self.status, patch.status);
        merge_optional(&mut self.description, patch.description);
        merge_optional(&mut self.target_metrics, patch.target_metrics);
    }

    fn collection(snapshot: &Snapshot) -> &[Self] {
        &snapshot.campaigns
    }

    fn collection_mut(snapshot: &mut Snapshot) -> &mut Vec<Self> {
        &mut snapshot.campaigns
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentDraft {
    pub title: String,
    pub platform: Platform,
    pub content_type: ContentType,
    pub client_name: Option<String>,
    pub publish_date: NaiveDate,
    pub publish_time: String,
    pub status: ContentStatus,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPatch {
    pub title: Option<String>,
    pub platform: Option<Platform>,
    pub content_type: Option<ContentType>,
    pub client_name: Option<String>,
    pub publish_date: Option<NaiveDate>,
    pub publish_time: Option<String>,
    pub status: Option<ContentStatus>,
    pub description: Option<String>,
}

impl Record for ContentItem {
    type Draft = ContentDraft;
    type Patch = ContentPatch;

    const COLLECTION: Collection = Collection::ContentCalendar;

    fn from_draft(id: RecordId, draft: ContentDraft) -> Self {
        Self {
            id,
            title: draft.title,
            platform: draft.platform,
            content_type: draft.content_type,
            client_name: draft.client_name,
            publish_date: draft.publish_date,
            publish_time: draft.publish_time,
            status: draft.status,
            description: draft.description,
        }
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn apply(&mut self, patch: ContentPatch) {
        merge(&mut self.title, patch.title);
        merge(&mut self.platform, patch.platform);
        merge(&mut self.content_type, patch.content_type);
        merge_optional(&mut self.client_name, patch.client_name);
        merge(&mut self.publish_date, patch.publish_date);
        merge(&mut self.publish_time, patch.publish_time);
        merge(&mut self.status, patch.status);
        merge_optional(&mut self.description, patch.description);
    }

    fn collection(snapshot: &Snapshot) -> &[Self] {
        &snapshot.content_calendar
    }

    fn collection_mut(snapshot: &mut Snapshot) -> &mut Vec<Self> {
        &mut snapshot.content_calendar
    }
}
