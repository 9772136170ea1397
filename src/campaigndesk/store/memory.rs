use super::DataStore;
use crate::error::{DeskError, Result};
use crate::model::Snapshot;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// The snapshot is kept serialized so loads go through the same parsing as
/// the file store.
#[derive(Default)]
pub struct InMemoryStore {
    raw: Option<String>,
    fail_writes: bool,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose medium already holds `raw`, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            ..Self::default()
        }
    }

    /// Every save fails, like a full or read-only disk.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful saves, initialization included.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn initialize(&mut self) -> Result<bool> {
        if self.raw.is_some() {
            return Ok(false);
        }
        self.save(&Snapshot::default())?;
        Ok(true)
    }

    fn load(&self) -> Result<Snapshot> {
        let raw = self
            .raw
            .as_deref()
            .ok_or_else(|| DeskError::Store("No data has been written yet".to_string()))?;
        Ok(serde_json::from_str(raw)?)
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        if self.fail_writes {
            return Err(DeskError::Store("Write refused by test store".to_string()));
        }
        self.raw = Some(serde_json::to_string_pretty(snapshot)?);
        self.writes += 1;
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        None
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{
        Campaign, CampaignDraft, CampaignStatus, Client, ClientDraft, ContentDraft, ContentItem,
        ContentStatus, ContentType, Platform, Record, RecordId,
    };
    use chrono::NaiveDate;

    pub fn date(s: &str) -> NaiveDate {
        s.parse().expect("fixture dates are YYYY-MM-DD")
    }

    pub fn client_draft(name: &str, company: &str) -> ClientDraft {
        ClientDraft {
            name: name.to_string(),
            company: company.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "555-0100".to_string(),
            industry: "Retail".to_string(),
            notes: None,
        }
    }

    pub fn campaign_draft(
        name: &str,
        client_name: &str,
        budget: &str,
        status: CampaignStatus,
    ) -> CampaignDraft {
        CampaignDraft {
            name: name.to_string(),
            client_name: client_name.to_string(),
            objective: "Awareness".to_string(),
            budget: budget.to_string(),
            start_date: date("2024-01-01"),
            end_date: date("2024-12-31"),
            status,
            description: None,
            target_metrics: None,
        }
    }

    pub fn content_draft(
        title: &str,
        platform: Platform,
        status: ContentStatus,
        publish_date: NaiveDate,
    ) -> ContentDraft {
        ContentDraft {
            title: title.to_string(),
            platform,
            content_type: ContentType::Post,
            client_name: None,
            publish_date,
            publish_time: "09:00".to_string(),
            status,
            description: None,
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
        snapshot: Snapshot,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            let mut store = InMemoryStore::new();
            store.initialize().unwrap();
            Self {
                store,
                snapshot: Snapshot::default(),
            }
        }

        fn push<R: Record>(mut self, draft: R::Draft) -> Self {
            let record = R::from_draft(RecordId::generate(), draft);
            R::collection_mut(&mut self.snapshot).push(record);
            self.store.save(&self.snapshot).unwrap();
            self
        }

        pub fn with_client(self, name: &str, company: &str) -> Self {
            self.push::<Client>(client_draft(name, company))
        }

        pub fn with_campaign(
            self,
            name: &str,
            client_name: &str,
            budget: &str,
            status: CampaignStatus,
        ) -> Self {
            self.push::<Campaign>(campaign_draft(name, client_name, budget, status))
        }

        pub fn with_content(
            self,
            title: &str,
            platform: Platform,
            status: ContentStatus,
            publish_date: NaiveDate,
        ) -> Self {
            self.push::<ContentItem>(content_draft(title, platform, status, publish_date))
        }

        pub fn snapshot(&self) -> &Snapshot {
            &self.snapshot
        }
    }
}
