use crate::config::DeskConfig;
use crate::index::Indexed;
use crate::model::{Campaign, Client, ContentItem, Record};
use crate::reports::{ClientRollup, Overview, PlatformTally, StatusBucket};
use std::path::{Path, PathBuf};

pub mod add;
pub mod config;
pub mod dashboard;
pub mod delete;
pub mod export;
pub mod helpers;
pub mod import;
pub mod init;
pub mod list;
pub mod paths;
pub mod report;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub struct DeskPaths {
    pub data_dir: PathBuf,
}

impl DeskPaths {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(crate::store::DATA_FILENAME)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutput {
    Overview(Overview),
    Clients(Vec<ClientRollup>),
    CampaignStatus(Vec<StatusBucket>),
    Platforms(Vec<PlatformTally>),
    Upcoming {
        days: u32,
        items: Vec<Indexed<ContentItem>>,
    },
}

/// Owned, indexed form of [`crate::reports::Dashboard`].
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub total_clients: usize,
    pub active_campaigns: usize,
    pub upcoming_content: usize,
    pub upcoming_days: u32,
    pub total_campaigns: usize,
    pub recent_campaigns: Vec<Indexed<Campaign>>,
    pub next_content: Vec<Indexed<ContentItem>>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub clients: Vec<Indexed<Client>>,
    pub campaigns: Vec<Indexed<Campaign>>,
    pub content: Vec<Indexed<ContentItem>>,
    pub report: Option<ReportOutput>,
    pub dashboard: Option<DashboardView>,
    pub paths: Vec<PathBuf>,
    pub config: Option<DeskConfig>,
    pub exported: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_report(mut self, report: ReportOutput) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_dashboard(mut self, dashboard: DashboardView) -> Self {
        self.dashboard = Some(dashboard);
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: DeskConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_listed<R: Listed>(mut self, records: Vec<Indexed<R>>) -> Self {
        *R::listed_mut(&mut self) = records;
        self
    }

    pub fn listed<R: Listed>(&self) -> &[Indexed<R>] {
        R::listed(self)
    }
}

/// Routes a record kind to its slot in [`CmdResult`].
pub trait Listed: Record {
    fn listed(result: &CmdResult) -> &[Indexed<Self>];
    fn listed_mut(result: &mut CmdResult) -> &mut Vec<Indexed<Self>>;
}

impl Listed for Client {
    fn listed(result: &CmdResult) -> &[Indexed<Self>] {
        &result.clients
    }

    fn listed_mut(result: &mut CmdResult) -> &mut Vec<Indexed<Self>> {
        &mut result.clients
    }
}

impl Listed for Campaign {
    fn listed(result: &CmdResult) -> &[Indexed<Self>] {
        &result.campaigns
    }

    fn listed_mut(result: &mut CmdResult) -> &mut Vec<Indexed<Self>> {
        &mut result.campaigns
    }
}

impl Listed for ContentItem {
    fn listed(result: &CmdResult) -> &[Indexed<Self>] {
        &result.content
    }

    fn listed_mut(result: &mut CmdResult) -> &mut Vec<Indexed<Self>> {
        &mut result.content
    }
}
