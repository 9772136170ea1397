//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. Every client of the
//! library (today only the CLI) goes through [`DeskApi`].
//!
//! The facade:
//! - **Dispatches** to the matching function in `commands/*.rs`
//! - **Normalizes inputs**: raw selector strings become [`RecordSelector`]s
//! - **Returns structured types** (`Result<CmdResult>`), never formatted text
//!
//! Business rules live in the commands, persistence rules in [`RecordBook`],
//! and rendering in the CLI.
//!
//! ## Generic Over DataStore
//!
//! `DeskApi<S: DataStore>` runs against `FileStore` in production and
//! `InMemoryStore` in tests.

use crate::book::RecordBook;
use crate::commands::{self, Listed};
use crate::config::DeskConfig;
use crate::error::Result;
use crate::index::RecordSelector;
use crate::model::{CampaignStatus, ContentStatus, Platform};
use crate::store::DataStore;
use chrono::NaiveDate;
use std::path::Path;
use std::str::FromStr;

pub struct DeskApi<S: DataStore> {
    book: RecordBook<S>,
    paths: commands::DeskPaths,
}

impl<S: DataStore> DeskApi<S> {
    pub fn new(store: S, paths: commands::DeskPaths) -> Self {
        Self {
            book: RecordBook::open(store),
            paths,
        }
    }

    pub fn book(&self) -> &RecordBook<S> {
        &self.book
    }

    pub fn add<R: Listed>(&mut self, draft: R::Draft) -> Result<commands::CmdResult> {
        commands::add::run::<S, R>(&mut self.book, draft)
    }

    pub fn update<R: Listed>(
        &mut self,
        selector: &str,
        patch: R::Patch,
    ) -> Result<commands::CmdResult>
    where
        R::Patch: Default + PartialEq,
    {
        let selector = RecordSelector::from_str(selector)?;
        commands::update::run::<S, R>(&mut self.book, &selector, patch)
    }

    pub fn delete<R: Listed, I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run::<S, R>(&mut self.book, &selectors)
    }

    pub fn view<R: Listed, I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::view::run::<S, R>(&self.book, &selectors)
    }

    pub fn list_clients(&self) -> Result<commands::CmdResult> {
        commands::list::clients(&self.book)
    }

    pub fn list_campaigns(&self, status: Option<CampaignStatus>) -> Result<commands::CmdResult> {
        commands::list::campaigns(&self.book, status)
    }

    pub fn list_content(
        &self,
        platform: Option<Platform>,
        status: Option<ContentStatus>,
    ) -> Result<commands::CmdResult> {
        commands::list::content(&self.book, platform, status)
    }

    pub fn report(&self, kind: ReportKind, today: NaiveDate) -> Result<commands::CmdResult> {
        commands::report::run(&self.book, kind, today)
    }

    pub fn dashboard(&self, today: NaiveDate, config: &DeskConfig) -> Result<commands::CmdResult> {
        commands::dashboard::run(&self.book, today, config)
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.book)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn data_path(&self) -> Result<commands::CmdResult> {
        commands::paths::run(&self.book, &self.paths)
    }

    pub fn export(&self, target: Option<&Path>) -> Result<commands::CmdResult> {
        commands::export::run(&self.book, target)
    }

    pub fn import(&mut self, source: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.book, source)
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<RecordSelector>> {
    inputs
        .iter()
        .map(|s| RecordSelector::from_str(s.as_ref()))
        .collect()
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::report::ReportKind;
pub use commands::{CmdMessage, CmdResult, DashboardView, DeskPaths, MessageLevel, ReportOutput};
