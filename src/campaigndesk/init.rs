use crate::api::{DeskApi, DeskPaths};
use crate::config::DeskConfig;
use crate::error::{DeskError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::{debug, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Overrides the per-user data directory.
pub const DATA_DIR_ENV: &str = "CAMPAIGNDESK_DATA";
/// Set to `development` for debug diagnostics.
pub const ENV_MODE_ENV: &str = "CAMPAIGNDESK_ENV";

pub struct DeskContext {
    pub api: DeskApi<FileStore>,
    pub config: DeskConfig,
}

/// The data directory: `$CAMPAIGNDESK_DATA` when set and non-empty,
/// else the platform's per-user data directory.
pub fn resolve_data_dir(override_dir: Option<String>) -> Result<PathBuf> {
    if let Some(dir) = override_dir.filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "campaigndesk", "campaigndesk")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| DeskError::Config("Could not determine the data directory".to_string()))
}

pub fn initialize() -> Result<DeskContext> {
    let data_dir = resolve_data_dir(std::env::var(DATA_DIR_ENV).ok())?;
    debug!(data_dir = %data_dir.display(), "resolved data directory");

    let config = DeskConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "unreadable config.json, using defaults");
        DeskConfig::default()
    });

    let store = FileStore::new(data_dir.clone());
    let api = DeskApi::new(store, DeskPaths::new(data_dir));
    Ok(DeskContext { api, config })
}

fn is_development(mode: Option<String>) -> bool {
    mode.is_some_and(|m| m.eq_ignore_ascii_case("development"))
}

/// Installs the global subscriber. Diagnostics go to stderr so they never mix
/// with command output.
pub fn init_logging(verbose: bool) {
    let level = if verbose || is_development(std::env::var(ENV_MODE_ENV).ok()) {
        Level::DEBUG
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    // A second install (tests, embedding) keeps the first subscriber.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_override_wins() {
        let dir = resolve_data_dir(Some("/tmp/desk-data".to_string())).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/desk-data"));
    }

    #[test]
    fn blank_override_is_ignored() {
        let dir = resolve_data_dir(Some("  ".to_string()));
        if let Ok(dir) = dir {
            assert_ne!(dir, PathBuf::from("  "));
        }
    }

    #[test]
    fn development_toggle_is_case_insensitive() {
        assert!(is_development(Some("Development".to_string())));
        assert!(!is_development(Some("production".to_string())));
        assert!(!is_development(None));
    }
}
