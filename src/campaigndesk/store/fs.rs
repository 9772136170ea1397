use super::{DataStore, DATA_FILENAME};
use crate::error::{DeskError, Result};
use crate::model::Snapshot;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(DeskError::Io)?;
        }
        Ok(())
    }

    fn write_snapshot(&self, snapshot: &Snapshot) -> Result<()> {
        self.ensure_dir()?;
        let data_file = self.data_file();
        let content = serde_json::to_string_pretty(snapshot).map_err(DeskError::Serialization)?;

        // Readers never observe a half-written file.
        let tmp_file = self.root.join(format!(".data-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(DeskError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &data_file) {
            let _ = fs::remove_file(&tmp_file);
            return Err(DeskError::Io(e));
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn initialize(&mut self) -> Result<bool> {
        if self.data_file().exists() {
            return Ok(false);
        }
        self.write_snapshot(&Snapshot::default())?;
        debug!(path = %self.data_file().display(), "created empty data file");
        Ok(true)
    }

    fn load(&self) -> Result<Snapshot> {
        let data_file = self.data_file();
        let content = fs::read_to_string(&data_file).map_err(DeskError::Io)?;
        let snapshot: Snapshot =
            serde_json::from_str(&content).map_err(DeskError::Serialization)?;
        debug!(
            path = %data_file.display(),
            clients = snapshot.clients.len(),
            campaigns = snapshot.campaigns.len(),
            content = snapshot.content_calendar.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.write_snapshot(snapshot)?;
        debug!(path = %self.data_file().display(), "saved snapshot");
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        Some(self.data_file())
    }
}
