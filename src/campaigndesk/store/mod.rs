//! # Storage Layer
//!
//! The backing medium for the record book is abstracted behind the [`DataStore`]
//! trait. A store knows how to create, read and replace one whole [`Snapshot`];
//! it knows nothing about individual records.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - One pretty-printed `data.json` in the data directory
//!   - Whole-file replace on every save (write to a temp file, then rename)
//!
//! - [`memory::InMemoryStore`]: Storage for testing
//!   - Holds the serialized text, so tests exercise the same serde path
//!   - Can be told to fail writes or start out corrupt
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── data.json     # {"clients":[],"campaigns":[],"contentCalendar":[],"reports":[]}
//! └── config.json   # DeskConfig
//! ```
//!
//! Stores report every failure as an `Err`. Turning a failed read into an empty
//! snapshot is the record book's policy, not the store's.

use crate::error::Result;
use crate::model::Snapshot;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub const DATA_FILENAME: &str = "data.json";

/// Abstract interface over the persisted snapshot.
pub trait DataStore {
    /// Create the medium holding the four empty collections if it does not
    /// exist yet. Never touches existing data. Returns whether it created one.
    fn initialize(&mut self) -> Result<bool>;

    /// Read and parse the whole medium.
    fn load(&self) -> Result<Snapshot>;

    /// Replace the whole medium with `snapshot`.
    fn save(&mut self, snapshot: &Snapshot) -> Result<()>;

    /// Where the data lives, for stores that have a location.
    fn location(&self) -> Option<PathBuf>;
}
