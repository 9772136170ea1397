use crate::book::RecordBook;
use crate::commands::{CmdResult, DeskPaths};
use crate::error::Result;
use crate::store::DataStore;

/// Where the data lives. Falls back to the configured path for stores
/// without a location of their own.
pub fn run<S: DataStore>(book: &RecordBook<S>, paths: &DeskPaths) -> Result<CmdResult> {
    let data_file = book
        .store()
        .location()
        .unwrap_or_else(|| paths.data_file());
    Ok(CmdResult::default().with_paths(vec![data_file]))
}
