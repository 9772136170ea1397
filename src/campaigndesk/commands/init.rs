use crate::book::RecordBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Creates the empty data file if there is none. Existing data is never touched.
pub fn run<S: DataStore>(book: &mut RecordBook<S>) -> Result<CmdResult> {
    let created = book.created() || book.store_mut().initialize()?;
    book.load();

    let location = book
        .store()
        .location()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "memory".to_string());

    let mut result = CmdResult::default();
    if created {
        result.add_message(CmdMessage::success(format!(
            "Initialized empty data store at {}",
            location
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Data store already exists at {}",
            location
        )));
    }
    Ok(result)
}
