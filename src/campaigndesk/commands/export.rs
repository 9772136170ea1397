use crate::book::RecordBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use std::fs;
use std::path::Path;

/// Serializes the whole snapshot. With a target the JSON goes to that file,
/// otherwise it is returned for printing.
pub fn run<S: DataStore>(book: &RecordBook<S>, target: Option<&Path>) -> Result<CmdResult> {
    let json = serde_json::to_string_pretty(book.snapshot())?;
    let mut result = CmdResult::default();

    match target {
        Some(path) => {
            fs::write(path, &json)?;
            result.add_message(CmdMessage::success(format!(
                "Exported {} clients, {} campaigns, {} content items to {}",
                book.snapshot().clients.len(),
                book.snapshot().campaigns.len(),
                book.snapshot().content_calendar.len(),
                path.display()
            )));
        }
        None => result.exported = Some(json),
    }
    Ok(result)
}
