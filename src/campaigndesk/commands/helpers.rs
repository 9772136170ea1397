use crate::book::SaveOutcome;
use crate::commands::CmdMessage;
use crate::error::Result;
use crate::index::{resolve, Indexed, RecordSelector};
use crate::model::Record;

/// Resolves every selector against the collection as it is now, before
/// anything is removed. Selectors naming the same record collapse to one.
pub fn resolve_selectors<R: Record>(
    records: &[R],
    selectors: &[RecordSelector],
) -> Result<Vec<Indexed<R>>> {
    let mut resolved: Vec<Indexed<R>> = Vec::with_capacity(selectors.len());
    for selector in selectors {
        let found = resolve(records, selector)?;
        if !resolved.iter().any(|r| r.record.id() == found.record.id()) {
            resolved.push(found);
        }
    }
    Ok(resolved)
}

/// Turns a save outcome into the message the user sees for `done`.
pub fn outcome_message(outcome: &SaveOutcome, done: String) -> CmdMessage {
    match outcome {
        SaveOutcome::Saved => CmdMessage::success(done),
        SaveOutcome::Unchanged => CmdMessage::info(done),
        SaveOutcome::Failed(e) => CmdMessage::warning(format!("{} (NOT saved: {})", done, e)),
    }
}
