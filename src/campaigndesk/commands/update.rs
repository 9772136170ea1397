use crate::book::RecordBook;
use crate::commands::{CmdMessage, CmdResult, Listed};
use crate::error::Result;
use crate::index::{resolve, Indexed, RecordSelector};
use crate::model::Record;
use crate::store::DataStore;

use super::helpers::outcome_message;

pub fn run<S: DataStore, R: Listed>(
    book: &mut RecordBook<S>,
    selector: &RecordSelector,
    patch: R::Patch,
) -> Result<CmdResult>
where
    R::Patch: Default + PartialEq,
{
    let target = resolve(book.records::<R>(), selector)?;
    let mut result = CmdResult::default();

    if patch == R::Patch::default() {
        result.add_message(CmdMessage::info(format!(
            "Nothing to change for {} {}",
            R::COLLECTION.noun(),
            target.index
        )));
        R::listed_mut(&mut result).push(target);
        return Ok(result);
    }

    let change = book.update::<R>(target.record.id(), patch);
    if let Some(updated) = change.value {
        result.add_message(outcome_message(
            &change.outcome,
            format!(
                "{} updated ({}): {}",
                R::COLLECTION.noun(),
                target.index,
                updated.label()
            ),
        ));
        R::listed_mut(&mut result).push(Indexed {
            index: target.index,
            record: updated,
        });
    }
    Ok(result)
}
