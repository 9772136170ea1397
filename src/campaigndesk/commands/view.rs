use crate::book::RecordBook;
use crate::commands::{CmdResult, Listed};
use crate::error::Result;
use crate::index::RecordSelector;
use crate::store::DataStore;

use super::helpers::resolve_selectors;

pub fn run<S: DataStore, R: Listed>(
    book: &RecordBook<S>,
    selectors: &[RecordSelector],
) -> Result<CmdResult> {
    let found = resolve_selectors(book.records::<R>(), selectors)?;
    Ok(CmdResult::default().with_listed::<R>(found))
}
