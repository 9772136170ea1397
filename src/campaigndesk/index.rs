//! # Display Indexes
//!
//! Record ids are opaque and long. For day-to-day use every record also gets a
//! display index: its 1-based position in its collection's insertion order.
//!
//! Indexes are stable under sorting and filtering (a listing sorted by date
//! still shows each record's own index) but shift when an earlier record is
//! deleted. Anywhere an index is accepted, an id or a unique id prefix works too.

use crate::error::{DeskError, Result};
use crate::model::Record;
use std::fmt;
use std::str::FromStr;

/// A record paired with its display index.
#[derive(Debug, Clone, PartialEq)]
pub struct Indexed<T> {
    pub index: usize,
    pub record: T,
}

/// Assigns display indexes in collection order.
pub fn index_records<R: Clone>(records: &[R]) -> Vec<Indexed<R>> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| Indexed {
            index: i + 1,
            record: record.clone(),
        })
        .collect()
}

/// Looks up the display index of each borrowed record by id.
pub fn index_refs<R: Record>(records: &[R], refs: &[&R]) -> Vec<Indexed<R>> {
    refs.iter()
        .filter_map(|r| {
            records
                .iter()
                .position(|candidate| candidate.id() == r.id())
                .map(|pos| Indexed {
                    index: pos + 1,
                    record: (*r).clone(),
                })
        })
        .collect()
}

/// User input naming one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSelector {
    Index(usize),
    Id(String),
}

impl FromStr for RecordSelector {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DeskError::Api("Empty record selector".to_string()));
        }
        match s.parse::<usize>() {
            Ok(n) if n > 0 => Ok(RecordSelector::Index(n)),
            _ => Ok(RecordSelector::Id(s.to_string())),
        }
    }
}

impl fmt::Display for RecordSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSelector::Index(i) => write!(f, "{}", i),
            RecordSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

/// Resolves a selector against a collection.
///
/// An index that is out of range is retried as an id, since ids written by
/// older versions of the data file are plain numbers.
pub fn resolve<R: Record>(records: &[R], selector: &RecordSelector) -> Result<Indexed<R>> {
    match selector {
        RecordSelector::Index(n) => match n.checked_sub(1).and_then(|i| records.get(i)) {
            Some(record) => Ok(Indexed {
                index: *n,
                record: record.clone(),
            }),
            None => resolve_id(records, &n.to_string()),
        },
        RecordSelector::Id(id) => resolve_id(records, id),
    }
}

fn resolve_id<R: Record>(records: &[R], wanted: &str) -> Result<Indexed<R>> {
    let noun = R::COLLECTION.noun();
    if let Some(pos) = records.iter().position(|r| r.id().as_str() == wanted) {
        return Ok(Indexed {
            index: pos + 1,
            record: records[pos].clone(),
        });
    }

    let mut matches = records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.id().as_str().starts_with(wanted));
    match (matches.next(), matches.next()) {
        (Some((pos, record)), None) => Ok(Indexed {
            index: pos + 1,
            record: record.clone(),
        }),
        (Some(_), Some(_)) => Err(DeskError::Api(format!(
            "{} id prefix {} is ambiguous",
            noun, wanted
        ))),
        (None, _) => Err(DeskError::NotFound(format!("{} {}", noun, wanted))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Client, RecordId};
    use crate::store::memory::fixtures::client_draft;

    fn clients(ids: &[&str]) -> Vec<Client> {
        ids.iter()
            .map(|id| Client::from_draft(RecordId::from(*id), client_draft(id, "Co")))
            .collect()
    }

    #[test]
    fn parses_numbers_as_indexes() {
        assert_eq!(
            "3".parse::<RecordSelector>().unwrap(),
            RecordSelector::Index(3)
        );
        assert_eq!(
            "0".parse::<RecordSelector>().unwrap(),
            RecordSelector::Id("0".into())
        );
        assert_eq!(
            "ab12".parse::<RecordSelector>().unwrap(),
            RecordSelector::Id("ab12".into())
        );
        assert!("  ".parse::<RecordSelector>().is_err());
    }

    #[test]
    fn indexes_follow_insertion_order() {
        let indexed = index_records(&clients(&["a", "b"]));
        assert_eq!(indexed[0].index, 1);
        assert_eq!(indexed[1].record.id.as_str(), "b");
        assert_eq!(indexed[1].index, 2);
    }

    #[test]
    fn resolves_index_id_and_prefix() {
        let records = clients(&["abc-1", "abd-2", "1700000000000"]);

        let by_index = resolve(&records, &RecordSelector::Index(2)).unwrap();
        assert_eq!(by_index.record.id.as_str(), "abd-2");

        let by_prefix = resolve(&records, &"abc".parse().unwrap()).unwrap();
        assert_eq!(by_prefix.index, 1);

        let numeric_id = resolve(&records, &"1700000000000".parse().unwrap()).unwrap();
        assert_eq!(numeric_id.index, 3);
    }

    #[test]
    fn ambiguous_and_missing_selectors_fail() {
        let records = clients(&["abc-1", "abd-2"]);
        assert!(matches!(
            resolve(&records, &"ab".parse().unwrap()),
            Err(DeskError::Api(_))
        ));
        assert!(matches!(
            resolve(&records, &RecordSelector::Index(9)),
            Err(DeskError::NotFound(_))
        ));
    }

    #[test]
    fn index_refs_recovers_positions() {
        let records = clients(&["a", "b", "c"]);
        let refs: Vec<&Client> = vec![&records[2], &records[0]];
        let indexed = index_refs(&records, &refs);
        assert_eq!(
            indexed.iter().map(|i| i.index).collect::<Vec<_>>(),
            vec![3, 1]
        );
    }
}
