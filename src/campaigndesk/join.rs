//! Loose client matching.
//!
//! Campaigns and content items name their client in free text. A record belongs
//! to a client when that text equals the client's name or company, ignoring
//! case. Nothing enforces this link: unmatched names are legal and simply fall
//! out of every client rollup. All reporting goes through [`ClientJoin`], so a
//! stricter relationship can replace it in one place.

use crate::model::{Campaign, Client, ContentItem, Snapshot};

pub struct ClientJoin {
    name: String,
    company: String,
}

impl ClientJoin {
    pub fn new(client: &Client) -> Self {
        Self {
            name: client.name.to_lowercase(),
            company: client.company.to_lowercase(),
        }
    }

    /// An empty reference never matches, even a client with an empty company.
    fn matches(&self, reference: &str) -> bool {
        if reference.is_empty() {
            return false;
        }
        let reference = reference.to_lowercase();
        reference == self.name || reference == self.company
    }

    pub fn campaigns<'s>(&'s self, snapshot: &'s Snapshot) -> impl Iterator<Item = &'s Campaign> {
        snapshot
            .campaigns
            .iter()
            .filter(move |c| self.matches(&c.client_name))
    }

    pub fn content<'s>(&'s self, snapshot: &'s Snapshot) -> impl Iterator<Item = &'s ContentItem> {
        snapshot
            .content_calendar
            .iter()
            .filter(move |i| i.client_name.as_deref().is_some_and(|n| self.matches(n)))
    }
}
