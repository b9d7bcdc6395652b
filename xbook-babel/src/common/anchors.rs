//! Book-wide anchor table.
//!
//! Maps a section's source element id to the readable slug of its heading.
//! Collected per chapter, then merged once for the whole book before any
//! chapter is transcoded.

use serde::Serialize;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnchorMap {
    entries: BTreeMap<String, String>,
}

impl AnchorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `id → slug` unless `id` is already known. Returns whether the
    /// entry was added.
    pub fn insert(&mut self, id: impl Into<String>, slug: impl Into<String>) -> bool {
        match self.entries.entry(id.into()) {
            Entry::Vacant(vacant) => {
                vacant.insert(slug.into());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Merges `other` into this map. Ids already present keep their slug.
    pub fn merge(&mut self, other: AnchorMap) {
        for (id, slug) in other.entries {
            if !self.insert(id.clone(), slug) {
                log::debug!("anchor id '{id}' defined more than once, keeping the first");
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(id, slug)| (id.as_str(), slug.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnchorMap {
    /// Builds a map with first-wins semantics for repeated ids.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AnchorMap::new();
        for (id, slug) in iter {
            map.insert(id, slug);
        }
        map
    }
}
