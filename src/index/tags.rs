//! Tag registry derived from the index on demand.

use super::entry::NotesIndex;
use crate::domain::Tag;
use std::collections::{BTreeMap, BTreeSet};

/// A tag with the number of indexed profiles carrying it.
#[derive(Debug, Clone, PartialEq)]
pub struct TagWithCount {
    tag: Tag,
    count: u32,
}

impl TagWithCount {
    pub fn new(tag: Tag, count: u32) -> Self {
        Self { tag, count }
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Returns every distinct tag in the index, sorted ascending.
pub fn list_all_tags(index: &NotesIndex) -> Vec<Tag> {
    index
        .profiles()
        .iter()
        .flat_map(|e| e.tags().iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Returns every distinct tag with its usage count, sorted by tag.
pub fn tag_counts(index: &NotesIndex) -> Vec<TagWithCount> {
    let mut counts: BTreeMap<Tag, u32> = BTreeMap::new();
    for tag in index.profiles().iter().flat_map(|e| e.tags()) {
        *counts.entry(tag.clone()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(tag, count)| TagWithCount::new(tag, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProfileId, ProfileNote, ProfileSnapshot};
    use crate::index::IndexEntry;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn index_with(tag_sets: &[&[&str]]) -> NotesIndex {
        let mut index = NotesIndex::default();
        for (i, tags) in tag_sets.iter().enumerate() {
            let snap = ProfileSnapshot::from_id(ProfileId::new(&format!("p{}", i)).unwrap());
            let note = ProfileNote::builder(&snap, Utc::now())
                .tags(tags.iter().map(|t| Tag::new(t).unwrap()).collect())
                .build();
            index.upsert(IndexEntry::from_note(&note));
        }
        index
    }

    fn names(tags: &[Tag]) -> Vec<&str> {
        tags.iter().map(Tag::as_str).collect()
    }

    #[test]
    fn union_is_sorted_and_deduplicated() {
        let index = index_with(&[&["b", "a"], &["c", "b"]]);
        assert_eq!(names(&list_all_tags(&index)), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_index_has_no_tags() {
        assert!(list_all_tags(&NotesIndex::default()).is_empty());
    }

    #[test]
    fn counts_tag_usage() {
        let index = index_with(&[&["a", "b"], &["b", "c"], &["b"]]);
        let counts: Vec<_> = tag_counts(&index)
            .iter()
            .map(|t| (t.tag().to_string(), t.count()))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("a".to_string(), 1),
                ("b".to_string(), 3),
                ("c".to_string(), 1)
            ]
        );
    }
}
