//! The notes index: a denormalized, recency-sorted summary of every saved note.

mod entry;
mod maintainer;
mod query;
mod tags;

pub use entry::{IndexEntry, NotesIndex, PREVIEW_CHARS, make_preview};
pub use maintainer::{INDEX_KEY, IndexMaintainer};
pub use query::EntryQuery;
pub use tags::{TagWithCount, list_all_tags, tag_counts};
