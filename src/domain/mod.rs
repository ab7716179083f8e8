//! Core types: ProfileId, Tag, ProfileNote, ProfileSnapshot

mod note;
mod profile_id;
mod tag;

pub use note::{ProfileNote, ProfileNoteBuilder, ProfileSnapshot};
pub use profile_id::{ParseProfileIdError, ProfileId, extract_profile_id};
pub use tag::{ParseTagError, Tag};
