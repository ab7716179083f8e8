//! Clock, atomic file writes

mod clock;
mod fs;

pub use clock::{Clock, ManualClock, SystemClock};
pub use fs::{FsError, write_atomic};
