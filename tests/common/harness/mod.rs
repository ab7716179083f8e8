//! Test harness for CLI integration tests.
//!
//! Provides isolated storage environments, programmatic profile seeding,
//! and CLI assertion helpers using `assert_cmd`.

mod command;
mod env;
mod profile;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::LinknotesCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
#[allow(unused_imports)]
pub use profile::TestProfile;
