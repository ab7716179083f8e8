//! Isolated test environment with a temporary storage database.

use super::{LinknotesCommand, TestProfile};
use linknotes::infra::ManualClock;
use linknotes::repository::{NoteRepository, SaveOutcome};
use linknotes::store::{KeyValueStore, SqliteStore};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary storage database.
///
/// The temp directory holds the database and an export directory and is
/// removed on drop.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Returns the temp directory root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the storage database.
    pub fn db_path(&self) -> PathBuf {
        self.root.join("storage.db")
    }

    /// Returns the directory exports are written to (created on demand).
    pub fn export_dir(&self) -> PathBuf {
        let dir = self.root.join("exports");
        std::fs::create_dir_all(&dir).expect("Failed to create export dir");
        dir
    }

    /// Opens a store on the environment's database.
    pub fn store(&self) -> SqliteStore {
        SqliteStore::open(&self.db_path()).expect("Failed to open store")
    }

    /// Saves a profile note through the library, stamped at the profile's
    /// save time.
    pub fn add_profile(&self, profile: &TestProfile) {
        let repo = NoteRepository::with_clock(self.store(), ManualClock::new(profile.saved_at()));
        let outcome = repo.save(profile.to_note()).expect("Failed to save profile");
        assert!(
            matches!(outcome, SaveOutcome::Saved(_)),
            "seeded profile should carry notes or tags"
        );
    }

    /// Deletes a note record behind the index's back.
    pub fn remove_record(&self, id: &str) {
        self.store()
            .remove(&format!("note:{}", id))
            .expect("Failed to remove record");
    }

    /// Creates a LinknotesCommand configured for this test environment.
    pub fn cmd(&self) -> LinknotesCommand {
        LinknotesCommand::new().db(&self.db_path())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linknotes::domain::ProfileId;

    // ===========================================
    // TestEnv Foundation
    // ===========================================

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.root().is_dir());
        assert!(env.db_path().starts_with(env.root()));
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--db");
        assert_eq!(args[1], env.db_path().to_string_lossy());
    }

    // ===========================================
    // Profile Seeding
    // ===========================================

    #[test]
    fn test_env_add_profile_is_readable() {
        let env = TestEnv::new();
        env.add_profile(&TestProfile::new("alice").name("Alice").notes("hello").tag("friend"));

        let repo = NoteRepository::new(env.store());
        let note = repo
            .get(&ProfileId::new("alice").unwrap())
            .unwrap()
            .expect("note should exist");
        assert_eq!(note.profile_name(), "Alice");
        assert_eq!(note.notes(), "hello");
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_env_remove_record_leaves_index_entry() {
        let env = TestEnv::new();
        env.add_profile(&TestProfile::new("alice").notes("hello"));
        env.remove_record("alice");

        let repo = NoteRepository::new(env.store());
        assert!(repo.get(&ProfileId::new("alice").unwrap()).unwrap().is_none());
        assert_eq!(repo.count().unwrap(), 1);
    }
}
