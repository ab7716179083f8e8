//! End-to-end workflows through the test harness.
//!
//! These tests mix library-side seeding with CLI invocations against the
//! same database, the way the browser extension and the command line share
//! one storage area.

mod common;

use common::harness::{TestEnv, TestProfile};
use linknotes::domain::ProfileId;
use linknotes::repository::NoteRepository;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;

#[test]
fn test_full_note_lifecycle() {
    let env = TestEnv::new();
    let url = "https://www.linkedin.com/in/jane-doe/";

    env.cmd()
        .save(url)
        .args(["--name", "Jane Doe", "-m", "Intro via Bob", "-t", "lead"])
        .assert()
        .success();
    env.cmd().args(["tag", url, "follow up"]).assert().success();

    let note: Value = env.cmd().show("jane-doe").format_json().output_json();
    assert_eq!(note["data"]["tags"], serde_json::json!(["lead", "follow-up"]));

    env.cmd()
        .tags()
        .assert()
        .success()
        .stdout("follow-up\nlead\n");

    env.cmd().args(["rm", url]).assert().success();
    env.cmd().args(["count"]).assert().success().stdout("0\n");
    env.cmd().tags().assert().success().stdout(predicate::str::contains("No tags found."));
}

#[test]
fn test_cli_writes_are_visible_to_library() {
    let env = TestEnv::new();
    env.cmd()
        .save("alice")
        .args(["-m", "hello"])
        .assert()
        .success();

    let repo = NoteRepository::new(env.store());
    let note = repo
        .get(&ProfileId::new("alice").unwrap())
        .unwrap()
        .expect("note saved by the CLI");
    assert_eq!(note.notes(), "hello");

    let index = repo.index().unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index.revision(), 1);
}

#[test]
fn test_every_mutation_bumps_index_revision() {
    let env = TestEnv::new();
    env.add_profile(&TestProfile::new("alice").notes("one"));

    env.cmd().save("alice").args(["-m", "two"]).assert().success();
    env.cmd().args(["tag", "alice", "x"]).assert().success();
    env.cmd().args(["rm", "alice"]).assert().success();

    let repo = NoteRepository::new(env.store());
    assert_eq!(repo.index().unwrap().revision(), 4);
}

#[test]
fn test_ls_json_structure() {
    let env = TestEnv::new();
    env.add_profile(
        &TestProfile::new("alice")
            .name("Alice")
            .image("https://media.example/alice.jpg")
            .notes("hi")
            .tag("friend"),
    );

    let output: Value = env.cmd().ls().format_json().output_json();
    let entry = &output["data"][0];
    assert_eq!(entry["profileId"], "alice");
    assert_eq!(entry["profileName"], "Alice");
    assert_eq!(entry["profileImageUrl"], "https://media.example/alice.jpg");
    assert_eq!(entry["tags"], serde_json::json!(["friend"]));
    assert_eq!(entry["preview"], "hi");
    assert!(entry["updatedAt"].is_string());
}
