//! Document Recovery Tests
//!
//! Persisted documents are hand-edited and written by older releases.
//! Absent, blank or corrupt documents must load as empty and be rewritten;
//! legacy shapes must decode.

use std::fs;
use std::path::Path;

use contest_vote::model::VoteContext;
use contest_vote::store::{Artists, GrandFinal, LocalBackend, Store, Users};
use serde_json::{json, Value};
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn store_in(dir: &Path) -> Store {
    Store::new(LocalBackend::new(dir.to_path_buf()))
}

fn read_json(path: &Path) -> Value {
    serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
}

// =============================================================================
// Repair
// =============================================================================

#[test]
fn test_absent_documents_created_on_load() {
    let temp = TempDir::new().unwrap();
    let store = store_in(temp.path());

    store.ensure_documents().unwrap();

    assert_eq!(read_json(&temp.path().join("artists.json")), json!([]));
    assert_eq!(read_json(&temp.path().join("users.json")), json!({}));
    assert_eq!(read_json(&temp.path().join("votes.json")), json!({}));
    assert_eq!(read_json(&temp.path().join("grand_votes.json")), json!({}));
    assert_eq!(read_json(&temp.path().join("grand_final.json")), json!([]));
}

#[test]
fn test_corrupt_document_reset_and_rewritten() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("votes.json");
    fs::write(&path, "{\"ann\": {\"1\": ").unwrap();

    let store = store_in(temp.path());
    assert!(store.votes(VoteContext::Semi).unwrap().is_empty());
    assert_eq!(read_json(&path), json!({}));
}

#[test]
fn test_blank_document_treated_as_absent() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("users.json"), "  \n").unwrap();

    let store = store_in(temp.path());
    assert!(store.get::<Users>().unwrap().is_empty());
}

#[test]
fn test_wrong_container_resets() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("artists.json");
    fs::write(&path, r#"{"not": "a list"}"#).unwrap();

    let store = store_in(temp.path());
    assert!(store.get::<Artists>().unwrap().is_empty());
    assert_eq!(read_json(&path), json!([]));
}

// =============================================================================
// Valid JSON with odd records
// =============================================================================

#[test]
fn test_odd_artist_field_keeps_every_artist() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("artists.json");
    let original = r#"[
        {"id": 1, "name": "First", "semi_final": 1, "performance_order": 1},
        {"id": 2, "name": "Second", "semi_final": 1, "performance_order": 2.5}
    ]"#;
    fs::write(&path, original).unwrap();

    let artists = store_in(temp.path()).get::<Artists>().unwrap();

    assert_eq!(artists.len(), 2);
    assert_eq!(artists[1].name, "Second");
    assert_eq!(artists[1].performance_order, Some(2));

    // Nothing is rewritten on a successful load
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_unreadable_vote_key_keeps_other_votes() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("votes.json"),
        r#"{"ann": {"1": {"score": 8, "final": true}}, "bob": {"None": {"score": 3}}}"#,
    )
    .unwrap();

    let book = store_in(temp.path()).votes(VoteContext::Semi).unwrap();

    assert_eq!(book["ann"][&1].score(), Some(8.0));
    assert!(book["ann"][&1].advances());
    assert!(book["bob"].is_empty());
}

#[test]
fn test_unreadable_user_keeps_other_users() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("users.json"),
        r#"{"ann": {"pw": "hash-a", "admin": false}, "bob": 7}"#,
    )
    .unwrap();

    let users = store_in(temp.path()).get::<Users>().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users["ann"].password_hash, "hash-a");
}

// =============================================================================
// Legacy shapes
// =============================================================================

#[test]
fn test_legacy_user_records_decode() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("users.json"),
        r#"{"ann": "old-hash", "bob": {"pw": "new-hash", "admin": true}}"#,
    )
    .unwrap();

    let users = store_in(temp.path()).get::<Users>().unwrap();
    assert_eq!(users["ann"].password_hash, "old-hash");
    assert!(!users["ann"].admin);
    assert!(users["bob"].admin);
}

#[test]
fn test_seed_artists_normalized() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("artists.json"),
        r#"[{"name": "First", "semi": 1}, {"id": 9, "name": "Second", "semi_final": 2}]"#,
    )
    .unwrap();

    let artists = store_in(temp.path()).get::<Artists>().unwrap();
    assert_eq!(artists[0].id, 1);
    assert_eq!(artists[0].semi_final, 1);
    assert_eq!(artists[0].performance_order, Some(1));
    assert_eq!(artists[1].id, 9);
    assert_eq!(artists[1].performance_order, Some(2));
}

#[test]
fn test_mixed_roster_forms_decode_and_rewrite_as_objects() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("grand_final.json"),
        r#"[1, "2", {"id": 3, "name": "Override"}, "junk"]"#,
    )
    .unwrap();

    let store = store_in(temp.path());
    let roster = store.get::<GrandFinal>().unwrap();
    let ids: Vec<_> = roster.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    store.put::<GrandFinal>(&roster).unwrap();
    let written = read_json(&temp.path().join("grand_final.json"));
    assert_eq!(written[0], json!({"id": 1, "official_final": true}));
    assert_eq!(written[2]["name"], "Override");
}
