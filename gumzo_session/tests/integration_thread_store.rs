//! Integration tests for the SQLite thread store.
//!
//! These tests verify that:
//! - Unknown users look up as absent rather than failing
//! - `store` round-trips and overwrites
//! - `store_if_absent` keeps the first thread id
//! - Records survive reopening the database file
//! - Unusable database files are reported as errors

use gumzo_core::{ThreadId, ThreadStore};
use gumzo_session::SqliteThreadStore;
use tempfile::TempDir;

async fn open_store(dir: &TempDir) -> SqliteThreadStore {
    SqliteThreadStore::open(dir.path().join("threads.db"))
        .await
        .expect("open store")
}

#[tokio::test]
async fn test_lookup_unknown_user_is_none() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    let found = store.lookup("255700000000").await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_store_then_lookup_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;
    let thread = ThreadId::from("thread_255700000000_1700000000");

    store.store("255700000000", &thread).await.unwrap();

    assert_eq!(store.lookup("255700000000").await.unwrap(), Some(thread));
}

#[tokio::test]
async fn test_store_overwrites_previous_association() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    store.store("u1", &ThreadId::from("thread_u1_1")).await.unwrap();
    store.store("u1", &ThreadId::from("thread_u1_2")).await.unwrap();

    assert_eq!(
        store.lookup("u1").await.unwrap(),
        Some(ThreadId::from("thread_u1_2"))
    );
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_store_if_absent_keeps_first_thread() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    let first = store
        .store_if_absent("u1", &ThreadId::from("thread_u1_1"))
        .await
        .unwrap();
    let second = store
        .store_if_absent("u1", &ThreadId::from("thread_u1_2"))
        .await
        .unwrap();

    assert_eq!(first, ThreadId::from("thread_u1_1"));
    assert_eq!(second, ThreadId::from("thread_u1_1"));
    assert_eq!(
        store.lookup("u1").await.unwrap(),
        Some(ThreadId::from("thread_u1_1"))
    );
}

#[tokio::test]
async fn test_list_returns_records_sorted_by_user() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    store.store("b", &ThreadId::from("thread_b_2")).await.unwrap();
    store.store("a", &ThreadId::from("thread_a_1")).await.unwrap();

    let records = store.list().await.unwrap();
    let users: Vec<&str> = records.iter().map(|r| r.user_id.as_str()).collect();
    assert_eq!(users, vec!["a", "b"]);
    assert_eq!(records[0].thread_id, ThreadId::from("thread_a_1"));
}

#[tokio::test]
async fn test_records_persist_across_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let store = open_store(&dir).await;
        store
            .store("255700000000", &ThreadId::from("thread_255700000000_5"))
            .await
            .unwrap();
    }

    let reopened = open_store(&dir).await;
    assert_eq!(
        reopened.lookup("255700000000").await.unwrap(),
        Some(ThreadId::from("thread_255700000000_5"))
    );
}

#[tokio::test]
async fn test_open_fails_for_unreachable_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("nested").join("threads.db");

    assert!(SqliteThreadStore::open(path).await.is_err());
}

#[tokio::test]
async fn test_open_fails_for_corrupted_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("threads.db");
    std::fs::write(&path, "this is not a sqlite database\n".repeat(64)).unwrap();

    assert!(SqliteThreadStore::open(&path).await.is_err());
}

#[tokio::test]
async fn test_open_rejects_url_characters_in_path() {
    let dir = TempDir::new().unwrap();

    for name in ["a?mode=ro.db", "a#b.db", "a%20b.db"] {
        let err = SqliteThreadStore::open(dir.path().join(name))
            .await
            .err()
            .unwrap();
        assert!(err.to_string().contains("not supported"), "{err}");
        assert!(!dir.path().join(name).exists());
    }
}

#[tokio::test]
async fn test_open_existing_does_not_create_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("threads.db");

    assert!(SqliteThreadStore::open_existing(&path).await.is_err());
    assert!(!path.exists());
}

#[tokio::test]
async fn test_open_existing_reads_created_store() {
    let dir = TempDir::new().unwrap();
    open_store(&dir)
        .await
        .store("u1", &ThreadId::from("thread_u1_1"))
        .await
        .unwrap();

    let store = SqliteThreadStore::open_existing(dir.path().join("threads.db"))
        .await
        .unwrap();
    assert_eq!(
        store.lookup("u1").await.unwrap(),
        Some(ThreadId::from("thread_u1_1"))
    );
}
