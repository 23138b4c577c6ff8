use reading_tracker::mutations::{add_member, check_in_on};
use reading_tracker::storage::{load_store, spawn_saver, write_store};
use reading_tracker::{AppState, Store};
use std::sync::Arc;

fn seed() -> Vec<String> {
    vec!["Alice".to_string(), "Bob".to_string()]
}

#[tokio::test]
async fn missing_file_loads_seed_members() {
    let dir = tempfile::tempdir().unwrap();
    let store = load_store(&dir.path().join("state.json"), &seed()).await;
    assert_eq!(store.members, ["Alice", "Bob"]);
    assert!(store.entries.is_empty());
}

#[tokio::test]
async fn corrupt_file_loads_seed_members() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    std::fs::write(&path, b"{ not json").unwrap();
    assert_eq!(load_store(&path, &seed()).await, Store::with_members(seed()));

    std::fs::write(&path, br#"{ "members": "Alice", "records": {} }"#).unwrap();
    assert_eq!(load_store(&path, &seed()).await, Store::with_members(seed()));
}

#[tokio::test]
async fn written_store_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("state.json");

    let store = Store::with_members(["Ann"]);
    let store = add_member(&store, "Ben").unwrap();
    let store = check_in_on(&store, "2024-05-01", "Ben", 4).unwrap();
    write_store(&path, &store).await.unwrap();

    let raw: serde_json::Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(raw["records"]["2024-05-01"]["Ben"], 4);
    assert_eq!(load_store(&path, &seed()).await, store);
}

#[tokio::test]
async fn saver_flushes_latest_store_on_drop() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let initial = Arc::new(Store::with_members(["Ann"]));
    let (saver, writer) = spawn_saver(path.clone(), Arc::clone(&initial));

    let first = Arc::new(check_in_on(&initial, "2024-05-01", "Ann", 1).unwrap());
    let second = Arc::new(check_in_on(&first, "2024-05-01", "Ann", 6).unwrap());
    saver.save(first);
    saver.save(Arc::clone(&second));
    drop(saver);
    writer.await.unwrap();

    assert_eq!(load_store(&path, &seed()).await, *second);
}

#[tokio::test]
async fn write_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    // a directory where the file should be
    let path = dir.path().join("state.json");
    std::fs::create_dir(&path).unwrap();

    let err = write_store(&path, &Store::default()).await.unwrap_err();
    assert!(!err.message.is_empty());
}

#[tokio::test]
async fn failed_save_keeps_in_memory_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::create_dir(&path).unwrap();

    let initial = Arc::new(Store::with_members(["A"]));
    let (saver, writer) = spawn_saver(path.clone(), Arc::clone(&initial));
    let state = AppState::new(initial, saver);

    let applied = state
        .apply(|store| check_in_on(store, "2024-05-01", "A", 3))
        .await
        .unwrap();
    assert_eq!(applied.chapters_on("2024-05-01", "A"), Some(3));
    assert_eq!(state.snapshot().await.chapters_on("2024-05-01", "A"), Some(3));

    drop(state);
    writer.await.unwrap();
    assert!(path.is_dir());
}
