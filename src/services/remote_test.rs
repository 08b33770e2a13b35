use super::*;
use crate::services::persistence::LOCAL_KEY;
use crate::storage::MemoryStorage;
use crate::storage::test_helpers::FailingStorage;

fn note(id: u64) -> Note {
    Note {
        id,
        x: 0.0,
        y: 0.0,
        w: 200.0,
        h: 150.0,
        z: i64::try_from(id).unwrap(),
        color: "#fff59d".into(),
        content: String::new(),
        title: None,
    }
}

fn instant_remote(storage: Arc<dyn Storage>) -> MockRemote {
    MockRemote::new(storage, DelayRange::ZERO, DelayRange::ZERO)
}

#[tokio::test]
async fn save_then_load_round_trips() {
    let remote = instant_remote(Arc::new(MemoryStorage::new()));
    let notes = vec![note(1), note(2)];
    remote.save(&notes).await.unwrap();
    assert_eq!(remote.load().await.unwrap(), notes);
}

#[tokio::test]
async fn load_without_save_is_empty() {
    let remote = instant_remote(Arc::new(MemoryStorage::new()));
    assert!(remote.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn load_malformed_is_empty() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set(SERVER_KEY, "[{").unwrap();
    let remote = instant_remote(storage);
    assert!(remote.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn save_uses_server_key_not_local_key() {
    let storage = Arc::new(MemoryStorage::new());
    instant_remote(storage.clone()).save(&[note(1)]).await.unwrap();
    assert!(storage.get(SERVER_KEY).unwrap().is_some());
    assert!(storage.get(LOCAL_KEY).unwrap().is_none());
}

#[tokio::test]
async fn failing_storage_surfaces_errors() {
    let remote = instant_remote(Arc::new(FailingStorage));
    assert!(matches!(remote.save(&[note(1)]).await, Err(RemoteError::Storage(_))));
    assert!(matches!(remote.load().await, Err(RemoteError::Storage(_))));
}

#[tokio::test(start_paused = true)]
async fn save_waits_for_simulated_latency() {
    let remote = MockRemote::new(
        Arc::new(MemoryStorage::new()),
        DelayRange { min_ms: 500, max_ms: 1100 },
        DelayRange::ZERO,
    );
    let started = tokio::time::Instant::now();
    remote.save(&[note(1)]).await.unwrap();
    let elapsed = started.elapsed();
    assert!(elapsed >= std::time::Duration::from_millis(500));
    assert!(elapsed <= std::time::Duration::from_millis(1200));
}
