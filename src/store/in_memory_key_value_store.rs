use super::{Error, KeyValueStore};
use axum::async_trait;
use std::{collections::HashMap, time::Duration};
use tokio::{sync::Mutex, time::Instant};

///
/// Store fake with the same visibility and atomicity rules as the
/// redis implementation. Entries expire lazily, on access.
///
/// Built on [tokio::time::Instant] so tests can pause and advance
/// the clock.
///
pub struct InMemoryKeyValueStore {
    entries: Mutex<HashMap<String, Entry>>,
}

struct Entry {
    value: String,
    expires_at: Instant,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), Error> {
        let mut entries = self.entries.lock().await;

        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Instant::now() + ttl,
            },
        );

        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let mut entries = self.entries.lock().await;

        Ok(live_entry(&mut entries, key).map(|entry| entry.value.clone()))
    }

    async fn set_if_absent(&self, key: &str, value: &str, ttl: Duration) -> Result<bool, Error> {
        // single lock across check and insert keeps the operation atomic
        let mut entries = self.entries.lock().await;

        if live_entry(&mut entries, key).is_some() {
            return Ok(false);
        }

        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Instant::now() + ttl,
            },
        );

        Ok(true)
    }
}

fn live_entry<'a>(entries: &'a mut HashMap<String, Entry>, key: &str) -> Option<&'a Entry> {
    let expired = entries
        .get(key)
        .is_some_and(|entry| entry.expires_at <= Instant::now());
    if expired {
        entries.remove(key);
    }

    entries.get(key)
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn put_get_roundtrip() {
        let store = InMemoryKeyValueStore::new();

        store
            .put("some key", "some value", Duration::from_secs(30))
            .await
            .unwrap();

        let value = store.get("some key").await.unwrap();

        assert_eq!(value.as_deref(), Some("some value"));
    }

    #[tokio::test]
    async fn get_absent() {
        let store = InMemoryKeyValueStore::new();

        let value = store.get("key that was never put").await.unwrap();

        assert_eq!(value, None);
    }

    #[tokio::test(start_paused = true)]
    async fn get_after_ttl_elapsed() {
        let store = InMemoryKeyValueStore::new();

        store
            .put("some key", "some value", Duration::from_secs(30))
            .await
            .unwrap();

        tokio::time::advance(Duration::from_secs(31)).await;

        let value = store.get("some key").await.unwrap();

        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn set_if_absent_first_caller_wins() {
        let store = InMemoryKeyValueStore::new();

        let first = store
            .set_if_absent("some key", "1", Duration::from_secs(3))
            .await
            .unwrap();
        let second = store
            .set_if_absent("some key", "2", Duration::from_secs(3))
            .await
            .unwrap();

        assert!(first);
        assert!(!second);

        // loser must not overwrite the winner's value
        let value = store.get("some key").await.unwrap();
        assert_eq!(value.as_deref(), Some("1"));
    }

    #[tokio::test(start_paused = true)]
    async fn set_if_absent_after_ttl_elapsed() {
        let store = InMemoryKeyValueStore::new();

        store
            .set_if_absent("some key", "1", Duration::from_secs(3))
            .await
            .unwrap();

        tokio::time::advance(Duration::from_secs(4)).await;

        let set = store
            .set_if_absent("some key", "2", Duration::from_secs(3))
            .await
            .unwrap();

        assert!(set);
    }

    #[tokio::test(start_paused = true)]
    async fn put_refreshes_ttl() {
        let store = InMemoryKeyValueStore::new();

        store
            .put("some key", "some value", Duration::from_secs(30))
            .await
            .unwrap();

        tokio::time::advance(Duration::from_secs(20)).await;
        store
            .put("some key", "other value", Duration::from_secs(30))
            .await
            .unwrap();

        tokio::time::advance(Duration::from_secs(20)).await;
        let value = store.get("some key").await.unwrap();

        assert_eq!(value.as_deref(), Some("other value"));
    }
}
