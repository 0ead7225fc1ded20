use super::Error;
use axum::async_trait;
use std::time::Duration;

///
/// Time-to-live bearing key-value store. Shared by tickets,
/// their dedup markers and the shuttle status feed.
///
/// Entries vanish on their own once their ttl elapses; expired
/// and never-written keys are indistinguishable to callers.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), Error>;

    async fn get(&self, key: &str) -> Result<Option<String>, Error>;

    ///
    /// Atomic test-and-set, the store's only synchronization
    /// primitive. Concurrent callers racing on the same key get
    /// exactly one `true`.
    ///
    /// ### Returns
    /// false when the key already existed; the stored entry is
    /// left untouched
    ///
    async fn set_if_absent(&self, key: &str, value: &str, ttl: Duration) -> Result<bool, Error>;
}
