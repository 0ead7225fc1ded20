#[derive(Debug, thiserror::Error)]
pub enum Error {
    ///
    /// The store could not be reached or timed out.
    /// Entries may or may not exist; callers must not read this
    /// as "key absent".
    ///
    #[error("store unavailable: {0}")]
    Unavailable(#[from] redis::RedisError),
}
