use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShuttleStatusService: Send + Sync {
    ///
    /// Stores the shuttle's latest position. Overwrites any previous
    /// one and restarts the status ttl.
    ///
    /// ### Errors
    /// - [`Error::Store`] when the key-value store is unreachable
    ///
    async fn publish_location(&self, location: input::ShuttleLocation) -> Result<(), Error>;

    ///
    /// ### Returns
    /// None when the shuttle has not reported within the status ttl
    ///
    /// ### Errors
    /// - [`Error::Store`] when the key-value store is unreachable
    /// - [`Error::MalformedRecord`] when a stored status cannot be decoded
    ///
    async fn get_status(
        &self,
        shuttle_id: Option<String>,
    ) -> Result<Option<output::ShuttleStatus>, Error>;
}
