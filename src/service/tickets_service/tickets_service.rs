use super::DriverIdentityHints;
use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Issues a fresh ticket for `user_id` and stores it with
    /// the configured ttl.
    ///
    /// ### Errors
    /// - [`Error::Store`] when the key-value store is unreachable
    ///
    async fn issue_ticket(&self, user_id: Uuid) -> Result<output::IssuedTicket, Error>;

    ///
    /// Verifies a scanned ticket. Domain rejections (unknown, expired
    /// or already used tickets) are reported inside the returned
    /// [`output::Verification`], not as errors.
    ///
    /// ### Errors
    /// - [`Error::Store`] when the key-value store is unreachable
    /// - [`Error::Database`] when the database is unreachable
    /// - [`Error::MalformedRecord`] when a stored ticket cannot be decoded
    ///
    async fn verify_ticket(
        &self,
        verify: input::VerifyTicket,
        identity: DriverIdentityHints,
    ) -> Result<output::Verification, Error>;
}
