use crate::repository;
use axum::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

///
/// Append-only audit trail of successful verifications.
/// Records are never updated or deleted.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VerificationLogsRepository: Send + Sync {
    async fn insert(
        &self,
        user_id: Uuid,
        driver_id: Uuid,
        shuttle_id: &str,
        verified_at: OffsetDateTime,
    ) -> Result<(), repository::Error>;

    ///
    /// Counts records with verified_at at or after `since`.
    ///
    async fn count_since(&self, since: OffsetDateTime) -> Result<u64, repository::Error>;
}
