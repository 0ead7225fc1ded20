use crate::{dto::output, error::Error};
use axum::async_trait;
use time::OffsetDateTime;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RideStatsService: Send + Sync {
    ///
    /// Counts verified rides since `since`, defaulting to
    /// midnight UTC of the current day.
    ///
    /// ### Errors
    /// - [`Error::Database`] when the database is unreachable
    ///
    async fn count_rides_since(
        &self,
        since: Option<OffsetDateTime>,
    ) -> Result<output::RideCount, Error>;
}
