use super::RideStatsService;
use crate::{dto::output, error::Error, repository::VerificationLogsRepository};
use axum::async_trait;
use std::sync::Arc;
use time::{OffsetDateTime, Time};

pub struct RideStatsServiceImpl {
    verification_logs_repository: Arc<dyn VerificationLogsRepository>,
}

impl RideStatsServiceImpl {
    pub fn new(verification_logs_repository: Arc<dyn VerificationLogsRepository>) -> Self {
        Self {
            verification_logs_repository,
        }
    }
}

#[async_trait]
impl RideStatsService for RideStatsServiceImpl {
    async fn count_rides_since(
        &self,
        since: Option<OffsetDateTime>,
    ) -> Result<output::RideCount, Error> {
        let since =
            since.unwrap_or_else(|| OffsetDateTime::now_utc().replace_time(Time::MIDNIGHT));

        let count = self.verification_logs_repository.count_since(since).await?;

        Ok(output::RideCount { count })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repository::MockVerificationLogsRepository;
    use time::macros::datetime;

    #[tokio::test]
    async fn explicit_since_passed_through() {
        let since = datetime!(2024-06-01 08:30 UTC);
        let mut verification_logs_repository = MockVerificationLogsRepository::new();
        verification_logs_repository
            .expect_count_since()
            .withf(move |count_since| *count_since == since)
            .returning(|_| Ok(42));
        let service = RideStatsServiceImpl::new(Arc::new(verification_logs_repository));

        let ride_count = service.count_rides_since(Some(since)).await.unwrap();

        assert_eq!(ride_count.count, 42);
    }

    #[tokio::test]
    async fn default_since_is_start_of_current_day() {
        let mut verification_logs_repository = MockVerificationLogsRepository::new();
        verification_logs_repository
            .expect_count_since()
            .withf(|since| {
                *since == OffsetDateTime::now_utc().replace_time(Time::MIDNIGHT)
            })
            .returning(|_| Ok(0));
        let service = RideStatsServiceImpl::new(Arc::new(verification_logs_repository));

        service.count_rides_since(None).await.unwrap();
    }
}
