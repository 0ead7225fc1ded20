use super::PassengerProfile;
use crate::repository;
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PassengersRepository: Send + Sync {
    ///
    /// Finds the passenger's display profile.
    /// Profiles are maintained by another system; None is a
    /// normal outcome.
    ///
    async fn find_profile(
        &self,
        user_id: Uuid,
    ) -> Result<Option<PassengerProfile>, repository::Error>;
}
