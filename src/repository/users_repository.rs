use crate::repository;
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn find_id_by_openid(&self, openid: &str) -> Result<Option<Uuid>, repository::Error>;

    ///
    /// Inserts new user.
    ///
    /// ### Errors
    /// - [repository::Error::InsertUniqueViolation] when openid
    ///   is already taken
    ///
    async fn insert(
        &self,
        user_id: Uuid,
        openid: &str,
        role: &str,
    ) -> Result<(), repository::Error>;
}
