use super::DriverIdentityHints;
use crate::{
    auth::{JwtClaims, Role},
    error::Error,
    repository::{self, UsersRepository},
};
use axum::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use std::sync::Arc;
use uuid::Uuid;

///
/// Resolves which driver performed a scan. Strategies are tried in
/// order; the first one producing an identity wins. When none does,
/// a shared default driver account is used (and created on first use).
///
pub struct DriverIdentityResolver {
    sources: Vec<Box<dyn DriverIdentitySource>>,
    fallback: DefaultDriverSource,
}

impl DriverIdentityResolver {
    pub fn new(
        users_repository: Arc<dyn UsersRepository>,
        jwt_key: DecodingKey,
        jwt_algorithms: Vec<Algorithm>,
        default_driver_openid: String,
    ) -> Self {
        Self {
            sources: vec![
                Box::new(OpenidHintSource {
                    users_repository: users_repository.clone(),
                }),
                Box::new(BearerTokenSource {
                    jwt_key,
                    jwt_algorithms,
                }),
            ],
            fallback: DefaultDriverSource {
                users_repository,
                default_driver_openid,
            },
        }
    }

    ///
    /// ### Errors
    /// - [`Error::Database`] when any strategy fails to reach the database
    ///
    pub async fn resolve(&self, hints: &DriverIdentityHints) -> Result<Uuid, Error> {
        for source in &self.sources {
            if let Some(driver_id) = source.resolve(hints).await? {
                return Ok(driver_id);
            }
        }

        self.fallback.resolve().await
    }
}

#[async_trait]
trait DriverIdentitySource: Send + Sync {
    async fn resolve(&self, hints: &DriverIdentityHints) -> Result<Option<Uuid>, Error>;
}

///
/// Looks the driver up by the openid sent in the request body.
/// An unknown openid is not an error; resolution just moves on.
///
struct OpenidHintSource {
    users_repository: Arc<dyn UsersRepository>,
}

#[async_trait]
impl DriverIdentitySource for OpenidHintSource {
    async fn resolve(&self, hints: &DriverIdentityHints) -> Result<Option<Uuid>, Error> {
        let Some(openid) = &hints.openid else {
            return Ok(None);
        };

        let driver_id = self.users_repository.find_id_by_openid(openid).await?;

        Ok(driver_id)
    }
}

///
/// Takes the driver id from the `sub` claim of a bearer token.
/// Tokens that fail validation are ignored rather than rejected;
/// the request itself does not require authorization.
///
struct BearerTokenSource {
    jwt_key: DecodingKey,
    jwt_algorithms: Vec<Algorithm>,
}

#[async_trait]
impl DriverIdentitySource for BearerTokenSource {
    async fn resolve(&self, hints: &DriverIdentityHints) -> Result<Option<Uuid>, Error> {
        let Some(token) = &hints.bearer_token else {
            return Ok(None);
        };

        let mut validation = Validation::default();
        validation.algorithms = self.jwt_algorithms.clone();

        match jsonwebtoken::decode::<JwtClaims>(token, &self.jwt_key, &validation) {
            Ok(token_data) => Ok(Some(token_data.claims.sub)),
            Err(err) => {
                tracing::debug!(err = %err, "ignoring invalid bearer token");
                Ok(None)
            }
        }
    }
}

struct DefaultDriverSource {
    users_repository: Arc<dyn UsersRepository>,
    default_driver_openid: String,
}

impl DefaultDriverSource {
    async fn resolve(&self) -> Result<Uuid, Error> {
        let driver_id = self
            .users_repository
            .find_id_by_openid(&self.default_driver_openid)
            .await?;
        if let Some(driver_id) = driver_id {
            return Ok(driver_id);
        }

        let driver_id = Uuid::new_v4();
        match self
            .users_repository
            .insert(driver_id, &self.default_driver_openid, Role::Driver.as_ref())
            .await
        {
            Ok(()) => Ok(driver_id),
            // another request provisioned the account first
            Err(repository::Error::InsertUniqueViolation) => {
                let driver_id = self
                    .users_repository
                    .find_id_by_openid(&self.default_driver_openid)
                    .await?
                    .ok_or(repository::Error::InsertUniqueViolation)?;

                Ok(driver_id)
            }
            Err(err) => Err(err.into()),
        }
    }
}
