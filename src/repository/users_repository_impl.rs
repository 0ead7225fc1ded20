use super::{
    entity::{UserFindEntity, UserInsertEntity},
    Error, UsersRepository,
};
use crate::repository;
use axum::async_trait;
use bson::{doc, Document};
use mongodb::{
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Database, IndexModel,
};
use uuid::Uuid;

const USERS: &str = "users";
const INDEX_NAME_UNIQUE_OPENID: &str = "unique_openid";

pub struct UsersRepositoryImpl {
    database: Database,
}

impl UsersRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        tracing::debug!(collection = USERS, "creating collection");
        database.create_collection(USERS).await?;

        let collection = database.collection::<Document>(USERS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_UNIQUE_OPENID.to_string()) {
            collection
                .create_index(
                    IndexModel::builder()
                        .keys(doc! {
                            "openid": 1,
                        })
                        .options(
                            IndexOptions::builder()
                                .name(INDEX_NAME_UNIQUE_OPENID.to_string())
                                .unique(true)
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(
                collection = USERS,
                index = INDEX_NAME_UNIQUE_OPENID,
                "created index"
            );
        }

        Ok(Self { database })
    }
}

#[async_trait]
impl UsersRepository for UsersRepositoryImpl {
    async fn find_id_by_openid(&self, openid: &str) -> Result<Option<Uuid>, repository::Error> {
        let entity = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find_one(doc! {
                "openid": openid,
            })
            .await?;

        Ok(entity.map(|entity| entity.user_id.into()))
    }

    async fn insert(
        &self,
        user_id: Uuid,
        openid: &str,
        role: &str,
    ) -> Result<(), repository::Error> {
        let insert_entity = UserInsertEntity {
            user_id: user_id.into(),
            openid,
            role,
        };

        self.database
            .collection::<UserInsertEntity>(USERS)
            .insert_one(insert_entity)
            .await
            .map_err(|err| {
                let ErrorKind::Write(ref write_failure) = *err.kind else {
                    return Error::Mongo(err);
                };

                let WriteFailure::WriteError(write_error) = write_failure else {
                    return Error::Mongo(err);
                };

                const DUPLICATE_KEY_CODE: i32 = 11000;
                match write_error.code == DUPLICATE_KEY_CODE {
                    true => Error::InsertUniqueViolation,
                    false => Error::Mongo(err),
                }
            })?;

        Ok(())
    }
}
