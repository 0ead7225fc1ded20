use super::{entity::VerificationLogInsertEntity, VerificationLogsRepository};
use crate::repository;
use axum::async_trait;
use bson::{doc, DateTime, Document};
use mongodb::{Database, IndexModel};
use time::OffsetDateTime;
use uuid::Uuid;

const VERIFICATION_LOGS: &str = "verification_logs";
const INDEX_NAME_VERIFIED_AT: &str = "verified_at";

pub struct VerificationLogsRepositoryImpl {
    database: Database,
}

impl VerificationLogsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        tracing::debug!(collection = VERIFICATION_LOGS, "creating collection");
        database.create_collection(VERIFICATION_LOGS).await?;

        let collection = database.collection::<Document>(VERIFICATION_LOGS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_VERIFIED_AT.to_string()) {
            collection
                .create_index(
                    IndexModel::builder()
                        .keys(doc! {
                            "verified_at": 1,
                        })
                        .options(
                            mongodb::options::IndexOptions::builder()
                                .name(INDEX_NAME_VERIFIED_AT.to_string())
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(
                collection = VERIFICATION_LOGS,
                index = INDEX_NAME_VERIFIED_AT,
                "created index"
            );
        }

        Ok(Self { database })
    }
}

#[async_trait]
impl VerificationLogsRepository for VerificationLogsRepositoryImpl {
    async fn insert(
        &self,
        user_id: Uuid,
        driver_id: Uuid,
        shuttle_id: &str,
        verified_at: OffsetDateTime,
    ) -> Result<(), repository::Error> {
        let insert_entity = VerificationLogInsertEntity {
            user_id: user_id.into(),
            driver_id: driver_id.into(),
            shuttle_id,
            verified_at: verified_at.into(),
        };

        self.database
            .collection::<VerificationLogInsertEntity>(VERIFICATION_LOGS)
            .insert_one(insert_entity)
            .await?;

        Ok(())
    }

    async fn count_since(&self, since: OffsetDateTime) -> Result<u64, repository::Error> {
        let count = self
            .database
            .collection::<Document>(VERIFICATION_LOGS)
            .count_documents(doc! {
                "verified_at": { "$gte": DateTime::from(since) },
            })
            .await?;

        Ok(count)
    }
}
