use super::{entity::PassengerProfileFindEntity, PassengerProfile, PassengersRepository};
use crate::repository;
use axum::async_trait;
use bson::doc;
use mongodb::Database;
use uuid::Uuid;

const PASSENGERS: &str = "passengers";

pub struct PassengersRepositoryImpl {
    database: Database,
}

impl PassengersRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        tracing::debug!(collection = PASSENGERS, "creating collection");
        database.create_collection(PASSENGERS).await?;

        Ok(Self { database })
    }
}

#[async_trait]
impl PassengersRepository for PassengersRepositoryImpl {
    async fn find_profile(
        &self,
        user_id: Uuid,
    ) -> Result<Option<PassengerProfile>, repository::Error> {
        let entity = self
            .database
            .collection::<PassengerProfileFindEntity>(PASSENGERS)
            .find_one(doc! {
                "user_id": bson::Uuid::from(user_id),
            })
            .await?;

        Ok(entity.map(PassengerProfile::from))
    }
}
