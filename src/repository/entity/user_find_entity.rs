use bson::Uuid;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct UserFindEntity {
    pub user_id: Uuid,
}
