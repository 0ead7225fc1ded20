use bson::{DateTime, Uuid};
use serde::Serialize;

#[derive(Serialize)]
pub struct VerificationLogInsertEntity<'a> {
    pub user_id: Uuid,
    pub driver_id: Uuid,

    pub shuttle_id: &'a str,

    pub verified_at: DateTime,
}
