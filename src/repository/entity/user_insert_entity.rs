use bson::Uuid;
use serde::Serialize;

#[derive(Serialize)]
pub struct UserInsertEntity<'a> {
    pub user_id: Uuid,

    pub openid: &'a str,
    pub role: &'a str,
}
