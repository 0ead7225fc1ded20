use serde::Deserialize;

#[derive(Deserialize)]
pub struct PassengerProfileFindEntity {
    pub name: String,
    pub company: Option<String>,
    pub position: Option<String>,
}
