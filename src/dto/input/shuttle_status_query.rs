use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShuttleStatusQuery {
    pub shuttle_id: Option<String>,
}
