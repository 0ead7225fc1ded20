use super::Coordinates;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShuttleLocation {
    pub shuttle_id: Option<String>,

    pub coords: Coordinates,

    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub heading: f64,
    #[serde(default)]
    pub current_stop_index: u32,
    #[serde(default)]
    pub dist_to_next: f64,
}
