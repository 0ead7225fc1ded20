use super::Coordinates;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

///
/// Last known shuttle position. Serialized both to clients
/// and into the key-value store, which only passes it through.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShuttleStatus {
    pub coords: Coordinates,

    pub speed: f64,
    pub heading: f64,
    pub current_stop_index: u32,
    pub dist_to_next: f64,

    #[serde(with = "time::serde::timestamp")]
    pub last_updated: OffsetDateTime,
}
