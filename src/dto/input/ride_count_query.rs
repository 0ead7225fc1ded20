use serde::Deserialize;
use time::OffsetDateTime;

#[derive(Debug, Deserialize)]
pub struct RideCountQuery {
    ///
    /// Unix timestamp in seconds.
    /// Missing value means midnight UTC of the current day.
    ///
    #[serde(default, with = "time::serde::timestamp::option")]
    pub since: Option<OffsetDateTime>,
}
