use std::time::Duration;

pub struct ShuttleStatusServiceConfig {
    /// How long a published position stays readable without updates
    pub status_ttl: Duration,
}
