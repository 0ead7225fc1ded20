use std::time::Duration;

///
/// `ticket_ttl` and `dedup_window` are independent knobs;
/// neither is derived from the other.
///
pub struct TicketsServiceConfig {
    pub ticket_ttl: Duration,
    pub dedup_window: Duration,
    pub allow_reuse: bool,
}
