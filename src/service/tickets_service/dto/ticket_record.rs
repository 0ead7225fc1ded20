use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

///
/// Value stored in the key-value store under `ticket:{ticketId}`.
/// Lives only as long as the ticket ttl; the store expiring the
/// entry is what expires the ticket.
///
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRecord {
    pub user_id: Uuid,

    #[serde(with = "time::serde::timestamp")]
    pub issued_at: OffsetDateTime,

    pub status: TicketStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    #[serde(rename = "VALID")]
    Valid,
    #[serde(rename = "USED")]
    Used,
}
