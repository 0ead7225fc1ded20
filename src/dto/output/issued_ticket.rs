use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedTicket {
    pub ticket_id: String,

    /// Seconds until the ticket expires and the store forgets it
    pub expires_in: u64,
}
