use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyTicket {
    pub ticket_id: String,

    ///
    /// Optional hint identifying the scanning driver.
    /// The scanner may run without an authenticated session,
    /// so verification never requires it.
    ///
    pub driver_openid: Option<String>,

    pub shuttle_id: Option<String>,
}
