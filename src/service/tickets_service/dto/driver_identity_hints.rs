///
/// Identity material a scanning client may or may not send along.
/// Both fields are optional; resolution falls back to the default
/// driver when neither yields an identity.
///
#[derive(Debug, Default)]
pub struct DriverIdentityHints {
    pub openid: Option<String>,
    pub bearer_token: Option<String>,
}
