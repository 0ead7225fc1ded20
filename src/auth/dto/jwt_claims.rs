use serde::Deserialize;
use uuid::Uuid;

///
/// Claims issued by the companion app's login endpoint.
///
#[derive(Deserialize)]
pub struct JwtClaims {
    pub sub: Uuid,
    #[allow(dead_code)]
    pub exp: i64,
    pub role: String,
}
