//!
//! All roles used within application
//!

use strum::AsRefStr;

#[derive(AsRefStr)]
pub enum Role {
    #[strum(serialize = "DRIVER")]
    Driver,
    #[strum(serialize = "ADMIN")]
    Admin,
}
