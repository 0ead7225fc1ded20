mod dto;
mod jwt_authorization_validator;
mod role;
pub mod util;

pub use dto::{JwtClaims, User};
pub use jwt_authorization_validator::JwtAuthorizationValidator;
pub use role::Role;

use crate::error::Error;

///
/// Validates that user has at least one of the roles.
///
/// ### Errors
/// - [Error::MissingRole] when none of the roles matches
///
pub fn require_any_role(user: &User, roles: &[Role]) -> Result<(), Error> {
    let authorized = roles.iter().any(|role| user.role == role.as_ref());

    match authorized {
        true => Ok(()),
        false => Err(Error::MissingRole),
    }
}
