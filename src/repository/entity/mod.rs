mod passenger_profile_find_entity;
mod user_find_entity;
mod user_insert_entity;
mod verification_log_insert_entity;

pub use passenger_profile_find_entity::*;
pub use user_find_entity::*;
pub use user_insert_entity::*;
pub use verification_log_insert_entity::*;
