mod ride_count_query;
mod shuttle_location;
mod shuttle_status_query;
mod verify_ticket;

pub use ride_count_query::*;
pub use shuttle_location::*;
pub use shuttle_status_query::*;
pub use verify_ticket::*;

pub use super::inoutput::Coordinates;
