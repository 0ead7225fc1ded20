mod issued_ticket;
mod ride_count;
mod shuttle_status;
mod verification;

pub use issued_ticket::*;
pub use ride_count::*;
pub use shuttle_status::*;
pub use verification::*;

pub use super::inoutput::Coordinates;
