mod driver_identity_hints;
mod ticket_record;
mod tickets_service_config;

pub use driver_identity_hints::*;
pub use ticket_record::*;
pub use tickets_service_config::*;
