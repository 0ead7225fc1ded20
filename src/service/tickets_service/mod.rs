mod driver_identity_resolver;
mod dto;
mod tickets_service;
mod tickets_service_impl;

pub use driver_identity_resolver::*;
pub use dto::*;
pub use tickets_service::*;
pub use tickets_service_impl::*;
