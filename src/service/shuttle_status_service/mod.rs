mod dto;
mod shuttle_status_service;
mod shuttle_status_service_impl;

pub use dto::*;
pub use shuttle_status_service::*;
pub use shuttle_status_service_impl::*;
