mod ride_stats_service;
mod ride_stats_service_impl;

pub use ride_stats_service::*;
pub use ride_stats_service_impl::*;
