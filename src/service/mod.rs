pub mod ride_stats_service;
pub mod shuttle_status_service;
pub mod tickets_service;
