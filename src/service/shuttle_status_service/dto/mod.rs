mod shuttle_status_service_config;

pub use shuttle_status_service_config::*;
