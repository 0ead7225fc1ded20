mod passenger_profile;

pub use passenger_profile::*;
