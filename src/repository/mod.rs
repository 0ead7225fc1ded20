mod dto;
mod entity;
mod error;
mod passengers_repository;
mod passengers_repository_impl;
mod users_repository;
mod users_repository_impl;
mod verification_logs_repository;
mod verification_logs_repository_impl;

pub use dto::*;
pub use error::*;
pub use passengers_repository::*;
pub use passengers_repository_impl::*;
pub use users_repository::*;
pub use users_repository_impl::*;
pub use verification_logs_repository::*;
pub use verification_logs_repository_impl::*;
