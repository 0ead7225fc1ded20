mod error;
mod key_value_store;
mod redis_key_value_store;

pub use error::*;
pub use key_value_store::*;
pub use redis_key_value_store::*;

#[cfg(test)]
mod in_memory_key_value_store;
#[cfg(test)]
pub use in_memory_key_value_store::*;
