//!
//! Module with all dtos that are passed between server and clients
//!

mod inoutput;

pub mod input;
pub mod output;
