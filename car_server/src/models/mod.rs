//! Car service data models.

pub mod car;
pub mod client;
