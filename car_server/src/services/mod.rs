//! Car service business logic and outbound integrations.

pub mod car_service;
pub mod client_api;
