//! Car service — stores car records and enriches them with client data
//! fetched from the client service.

pub mod config;
pub mod metrics;
pub mod migrations;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod schema;
pub mod services;
