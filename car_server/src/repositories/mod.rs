//! Car storage — the capability set every persistence backend provides.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::models::car::{CarRecord, NewCar};

pub use memory::InMemoryCarRepository;
pub use postgres::PgCarRepository;

/// Storage failures, whatever the backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("connection pool error: {0}")]
    Pool(String),
}

/// Persists and retrieves car records.
///
/// Identity is assigned once by [`CarRepository::save`] and never changes.
#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn save(&self, car: NewCar) -> Result<CarRecord, StorageError>;

    /// All cars, ordered by id.
    async fn find_all(&self) -> Result<Vec<CarRecord>, StorageError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<CarRecord>, StorageError>;

    /// Cars owned by `client_id`, ordered by id.
    async fn find_by_client_id(&self, client_id: i64) -> Result<Vec<CarRecord>, StorageError>;
}
