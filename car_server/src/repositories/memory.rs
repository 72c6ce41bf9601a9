//! In-process car storage, used when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CarRepository, StorageError};
use crate::models::car::{CarRecord, NewCar};

#[derive(Default)]
struct Inner {
    last_id: i64,
    cars: BTreeMap<i64, CarRecord>,
}

/// Keeps cars in an ordered map; ids start at 1.
#[derive(Default)]
pub struct InMemoryCarRepository {
    inner: RwLock<Inner>,
}

impl InMemoryCarRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn save(&self, car: NewCar) -> Result<CarRecord, StorageError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let record = CarRecord {
            id: inner.last_id,
            client_id: car.client_id,
            brand: car.brand,
            model: car.model,
            registration: car.registration,
            year: car.year,
        };
        inner.cars.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_all(&self) -> Result<Vec<CarRecord>, StorageError> {
        Ok(self.inner.read().await.cars.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CarRecord>, StorageError> {
        Ok(self.inner.read().await.cars.get(&id).cloned())
    }

    async fn find_by_client_id(&self, client_id: i64) -> Result<Vec<CarRecord>, StorageError> {
        Ok(self
            .inner
            .read()
            .await
            .cars
            .values()
            .filter(|car| car.client_id == Some(client_id))
            .cloned()
            .collect())
    }
}
