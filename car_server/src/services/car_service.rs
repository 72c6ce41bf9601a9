//! Car CRUD and client enrichment.
//!
//! `list_all` and `list_by_client` fail the request when a client lookup
//! fails; `get_by_id` tolerates the failure and returns the car unenriched.

use std::sync::Arc;
use std::time::Instant;

use crate::models::car::{Car, NewCar};
use crate::models::client::Client;
use crate::repositories::{CarRepository, StorageError};
use crate::services::client_api::{ClientApi, ClientApiError};

#[derive(Debug, thiserror::Error)]
pub enum CarError {
    #[error("car not found with id: {0}")]
    NotFound(i64),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("client lookup failed for client {client_id}: {source}")]
    ClientLookup {
        client_id: i64,
        #[source]
        source: ClientApiError,
    },
}

pub struct CarService {
    repo: Arc<dyn CarRepository>,
    clients: Arc<dyn ClientApi>,
}

impl CarService {
    pub fn new(repo: Arc<dyn CarRepository>, clients: Arc<dyn ClientApi>) -> Self {
        Self { repo, clients }
    }

    /// Store a new car as given. No enrichment.
    pub async fn create(&self, new_car: NewCar) -> Result<Car, CarError> {
        let record = self.repo.save(new_car).await?;

        crate::metrics::car_created();
        tracing::info!(car_id = record.id, client_id = ?record.client_id, "Car created");

        Ok(Car::from(record))
    }

    /// Every car, each enriched with its owning client when it has one.
    pub async fn list_all(&self) -> Result<Vec<Car>, CarError> {
        let records = self.repo.find_all().await?;

        let mut result = Vec::with_capacity(records.len());
        for record in records {
            let car = Car::from(record);
            match car.client_id {
                Some(client_id) => {
                    let client = self.lookup_client(client_id).await?;
                    result.push(car.with_client(client));
                }
                None => result.push(car),
            }
        }

        Ok(result)
    }

    /// Cars owned by `client_id`, all carrying the same resolved client.
    pub async fn list_by_client(&self, client_id: i64) -> Result<Vec<Car>, CarError> {
        let records = self.repo.find_by_client_id(client_id).await?;
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let client = self.lookup_client(client_id).await?;

        Ok(records
            .into_iter()
            .map(|record| Car::from(record).with_client(client.clone()))
            .collect())
    }

    /// A single car, enriched on a best-effort basis.
    pub async fn get_by_id(&self, id: i64) -> Result<Car, CarError> {
        let car = self
            .repo
            .find_by_id(id)
            .await?
            .map(Car::from)
            .ok_or(CarError::NotFound(id))?;

        let Some(client_id) = car.client_id else {
            tracing::debug!(car_id = id, "Car has no client, skipping lookup");
            return Ok(car);
        };

        match self.lookup_client(client_id).await {
            Ok(client) => Ok(car.with_client(client)),
            Err(e) => {
                crate::metrics::enrichment_skipped();
                tracing::warn!(
                    car_id = id,
                    client_id,
                    "Client lookup failed, returning car without client: {e}"
                );
                Ok(car)
            }
        }
    }

    async fn lookup_client(&self, client_id: i64) -> Result<Client, CarError> {
        let start = Instant::now();
        let result = self.clients.find_client_by_id(client_id).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(client) => {
                crate::metrics::client_lookup("success", elapsed_ms);
                Ok(client)
            }
            Err(source) => {
                crate::metrics::client_lookup("failure", elapsed_ms);
                Err(CarError::ClientLookup { client_id, source })
            }
        }
    }
}
