//! PostgreSQL car storage via diesel-async.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::pooled_connection::deadpool::{Object, Pool};
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use super::{CarRepository, StorageError};
use crate::models::car::{CarRecord, NewCar};
use crate::schema::cars;

pub type DieselPool = Pool<AsyncPgConnection>;

/// Build a connection pool for `database_url`.
pub fn build_pool(database_url: &str, max_connections: usize) -> anyhow::Result<DieselPool> {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
    Pool::builder(manager)
        .max_size(max_connections)
        .build()
        .map_err(|e| anyhow::anyhow!("diesel pool: {e}"))
}

pub struct PgCarRepository {
    pool: DieselPool,
}

impl PgCarRepository {
    pub fn new(pool: DieselPool) -> Self {
        Self { pool }
    }

    async fn conn(&self) -> Result<Object<AsyncPgConnection>, StorageError> {
        self.pool
            .get()
            .await
            .map_err(|e| StorageError::Pool(e.to_string()))
    }
}

#[async_trait]
impl CarRepository for PgCarRepository {
    async fn save(&self, car: NewCar) -> Result<CarRecord, StorageError> {
        let mut conn = self.conn().await?;
        let record = diesel::insert_into(cars::table)
            .values(&car)
            .returning(CarRecord::as_returning())
            .get_result(&mut *conn)
            .await?;

        tracing::debug!(car_id = record.id, "Car row inserted");
        Ok(record)
    }

    async fn find_all(&self) -> Result<Vec<CarRecord>, StorageError> {
        let mut conn = self.conn().await?;
        let results = cars::table
            .select(CarRecord::as_select())
            .order(cars::id.asc())
            .load(&mut *conn)
            .await?;
        Ok(results)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CarRecord>, StorageError> {
        let mut conn = self.conn().await?;
        let result = cars::table
            .find(id)
            .select(CarRecord::as_select())
            .first(&mut *conn)
            .await
            .optional()?;
        Ok(result)
    }

    async fn find_by_client_id(&self, client_id: i64) -> Result<Vec<CarRecord>, StorageError> {
        let mut conn = self.conn().await?;
        let results = cars::table
            .filter(cars::client_id.eq(client_id))
            .select(CarRecord::as_select())
            .order(cars::id.asc())
            .load(&mut *conn)
            .await?;
        Ok(results)
    }
}
