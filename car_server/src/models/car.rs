//! cars — Car records and their enriched response shape.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::client::Client;
use crate::schema::cars;

/// A car as persisted by the storage layer.
///
/// Has no client field: the resolved client is request-scoped and only
/// ever lives on [`Car`].
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = cars)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CarRecord {
    pub id: i64,
    pub client_id: Option<i64>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub registration: Option<String>,
    pub year: Option<i32>,
}

/// Creation payload. Any `id` or `client` sent by the caller is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Insertable, Deserialize)]
#[diesel(table_name = cars)]
#[serde(rename_all = "camelCase")]
pub struct NewCar {
    pub client_id: Option<i64>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub registration: Option<String>,
    pub year: Option<i32>,
}

/// A car as returned over HTTP, optionally enriched with its owning client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: i64,
    pub client_id: Option<i64>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub registration: Option<String>,
    pub year: Option<i32>,
    pub client: Option<Client>,
}

impl Car {
    /// Attach a resolved client to this car.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }
}

impl From<CarRecord> for Car {
    fn from(record: CarRecord) -> Self {
        Self {
            id: record.id,
            client_id: record.client_id,
            brand: record.brand,
            model: record.model,
            registration: record.registration,
            year: record.year,
            client: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_car_reads_camel_case_and_ignores_id_and_client() {
        let body = r#"{
            "id": 99,
            "clientId": 7,
            "brand": "Renault",
            "model": "Clio",
            "registration": "AB-123-CD",
            "year": 2019,
            "client": {"id": 7, "name": "Alice"}
        }"#;

        let new_car: NewCar = serde_json::from_str(body).unwrap();
        assert_eq!(new_car.client_id, Some(7));
        assert_eq!(new_car.brand.as_deref(), Some("Renault"));
        assert_eq!(new_car.year, Some(2019));
    }

    #[test]
    fn car_without_client_serializes_null_client() {
        let car = Car::from(CarRecord {
            id: 1,
            client_id: None,
            brand: Some("Fiat".into()),
            model: None,
            registration: None,
            year: None,
        });

        let json = serde_json::to_value(&car).unwrap();
        assert_eq!(json["id"], 1);
        assert!(json["clientId"].is_null());
        assert!(json["client"].is_null());
    }
}
