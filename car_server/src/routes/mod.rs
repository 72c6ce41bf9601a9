//! Car service HTTP routes.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;

use crate::models::car::{Car, NewCar};
use crate::services::car_service::{CarError, CarService};

/// Shared state for car route handlers.
#[derive(Clone)]
pub struct AppState {
    pub cars: Arc<CarService>,
}

/// Build the car service's Axum router.
pub fn car_router(state: AppState) -> Router {
    Router::new()
        .route("/api/cars", get(list_cars).post(create_car))
        .route("/api/cars/byClient/{client_id}", get(list_cars_by_client))
        .route("/api/cars/{id}", get(get_car))
        .route("/health", get(health))
        .with_state(state)
}

fn error_status(e: &CarError) -> StatusCode {
    match e {
        CarError::NotFound(_) => StatusCode::NOT_FOUND,
        CarError::Storage(_) | CarError::ClientLookup { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// ── Car API ──

async fn create_car(
    State(state): State<AppState>,
    Json(new_car): Json<NewCar>,
) -> Result<Json<Car>, StatusCode> {
    state.cars.create(new_car).await.map(Json).map_err(|e| {
        tracing::error!("Create car error: {e}");
        error_status(&e)
    })
}

async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<Car>>, StatusCode> {
    state.cars.list_all().await.map(Json).map_err(|e| {
        tracing::error!("List cars error: {e}");
        error_status(&e)
    })
}

async fn list_cars_by_client(
    State(state): State<AppState>,
    Path(client_id): Path<i64>,
) -> Result<Json<Vec<Car>>, StatusCode> {
    state
        .cars
        .list_by_client(client_id)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!(client_id, "List cars by client error: {e}");
            error_status(&e)
        })
}

async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Car>, StatusCode> {
    state.cars.get_by_id(id).await.map(Json).map_err(|e| {
        match &e {
            CarError::NotFound(_) => tracing::debug!("{e}"),
            _ => tracing::error!(car_id = id, "Get car error: {e}"),
        }
        error_status(&e)
    })
}

// ── Health ──

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
