//! Shared helpers for car service integration tests.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use httpmock::MockServer;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use car_service::models::car::NewCar;
use car_service::repositories::{CarRepository, InMemoryCarRepository};
use car_service::routes::{car_router, AppState};
use car_service::services::car_service::CarService;
use car_service::services::client_api::HttpClientApi;

/// Router backed by an in-memory repository seeded with `cars`, resolving
/// clients against `clients`.
pub async fn create_test_router(clients: &MockServer, cars: Vec<NewCar>) -> Router {
    create_test_router_with_timeout(clients, cars, Duration::from_secs(2)).await
}

/// Same as [`create_test_router`] with an explicit client lookup timeout.
pub async fn create_test_router_with_timeout(
    clients: &MockServer,
    cars: Vec<NewCar>,
    lookup_timeout: Duration,
) -> Router {
    let repo = Arc::new(InMemoryCarRepository::new());
    for car in cars {
        repo.save(car).await.unwrap();
    }

    let api = HttpClientApi::new(clients.base_url(), lookup_timeout).unwrap();
    car_router(AppState {
        cars: Arc::new(CarService::new(repo, Arc::new(api))),
    })
}

pub fn car(client_id: Option<i64>, registration: &str) -> NewCar {
    NewCar {
        client_id,
        brand: Some("Peugeot".to_string()),
        model: Some("208".to_string()),
        registration: Some(registration.to_string()),
        year: Some(2021),
    }
}

/// Helper to make GET requests.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Helper to make POST requests with JSON body.
pub fn post_json_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Sends request and parses the JSON response body.
pub async fn send_request<T: DeserializeOwned>(app: Router, req: Request<Body>) -> (StatusCode, T) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let parsed: T = serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!(
            "Failed to parse response body: {e}; body: {}",
            String::from_utf8_lossy(&body)
        )
    });
    (status, parsed)
}

/// Sends request and returns only the status.
pub async fn send_request_status(app: Router, req: Request<Body>) -> StatusCode {
    app.oneshot(req).await.unwrap().status()
}
