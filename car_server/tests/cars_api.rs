//! End-to-end tests of the car HTTP API against a mocked client service.

mod common;

use axum::http::StatusCode;
use httpmock::prelude::*;
use serde_json::{json, Value};

use std::time::Duration;

use common::{
    car, create_test_router, create_test_router_with_timeout, get_request, post_json_request,
    send_request, send_request_status,
};

async fn mock_client<'a>(server: &'a MockServer, id: i64, name: &str) -> httpmock::Mock<'a> {
    server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/api/clients/{id}"));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"id": id, "name": name, "email": format!("{name}@example.com")}));
        })
        .await
}

async fn failing_client(server: &MockServer, id: i64) -> httpmock::Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/api/clients/{id}"));
            then.status(500);
        })
        .await
}

async fn slow_client(server: &MockServer, id: i64) -> httpmock::Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/api/clients/{id}"));
            then.status(200)
                .delay(Duration::from_secs(2))
                .json_body(json!({"id": id, "name": "late"}));
        })
        .await
}

#[tokio::test]
async fn post_returns_car_with_assigned_id() {
    let clients = MockServer::start_async().await;
    let app = create_test_router(&clients, vec![]).await;

    let body = r#"{"clientId": 4, "brand": "Tesla", "model": "3", "registration": "EV-1", "year": 2023}"#;
    let (status, created): (StatusCode, Value) =
        send_request(app, post_json_request("/api/cars", body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], 1);
    assert_eq!(created["clientId"], 4);
    assert_eq!(created["brand"], "Tesla");
    assert_eq!(created["year"], 2023);
    assert!(created["client"].is_null());
}

#[tokio::test]
async fn list_enriches_owned_cars_only() {
    let clients = MockServer::start_async().await;
    let lookup = mock_client(&clients, 1, "alice").await;
    let app = create_test_router(&clients, vec![car(Some(1), "A"), car(None, "B")]).await;

    let (status, cars): (StatusCode, Vec<Value>) =
        send_request(app, get_request("/api/cars")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cars.len(), 2);
    assert_eq!(cars[0]["client"]["name"], "alice");
    assert_eq!(cars[0]["client"]["email"], "alice@example.com");
    assert!(cars[1]["client"].is_null());
    lookup.assert_hits_async(1).await;
}

#[tokio::test]
async fn list_fails_when_client_service_fails() {
    let clients = MockServer::start_async().await;
    failing_client(&clients, 1).await;
    let app = create_test_router(&clients, vec![car(Some(1), "A")]).await;

    let status = send_request_status(app, get_request("/api/cars")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn by_client_resolves_client_once() {
    let clients = MockServer::start_async().await;
    let lookup = mock_client(&clients, 2, "bob").await;
    let app = create_test_router(
        &clients,
        vec![car(Some(2), "A"), car(Some(3), "B"), car(Some(2), "C")],
    )
    .await;

    let (status, cars): (StatusCode, Vec<Value>) =
        send_request(app, get_request("/api/cars/byClient/2")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cars.len(), 2);
    for c in &cars {
        assert_eq!(c["clientId"], 2);
        assert_eq!(c["client"], cars[0]["client"]);
    }
    lookup.assert_hits_async(1).await;
}

#[tokio::test]
async fn get_unknown_car_is_404() {
    let clients = MockServer::start_async().await;
    let app = create_test_router(&clients, vec![]).await;

    let status = send_request_status(app, get_request("/api/cars/41")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_tolerates_client_service_failure() {
    let clients = MockServer::start_async().await;
    let lookup = failing_client(&clients, 1).await;
    let app = create_test_router(&clients, vec![car(Some(1), "A")]).await;

    let (status, found): (StatusCode, Value) =
        send_request(app, get_request("/api/cars/1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["id"], 1);
    assert_eq!(found["clientId"], 1);
    assert!(found["client"].is_null());
    lookup.assert_hits_async(1).await;
}

#[tokio::test]
async fn get_enriches_car_with_client() {
    let clients = MockServer::start_async().await;
    mock_client(&clients, 1, "carol").await;
    let app = create_test_router(&clients, vec![car(Some(1), "A")]).await;

    let (status, found): (StatusCode, Value) =
        send_request(app, get_request("/api/cars/1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["client"]["id"], 1);
    assert_eq!(found["client"]["name"], "carol");
}

#[tokio::test]
async fn non_numeric_id_is_rejected() {
    let clients = MockServer::start_async().await;
    let app = create_test_router(&clients, vec![]).await;

    let status = send_request_status(app, get_request("/api/cars/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_reports_ok() {
    let clients = MockServer::start_async().await;
    let app = create_test_router(&clients, vec![]).await;

    let (status, body): (StatusCode, Value) = send_request(app, get_request("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn get_returns_car_without_client_when_lookup_times_out() {
    let clients = MockServer::start_async().await;
    slow_client(&clients, 1).await;
    let app = create_test_router_with_timeout(
        &clients,
        vec![car(Some(1), "A")],
        Duration::from_millis(200),
    )
    .await;

    let (status, found): (StatusCode, Value) =
        send_request(app, get_request("/api/cars/1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["clientId"], 1);
    assert!(found["client"].is_null());
}

#[tokio::test]
async fn list_fails_when_lookup_times_out() {
    let clients = MockServer::start_async().await;
    slow_client(&clients, 1).await;
    let app = create_test_router_with_timeout(
        &clients,
        vec![car(Some(1), "A")],
        Duration::from_millis(200),
    )
    .await;

    let status = send_request_status(app, get_request("/api/cars")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn post_accepts_long_registration_unchanged() {
    let clients = MockServer::start_async().await;
    let app = create_test_router(&clients, vec![]).await;
    let registration = "R".repeat(300);

    let body = json!({"registration": registration}).to_string();
    let (status, created): (StatusCode, Value) =
        send_request(app, post_json_request("/api/cars", &body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["registration"], registration.as_str());
}
