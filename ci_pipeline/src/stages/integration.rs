use dagger_sdk::{Directory, Query};

use crate::containers;

/// Run the car service against a fresh PostgreSQL database.
/// Flow: repository tests -> start server -> create car -> read it back -> 404 check
pub async fn run(client: &Query, source: Directory) -> eyre::Result<String> {
    let pg = containers::postgres(client);
    let db_url = "postgres://cars:cars_password@db:5432/cars_test";

    let smoke_script = r#"
set -euo pipefail

BINARY="./target/release/car-service"

echo "=== Integration Test: Car API ==="

echo "[1/4] Starting car-service..."
CAR_PORT=8082 METRICS_PORT=9100 CLIENT_SERVICE_URL=http://127.0.0.1:1 $BINARY &
PID=$!
trap 'kill $PID' EXIT
for i in $(seq 1 30); do curl -sf http://127.0.0.1:8082/health && break; sleep 1; done

echo "[2/4] Creating car without client..."
CREATED=$(curl -sf -X POST http://127.0.0.1:8082/api/cars \
    -H 'Content-Type: application/json' \
    -d '{"brand":"Skoda","model":"Octavia","registration":"IT-001","year":2018}')
echo "$CREATED"
ID=$(echo "$CREATED" | sed -E 's/.*"id":([0-9]+).*/\1/')

echo "[3/4] Reading car $ID back..."
curl -sf "http://127.0.0.1:8082/api/cars/$ID"

echo "[4/4] Checking unknown id returns 404..."
STATUS=$(curl -s -o /dev/null -w '%{http_code}' http://127.0.0.1:8082/api/cars/999999999)
test "$STATUS" = "404"

echo ""
echo "=== Integration Test Complete ==="
"#;

    let output = containers::rust_base(client, source)
        .with_service_binding("db", pg)
        .with_env_variable("DATABASE_URL", db_url)
        .with_env_variable("RUST_LOG", "info")
        .with_exec(vec![
            "sh", "-c",
            "for i in $(seq 1 30); do pg_isready -h db -p 5432 -U cars && break; sleep 1; done",
        ])
        .with_exec(vec![
            "cargo", "test", "--package", "car-service", "--test", "pg_repository",
        ])
        .with_exec(vec![
            "cargo", "build", "--release", "--package", "car-service",
        ])
        .with_exec(vec!["bash", "-c", smoke_script])
        .stdout()
        .await?;

    Ok(format!("[integration] {output}"))
}
