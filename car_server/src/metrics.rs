//! Prometheus metrics for car service observability.

use std::net::SocketAddr;

use metrics::{counter, histogram};

/// Initialize metrics exporter (Prometheus) listening on `port`.
pub fn init_metrics(port: u16) {
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(SocketAddr::from(([0, 0, 0, 0], port)));
    if let Err(e) = builder.install() {
        tracing::warn!("Failed to install Prometheus exporter: {}", e);
    }
}

/// Record a stored car.
pub fn car_created() {
    counter!("cars_created_total").increment(1);
}

/// Record a client lookup and how long it took.
pub fn client_lookup(outcome: &'static str, duration_ms: u64) {
    counter!("client_lookups_total", "outcome" => outcome).increment(1);
    histogram!("client_lookup_duration_ms").record(duration_ms as f64);
}

/// Record a lookup failure that was tolerated and left a car unenriched.
pub fn enrichment_skipped() {
    counter!("client_enrichment_skipped_total").increment(1);
}
