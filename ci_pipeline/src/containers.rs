use dagger_sdk::{Container, Directory, Query, Service};

/// Rust build container with cargo caches and psql tooling.
pub fn rust_base(client: &Query, source: Directory) -> Container {
    client
        .container()
        .from("rust:1.85-bookworm")
        .with_exec(vec!["apt-get", "update"])
        .with_exec(vec![
            "apt-get", "install", "-y",
            "pkg-config", "build-essential", "postgresql-client", "curl",
        ])
        .with_exec(vec!["rustup", "component", "add", "clippy", "rustfmt"])
        .with_mounted_cache(
            "/usr/local/cargo/registry",
            client.cache_volume("cargo-registry"),
        )
        .with_mounted_cache(
            "/usr/local/cargo/git",
            client.cache_volume("cargo-git"),
        )
        .with_mounted_cache(
            "/app/target",
            client.cache_volume("cargo-target"),
        )
        .with_workdir("/app")
        .with_directory("/app", source)
        .with_env_variable("CARGO_TARGET_DIR", "/app/target")
        .with_env_variable("RUST_BACKTRACE", "1")
}

/// PostgreSQL service backing the car repository tests.
pub fn postgres(client: &Query) -> Service {
    client
        .container()
        .from("postgres:17-alpine")
        .with_env_variable("POSTGRES_DB", "cars_test")
        .with_env_variable("POSTGRES_USER", "cars")
        .with_env_variable("POSTGRES_PASSWORD", "cars_password")
        .with_exposed_port(5432)
        .as_service()
}
