use dagger_sdk::{Directory, Query};

use crate::containers;

/// Static gates: rustfmt over every member, clippy over every target, and a
/// stricter clippy pass over the service's non-test code, where handlers and
/// repositories propagate errors instead of panicking.
pub async fn run(client: &Query, source: Directory) -> eyre::Result<String> {
    let output = containers::rust_base(client, source)
        .with_exec(vec!["cargo", "fmt", "--all", "--check"])
        .with_exec(vec![
            "cargo", "clippy", "--workspace", "--all-targets",
            "--", "-D", "clippy::correctness", "-W", "clippy::all",
        ])
        .with_exec(vec![
            "cargo", "clippy", "--package", "car-service", "--lib", "--bins",
            "--", "-D", "clippy::unwrap_used", "-D", "clippy::expect_used",
        ])
        .stdout()
        .await?;

    Ok(format!("[lint] fmt and clippy clean; no unwrap/expect in car-service.\n{output}"))
}
