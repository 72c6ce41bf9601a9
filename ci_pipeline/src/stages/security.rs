use dagger_sdk::{Directory, Query};

use crate::containers;

/// Audit the dependency tree for RustSec advisories and report duplicated
/// crates pulled in by the axum, diesel-async and reqwest stacks.
pub async fn run(client: &Query, source: Directory) -> eyre::Result<String> {
    let output = containers::rust_base(client, source)
        .with_exec(vec!["cargo", "install", "cargo-audit"])
        .with_exec(vec!["cargo", "audit", "--deny", "warnings"])
        .with_exec(vec!["cargo", "tree", "--package", "car-service", "--duplicates", "--edges", "normal"])
        .stdout()
        .await?;

    Ok(format!("[security] No advisories found; duplicate crates listed below.\n{output}"))
}
