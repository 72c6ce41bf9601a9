use dagger_sdk::{Directory, Query};

use crate::containers;

/// Compile the workspace including `car_server/tests/`, which only build
/// against the `car_service` library target, then build its rustdoc so the
/// public repository and client API traits stay documented.
pub async fn run(client: &Query, source: Directory) -> eyre::Result<String> {
    let output = containers::rust_base(client, source)
        .with_exec(vec!["cargo", "check", "--workspace", "--all-targets"])
        .with_env_variable("RUSTDOCFLAGS", "-D warnings")
        .with_exec(vec!["cargo", "doc", "--no-deps", "--package", "car-service"])
        .stdout()
        .await?;

    Ok(format!("[check] Workspace and car-service docs build.\n{output}"))
}
