use dagger_sdk::{Directory, Query};

use crate::containers;

/// Run the car service unit and router tests (in-memory storage, mocked
/// client service).
pub async fn run(client: &Query, source: Directory) -> eyre::Result<String> {
    let output = containers::rust_base(client, source)
        .with_exec(vec!["cargo", "test", "--package", "car-service"])
        .stdout()
        .await?;

    Ok(format!("[test] Car service tests passed.\n{output}"))
}
