//! Schema migration for the car service tables.

use diesel_async::{AsyncPgConnection, SimpleAsyncConnection};

/// SQL migration for the `cars` table.
///
/// Safe to run on every startup.
pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS cars (
    id              BIGSERIAL PRIMARY KEY,
    client_id       BIGINT,
    brand           TEXT,
    model           TEXT,
    registration    TEXT,
    year            INTEGER
);

ALTER TABLE cars
    ALTER COLUMN brand TYPE TEXT,
    ALTER COLUMN model TYPE TEXT,
    ALTER COLUMN registration TYPE TEXT;

CREATE INDEX IF NOT EXISTS idx_cars_client ON cars (client_id);
"#;

/// Run the car service migration on the given connection.
pub async fn run_migration(conn: &mut AsyncPgConnection) -> anyhow::Result<()> {
    conn.batch_execute(MIGRATION_SQL)
        .await
        .map_err(|e| anyhow::anyhow!("car migration failed: {e}"))?;
    Ok(())
}
