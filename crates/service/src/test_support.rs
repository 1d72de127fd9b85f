#![cfg(test)]
use chrono::Utc;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    MIGRATED
        .get_or_init(|| async {
            let db = models::db::connect().await.expect("connect db for migration");
            migration::Migrator::up(&db, None).await.expect("migrate up");
            drop(db);
        })
        .await;

    // Fresh connection for the current test's runtime
    let db = models::db::connect().await?;
    Ok(db)
}

/// Digits-only string unique enough for one test run.
pub fn unique_digits(len: u32) -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default() as u128;
    format!("{:0width$}", nanos % 10u128.pow(len), width = len as usize)
}

/// A plate in the legacy `ABC1234` format, derived from the clock.
pub fn unique_placa() -> String {
    let n = Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
    let letters: String = (0..3)
        .map(|i| char::from(b'A' + ((n >> (i * 5)) % 26) as u8))
        .collect();
    format!("{}{:04}", letters, n % 10_000)
}
