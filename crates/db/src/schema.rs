use eyre::Result;
use sqlx::{Pool, Sqlite};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Sqlite>) -> Result<()> {
    info!("Initializing database schema...");

    // Create preferences table. The three-column UNIQUE constraint is the
    // store's core invariant: at most one row per (user, date, time).
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS preferences (
            user_name TEXT NOT NULL,
            date_label TEXT NOT NULL,
            time_label TEXT NOT NULL,
            UNIQUE(user_name, date_label, time_label)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_preferences_user_name ON preferences(user_name);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
