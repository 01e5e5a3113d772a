pub mod repositories;

/// In-memory SQLite pool with the schema applied, for tests in this crate
/// and downstream ones.
pub async fn create_test_pool() -> crate::DbPool {
    // One connection so every query sees the same in-memory database.
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");

    // Initialize test schema
    crate::schema::initialize_database(&pool)
        .await
        .expect("Failed to initialize test database schema");

    pool
}
