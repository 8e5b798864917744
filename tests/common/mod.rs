use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub const CREATE_USERS_TABLE: &str = "CREATE TABLE users ( \
    id INTEGER PRIMARY KEY AUTOINCREMENT, \
    name TEXT NOT NULL, \
    email TEXT NOT NULL, \
    country TEXT NOT NULL \
 )";

/// A single in-memory connection kept alive for the whole test, so every
/// acquire sees the same database.
pub async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("connected to in-memory sqlite")
}

pub async fn pool_with_users_table() -> SqlitePool {
    let pool = memory_pool().await;
    sqlx::query(CREATE_USERS_TABLE)
        .execute(&pool)
        .await
        .expect("created users table");
    pool
}

pub async fn count_users(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .expect("counted users")
}
