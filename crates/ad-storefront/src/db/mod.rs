//! Database access layer for PostgreSQL.
//!
//! Each sub-module provides typed query functions over a `PgPool`.

pub mod cars;
pub mod chats;
pub mod contacts;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Schema migrations, applied in order. Each is idempotent.
const MIGRATIONS: &[(&str, &str)] = &[
    ("001_cars", include_str!("../../migrations/001_cars.sql")),
    ("002_chats", include_str!("../../migrations/002_chats.sql")),
    (
        "003_contact_requests",
        include_str!("../../migrations/003_contact_requests.sql"),
    ),
];

/// Connect to PostgreSQL and run migrations.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    for &(name, sql) in MIGRATIONS {
        tracing::info!(migration = name, "applying migration");
        sqlx::raw_sql(sql).execute(&pool).await?;
    }
    tracing::info!(count = MIGRATIONS.len(), "migrations complete");

    Ok(pool)
}
