//! Database operations for the Waypoint `PostgreSQL` store.
//!
//! # Tables
//!
//! - `users` - One row per tracked user, keyed by `user_id`
//! - `user_locations` - Append-only location pings owned by a user; the
//!   serial `id` preserves append order
//!
//! There is no versioned migration tooling; the schema is small enough that
//! [`ensure_schema`] applies it idempotently at startup.

pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A required input field is blank or not a usable value. Detected before
    /// any store interaction.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Database error from sqlx. Connection and timeout failures surface here
    /// unchanged; callers may treat them as transient and retry.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Schema DDL applied at startup. Every statement is idempotent.
const SCHEMA_DDL: &str = r"
CREATE TABLE IF NOT EXISTS users (
    user_id     UUID PRIMARY KEY,
    email       TEXT NOT NULL,
    first_name  TEXT NOT NULL,
    second_name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS user_locations (
    id          BIGSERIAL PRIMARY KEY,
    user_id     UUID NOT NULL REFERENCES users (user_id) ON DELETE CASCADE,
    latitude    DOUBLE PRECISION NOT NULL,
    longitude   DOUBLE PRECISION NOT NULL,
    recorded_at TIMESTAMP NOT NULL
);

CREATE INDEX IF NOT EXISTS user_locations_user_recorded_idx
    ON user_locations (user_id, recorded_at);
";

/// Apply the schema if it is not already present.
///
/// # Errors
///
/// Returns `sqlx::Error` if a DDL statement fails.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA_DDL).execute(pool).await?;
    Ok(())
}
