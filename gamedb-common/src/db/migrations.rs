//! Database schema migrations
//!
//! Versioned, idempotent migrations tracked in the `schema_version`
//! table. Never modify an existing migration; add a new one and bump
//! `CURRENT_SCHEMA_VERSION`.

use crate::Result;
use sqlx::SqlitePool;
use tracing::info;

/// Current schema version. Increment when adding a migration.
const CURRENT_SCHEMA_VERSION: i32 = 2;

/// Get current schema version from the database.
/// Returns 0 for a freshly created database.
async fn get_schema_version(pool: &SqlitePool) -> Result<i32> {
    let version: Option<i32> =
        sqlx::query_scalar("SELECT version FROM schema_version ORDER BY version DESC LIMIT 1")
            .fetch_optional(pool)
            .await?;
    Ok(version.unwrap_or(0))
}

async fn set_schema_version(pool: &SqlitePool, version: i32) -> Result<()> {
    sqlx::query("INSERT OR IGNORE INTO schema_version (version) VALUES (?)")
        .bind(version)
        .execute(pool)
        .await?;
    Ok(())
}

/// Run all pending migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    let current = get_schema_version(pool).await?;

    if current >= CURRENT_SCHEMA_VERSION {
        return Ok(());
    }

    if current < 1 {
        // v1: baseline schema (games table created by init)
        set_schema_version(pool, 1).await?;
        info!("Migration v1: baseline schema recorded");
    }

    if current < 2 {
        migrate_v2_game_search_index(pool).await?;
        set_schema_version(pool, 2).await?;
    }

    Ok(())
}

/// v2: composite index on (name, platform) to accelerate search
async fn migrate_v2_game_search_index(pool: &SqlitePool) -> Result<()> {
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_games_name_platform ON games (name, platform)")
        .execute(pool)
        .await?;
    info!("Migration v2: added composite index on games (name, platform)");
    Ok(())
}
