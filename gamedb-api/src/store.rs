//! Catalog store: queries over the `games` table
//!
//! Every function takes the pool explicitly; there is no process-wide
//! store handle. `id` values are assigned by SQLite on insert and never
//! accepted from callers.

use chrono::{SecondsFormat, Utc};
use gamedb_common::db::{Game, GamePayload};
use gamedb_common::{Error, Result};
use sqlx::SqlitePool;

const GAME_COLUMNS: &str = "id, publisher_id, name, platform, store_id, \
                            bundle_id, app_version, is_published, created_at, updated_at";

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn validate(payload: &GamePayload) -> Result<()> {
    let missing = payload.missing_fields();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(format!(
            "missing required fields: {}",
            missing.join(", ")
        )))
    }
}

/// All games, ordered by id
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Game>> {
    let games = sqlx::query_as::<_, Game>(&format!(
        "SELECT {} FROM games ORDER BY id",
        GAME_COLUMNS
    ))
    .fetch_all(pool)
    .await?;
    Ok(games)
}

/// Single game by id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Game> {
    sqlx::query_as::<_, Game>(&format!(
        "SELECT {} FROM games WHERE id = ?",
        GAME_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| Error::NotFound(format!("game {}", id)))
}

/// Insert one game, returning the created record with its assigned id
pub async fn create(pool: &SqlitePool, payload: &GamePayload) -> Result<Game> {
    validate(payload)?;

    let ts = now();
    let id = sqlx::query(
        "INSERT INTO games \
         (publisher_id, name, platform, store_id, bundle_id, app_version, is_published, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&payload.publisher_id)
    .bind(&payload.name)
    .bind(&payload.platform)
    .bind(&payload.store_id)
    .bind(&payload.bundle_id)
    .bind(&payload.app_version)
    .bind(payload.is_published)
    .bind(&ts)
    .bind(&ts)
    .execute(pool)
    .await?
    .last_insert_rowid();

    find_by_id(pool, id).await
}

/// Replace the mutable fields of an existing game. `created_at` is
/// preserved; `updated_at` is refreshed.
pub async fn update(pool: &SqlitePool, id: i64, payload: &GamePayload) -> Result<Game> {
    validate(payload)?;

    let result = sqlx::query(
        "UPDATE games SET publisher_id = ?, name = ?, platform = ?, store_id = ?, \
         bundle_id = ?, app_version = ?, is_published = ?, updated_at = ? \
         WHERE id = ?",
    )
    .bind(&payload.publisher_id)
    .bind(&payload.name)
    .bind(&payload.platform)
    .bind(&payload.store_id)
    .bind(&payload.bundle_id)
    .bind(&payload.app_version)
    .bind(payload.is_published)
    .bind(now())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("game {}", id)));
    }

    find_by_id(pool, id).await
}

/// Hard delete. Deleting a missing id is always an error, never a
/// silent success.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM games WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("game {}", id)));
    }
    Ok(())
}

/// Case-insensitive substring search over name and/or platform.
///
/// Both predicates supplied means both must match (logical AND);
/// neither means list everything. SQLite LIKE is case-insensitive for
/// ASCII, matching the contract here.
pub async fn search(
    pool: &SqlitePool,
    name: Option<&str>,
    platform: Option<&str>,
) -> Result<Vec<Game>> {
    let games = match (name, platform) {
        (None, None) => return list_all(pool).await,
        (Some(name), None) => {
            sqlx::query_as::<_, Game>(&format!(
                "SELECT {} FROM games WHERE name LIKE '%' || ? || '%' ORDER BY id",
                GAME_COLUMNS
            ))
            .bind(name)
            .fetch_all(pool)
            .await?
        }
        (None, Some(platform)) => {
            sqlx::query_as::<_, Game>(&format!(
                "SELECT {} FROM games WHERE platform LIKE '%' || ? || '%' ORDER BY id",
                GAME_COLUMNS
            ))
            .bind(platform)
            .fetch_all(pool)
            .await?
        }
        (Some(name), Some(platform)) => {
            sqlx::query_as::<_, Game>(&format!(
                "SELECT {} FROM games \
                 WHERE name LIKE '%' || ? || '%' AND platform LIKE '%' || ? || '%' \
                 ORDER BY id",
                GAME_COLUMNS
            ))
            .bind(name)
            .bind(platform)
            .fetch_all(pool)
            .await?
        }
    };
    Ok(games)
}

/// Insert a batch of games, returning the created records in input order.
///
/// All-or-nothing: every payload is validated before any insert, and a
/// validation failure names each invalid entry by index. Valid batches
/// insert inside a single transaction.
pub async fn bulk_create(pool: &SqlitePool, payloads: &[GamePayload]) -> Result<Vec<Game>> {
    let invalid: Vec<String> = payloads
        .iter()
        .enumerate()
        .filter_map(|(index, payload)| {
            let missing = payload.missing_fields();
            if missing.is_empty() {
                None
            } else {
                Some(format!("entry {} missing {}", index, missing.join(", ")))
            }
        })
        .collect();
    if !invalid.is_empty() {
        return Err(Error::Validation(invalid.join("; ")));
    }

    let ts = now();
    let mut tx = pool.begin().await?;
    let mut ids = Vec::with_capacity(payloads.len());
    for payload in payloads {
        let id = sqlx::query(
            "INSERT INTO games \
             (publisher_id, name, platform, store_id, bundle_id, app_version, is_published, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&payload.publisher_id)
        .bind(&payload.name)
        .bind(&payload.platform)
        .bind(&payload.store_id)
        .bind(&payload.bundle_id)
        .bind(&payload.app_version)
        .bind(payload.is_published)
        .bind(&ts)
        .bind(&ts)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();
        ids.push(id);
    }
    tx.commit().await?;

    let mut games = Vec::with_capacity(ids.len());
    for id in ids {
        games.push(find_by_id(pool, id).await?);
    }
    Ok(games)
}
