//! Zone Repository

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{Zone, ZoneCreate};

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Zone>> {
    let zones = sqlx::query_as::<_, Zone>("SELECT id, name FROM zone ORDER BY name")
        .fetch_all(pool)
        .await?;
    Ok(zones)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Zone>> {
    let zone = sqlx::query_as::<_, Zone>("SELECT id, name FROM zone WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(zone)
}

/// Find a zone by name, case-insensitively.
pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Zone>> {
    let zone = sqlx::query_as::<_, Zone>(
        "SELECT id, name FROM zone WHERE name = ? COLLATE NOCASE LIMIT 1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;
    Ok(zone)
}

pub async fn create(pool: &SqlitePool, data: ZoneCreate) -> RepoResult<Zone> {
    if find_by_name(pool, &data.name).await?.is_some() {
        return Err(RepoError::Conflict(format!(
            "Zone '{}' already exists",
            data.name
        )));
    }

    let result = sqlx::query("INSERT INTO zone (name) VALUES (?)")
        .bind(&data.name)
        .execute(pool)
        .await?;
    let id = result.last_insert_rowid();

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create zone".into()))
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM zone")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
