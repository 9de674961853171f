//! Dining Table Repository

use std::collections::HashMap;

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{DiningTable, DiningTableCreate, DiningTableUpdate, Feature};

const COLUMNS: &str = "id, name, capacity, zone_id, position_x, position_y, occupied";

/// Find all dining tables (including occupied), ascending by id.
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<DiningTable>> {
    let mut tables = sqlx::query_as::<_, DiningTable>(&format!(
        "SELECT {COLUMNS} FROM dining_table ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;
    load_features(pool, &mut tables).await?;
    Ok(tables)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<DiningTable>> {
    let table = sqlx::query_as::<_, DiningTable>(&format!(
        "SELECT {COLUMNS} FROM dining_table WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let Some(mut table) = table else {
        return Ok(None);
    };
    load_features(pool, std::slice::from_mut(&mut table)).await?;
    Ok(Some(table))
}

/// Find all tables whose occupied flag is off.
pub async fn find_unoccupied(pool: &SqlitePool) -> RepoResult<Vec<DiningTable>> {
    let mut tables = sqlx::query_as::<_, DiningTable>(&format!(
        "SELECT {COLUMNS} FROM dining_table WHERE occupied = 0 ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;
    load_features(pool, &mut tables).await?;
    Ok(tables)
}

/// Find unoccupied tables in a zone.
pub async fn find_unoccupied_in_zone(
    pool: &SqlitePool,
    zone_id: i64,
) -> RepoResult<Vec<DiningTable>> {
    let mut tables = sqlx::query_as::<_, DiningTable>(&format!(
        "SELECT {COLUMNS} FROM dining_table WHERE zone_id = ? AND occupied = 0 ORDER BY id"
    ))
    .bind(zone_id)
    .fetch_all(pool)
    .await?;
    load_features(pool, &mut tables).await?;
    Ok(tables)
}

/// Find all tables in a zone (occupied or not).
pub async fn find_by_zone(pool: &SqlitePool, zone_id: i64) -> RepoResult<Vec<DiningTable>> {
    let mut tables = sqlx::query_as::<_, DiningTable>(&format!(
        "SELECT {COLUMNS} FROM dining_table WHERE zone_id = ? ORDER BY id"
    ))
    .bind(zone_id)
    .fetch_all(pool)
    .await?;
    load_features(pool, &mut tables).await?;
    Ok(tables)
}

/// All table ids, ascending.
pub async fn all_ids(pool: &SqlitePool) -> RepoResult<Vec<i64>> {
    let ids: Vec<i64> = sqlx::query_scalar("SELECT id FROM dining_table ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(ids)
}

/// Create a new dining table with its feature rows.
pub async fn create(pool: &SqlitePool, data: DiningTableCreate) -> RepoResult<DiningTable> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "INSERT INTO dining_table (name, capacity, zone_id, position_x, position_y, occupied) \
         VALUES (?, ?, ?, ?, ?, 0)",
    )
    .bind(&data.name)
    .bind(data.capacity)
    .bind(data.zone_id)
    .bind(data.position_x)
    .bind(data.position_y)
    .execute(&mut *tx)
    .await?;
    let id = result.last_insert_rowid();

    for feature in &data.features {
        sqlx::query("INSERT OR IGNORE INTO table_feature (table_id, feature) VALUES (?, ?)")
            .bind(id)
            .bind(feature.as_str())
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create dining table".into()))
}

/// Update a dining table: occupied-flag toggle and/or feature replacement.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: DiningTableUpdate,
) -> RepoResult<DiningTable> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Dining table {id} not found")))?;

    let mut tx = pool.begin().await?;

    if let Some(occupied) = data.occupied {
        sqlx::query("UPDATE dining_table SET occupied = ? WHERE id = ?")
            .bind(occupied)
            .bind(id)
            .execute(&mut *tx)
            .await?;
    }

    if let Some(features) = &data.features {
        sqlx::query("DELETE FROM table_feature WHERE table_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        for feature in features {
            sqlx::query("INSERT OR IGNORE INTO table_feature (table_id, feature) VALUES (?, ?)")
                .bind(id)
                .bind(feature.as_str())
                .execute(&mut *tx)
                .await?;
        }
    }

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Dining table {id} not found")))
}

/// Attach feature rows to the given tables.
async fn load_features(pool: &SqlitePool, tables: &mut [DiningTable]) -> RepoResult<()> {
    if tables.is_empty() {
        return Ok(());
    }

    // Table counts are small (a restaurant floor); fetch all rows and group.
    let rows: Vec<(i64, String)> =
        sqlx::query_as("SELECT table_id, feature FROM table_feature ORDER BY table_id, feature")
            .fetch_all(pool)
            .await?;

    let mut by_table: HashMap<i64, Vec<Feature>> = HashMap::new();
    for (table_id, token) in rows {
        if let Some(feature) = Feature::from_token(&token) {
            by_table.entry(table_id).or_default().push(feature);
        }
    }

    for table in tables.iter_mut() {
        table.features = by_table.remove(&table.id).unwrap_or_default();
    }
    Ok(())
}
