//! Reservation Repository

use std::collections::HashMap;

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{Preference, Reservation, ReservationCreate};

const COLUMNS: &str = "id, table_id, datetime_start, datetime_end, guest_count";

/// Find all reservations for a table, ascending by start time.
pub async fn find_by_table(pool: &SqlitePool, table_id: i64) -> RepoResult<Vec<Reservation>> {
    let mut reservations = sqlx::query_as::<_, Reservation>(&format!(
        "SELECT {COLUMNS} FROM reservation WHERE table_id = ? ORDER BY datetime_start"
    ))
    .bind(table_id)
    .fetch_all(pool)
    .await?;
    load_preferences(pool, &mut reservations).await?;
    Ok(reservations)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Reservation>> {
    let reservation = sqlx::query_as::<_, Reservation>(&format!(
        "SELECT {COLUMNS} FROM reservation WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let Some(mut reservation) = reservation else {
        return Ok(None);
    };
    load_preferences(pool, std::slice::from_mut(&mut reservation)).await?;
    Ok(Some(reservation))
}

/// Ids of tables with a reservation overlapping `[start, end)`.
///
/// Half-open overlap test: `datetime_start < end AND datetime_end > start`.
pub async fn find_overlapping_table_ids(
    pool: &SqlitePool,
    start: i64,
    end: i64,
) -> RepoResult<Vec<i64>> {
    let ids: Vec<i64> = sqlx::query_scalar(
        "SELECT DISTINCT table_id FROM reservation \
         WHERE datetime_start < ? AND datetime_end > ? ORDER BY table_id",
    )
    .bind(end)
    .bind(start)
    .fetch_all(pool)
    .await?;
    Ok(ids)
}

/// Insert a reservation only if no existing reservation for the table
/// overlaps the window.
///
/// The conflict check and the insert execute as one statement, so two
/// racing creators cannot both pass the check: SQLite runs writers one
/// at a time and the `NOT EXISTS` guard is evaluated inside the write.
/// Returns `None` when the guard rejects the insert (conflict).
pub async fn insert_if_available(
    pool: &SqlitePool,
    data: ReservationCreate,
) -> RepoResult<Option<Reservation>> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "INSERT INTO reservation (table_id, datetime_start, datetime_end, guest_count) \
         SELECT ?1, ?2, ?3, ?4 \
         WHERE NOT EXISTS ( \
             SELECT 1 FROM reservation \
             WHERE table_id = ?1 AND datetime_start < ?3 AND datetime_end > ?2 \
         )",
    )
    .bind(data.table_id)
    .bind(data.datetime_start)
    .bind(data.datetime_end)
    .bind(data.guest_count)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        // Conflict: nothing was written, nothing to roll back
        return Ok(None);
    }
    let id = result.last_insert_rowid();

    for preference in &data.preferences {
        sqlx::query(
            "INSERT OR IGNORE INTO reservation_preference (reservation_id, preference) \
             VALUES (?, ?)",
        )
        .bind(id)
        .bind(preference.as_str())
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    let reservation = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create reservation".into()))?;
    Ok(Some(reservation))
}

/// Delete a reservation (explicit cancellation). Preference rows cascade.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM reservation WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// Attach preference rows to the given reservations.
async fn load_preferences(pool: &SqlitePool, reservations: &mut [Reservation]) -> RepoResult<()> {
    if reservations.is_empty() {
        return Ok(());
    }

    let rows: Vec<(i64, String)> = sqlx::query_as(
        "SELECT reservation_id, preference FROM reservation_preference \
         ORDER BY reservation_id, preference",
    )
    .fetch_all(pool)
    .await?;

    let mut by_reservation: HashMap<i64, Vec<Preference>> = HashMap::new();
    for (reservation_id, token) in rows {
        if let Some(preference) = Preference::from_token(&token) {
            by_reservation
                .entry(reservation_id)
                .or_default()
                .push(preference);
        }
    }

    for reservation in reservations.iter_mut() {
        reservation.preferences = by_reservation.remove(&reservation.id).unwrap_or_default();
    }
    Ok(())
}
