//! Reservation creation and cancellation
//!
//! Bookings have a fixed duration: the requested end time is replaced
//! by start + the configured duration before the availability check
//! runs. Check and insert execute atomically (guarded insert), so
//! racing requests for the same table and window cannot both succeed.

use sqlx::SqlitePool;

use crate::db::models::{Preference, Reservation, ReservationCreate};
use crate::db::repository::{dining_table, reservation};
use crate::utils::{AppError, AppResult};

pub const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Message returned to guests when the requested slot is taken.
pub const CONFLICT_MESSAGE: &str = "Table is not available for the requested time slot";

/// Create a reservation for `[start, start + duration_hours)`.
///
/// Any caller-supplied end time has already been discarded by this
/// point: booking length is a fixed policy, not a guest choice.
/// Fails with [`AppError::Conflict`] and persists nothing when the
/// window overlaps an existing reservation.
pub async fn create_reservation(
    pool: &SqlitePool,
    table_id: i64,
    start: i64,
    guest_count: i32,
    preferences: Vec<Preference>,
    duration_hours: i64,
) -> AppResult<Reservation> {
    let end = start + duration_hours * MILLIS_PER_HOUR;

    dining_table::find_by_id(pool, table_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Table {table_id} not found")))?;

    let created = reservation::insert_if_available(
        pool,
        ReservationCreate {
            table_id,
            datetime_start: start,
            datetime_end: end,
            guest_count,
            preferences,
        },
    )
    .await?;

    match created {
        Some(reservation) => {
            tracing::info!(
                reservation_id = reservation.id,
                table_id,
                start,
                end,
                guest_count,
                "Reservation created"
            );
            Ok(reservation)
        }
        None => {
            tracing::info!(table_id, start, end, "Reservation rejected: slot conflict");
            Err(AppError::conflict(CONFLICT_MESSAGE))
        }
    }
}

/// Cancel (delete) a reservation by id.
pub async fn cancel_reservation(pool: &SqlitePool, id: i64) -> AppResult<()> {
    if !reservation::delete(pool, id).await? {
        return Err(AppError::not_found(format!("Reservation {id} not found")));
    }
    tracing::info!(reservation_id = id, "Reservation cancelled");
    Ok(())
}
