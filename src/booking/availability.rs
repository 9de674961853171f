//! Table availability checking
//!
//! A table is unavailable for a window when any of its reservations
//! overlaps it. Intervals are half-open `[start, end)`: windows that
//! only touch at an endpoint do not conflict.

use sqlx::SqlitePool;

use crate::db::repository::RepoResult;

/// Half-open interval overlap test.
pub fn windows_overlap(start_a: i64, end_a: i64, start_b: i64, end_b: i64) -> bool {
    start_a < end_b && end_a > start_b
}

/// Check whether `table_id` is free for `[start, end)`.
///
/// A table with zero reservations is always available.
pub async fn is_table_available(
    pool: &SqlitePool,
    table_id: i64,
    start: i64,
    end: i64,
) -> RepoResult<bool> {
    let windows: Vec<(i64, i64)> = sqlx::query_as(
        "SELECT datetime_start, datetime_end FROM reservation WHERE table_id = ?",
    )
    .bind(table_id)
    .fetch_all(pool)
    .await?;

    Ok(windows
        .iter()
        .all(|&(existing_start, existing_end)| {
            !windows_overlap(start, end, existing_start, existing_end)
        }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_windows_conflict() {
        // [10, 20) vs [15, 25)
        assert!(windows_overlap(10, 20, 15, 25));
        // Containment
        assert!(windows_overlap(10, 20, 12, 18));
        assert!(windows_overlap(12, 18, 10, 20));
        // Identical
        assert!(windows_overlap(10, 20, 10, 20));
    }

    #[test]
    fn touching_endpoints_do_not_conflict() {
        // New window starts exactly when the existing one ends
        assert!(!windows_overlap(20, 30, 10, 20));
        // New window ends exactly when the existing one starts
        assert!(!windows_overlap(0, 10, 10, 20));
    }

    #[test]
    fn disjoint_windows_do_not_conflict() {
        assert!(!windows_overlap(0, 5, 10, 20));
        assert!(!windows_overlap(30, 40, 10, 20));
    }
}
