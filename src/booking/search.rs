//! Table search
//!
//! Filters the table list down to candidates matching the guest
//! criteria, removes tables that are busy during the window, and
//! hands the survivors to the recommendation ranker.

use std::collections::{HashMap, HashSet};

use sqlx::SqlitePool;

use super::{availability, occupancy, recommend};
use crate::db::models::{DiningTable, Preference};
use crate::db::repository::{RepoResult, dining_table, zone};

/// Search criteria for a reservation window.
#[derive(Debug, Clone)]
pub struct SearchCriteria {
    /// Window start, Unix millis
    pub window_start: i64,
    /// Window end, Unix millis (already normalized to the booking duration)
    pub window_end: i64,
    pub guest_count: i32,
    /// Optional zone-name filter, matched case-insensitively
    pub zone_name: Option<String>,
    pub preferences: Vec<Preference>,
}

impl SearchCriteria {
    fn zone_filter(&self) -> Option<&str> {
        self.zone_name
            .as_deref()
            .map(str::trim)
            .filter(|z| !z.is_empty())
    }
}

/// Search outcome: candidates, busy tables, and the pick.
#[derive(Debug)]
pub struct SearchOutcome {
    /// Available tables, ascending by id
    pub available: Vec<DiningTable>,
    /// Tables busy during the window (real or demo-fabricated)
    pub occupied_ids: HashSet<i64>,
    /// Best candidate, if any
    pub recommended_id: Option<i64>,
}

/// Tables eligible for the window: capacity fits, zone matches (when
/// requested), and no reservation overlaps. An unknown zone name
/// matches nothing. Results come back in ascending id order.
pub async fn available_tables(
    pool: &SqlitePool,
    criteria: &SearchCriteria,
    zone_names: &HashMap<i64, String>,
) -> RepoResult<Vec<DiningTable>> {
    let all_tables = dining_table::find_all(pool).await?;

    let mut candidates = Vec::new();
    for table in all_tables {
        if table.capacity < criteria.guest_count {
            continue;
        }

        if let Some(requested_zone) = criteria.zone_filter() {
            let in_zone = zone_names
                .get(&table.zone_id)
                .is_some_and(|name| name.eq_ignore_ascii_case(requested_zone));
            if !in_zone {
                continue;
            }
        }

        if !availability::is_table_available(
            pool,
            table.id,
            criteria.window_start,
            criteria.window_end,
        )
        .await?
        {
            continue;
        }

        candidates.push(table);
    }

    Ok(candidates)
}

/// Run the full search pipeline: filter → occupancy exclusion → rank.
pub async fn search(
    pool: &SqlitePool,
    criteria: &SearchCriteria,
    demo: Option<&occupancy::DemoOccupancy>,
) -> RepoResult<SearchOutcome> {
    let zone_names: HashMap<i64, String> = zone::find_all(pool)
        .await?
        .into_iter()
        .map(|z| (z.id, z.name))
        .collect();

    let candidates = available_tables(pool, criteria, &zone_names).await?;

    let occupied_ids = occupancy::unavailable_table_ids(
        pool,
        criteria.window_start,
        criteria.window_end,
        demo,
    )
    .await?;

    let available: Vec<DiningTable> = candidates
        .into_iter()
        .filter(|table| !occupied_ids.contains(&table.id))
        .collect();

    let recommended_id = recommend::recommended_table_id(
        &available,
        &zone_names,
        criteria.guest_count,
        criteria.zone_filter(),
        &criteria.preferences,
    );

    Ok(SearchOutcome {
        available,
        occupied_ids,
        recommended_id,
    })
}
