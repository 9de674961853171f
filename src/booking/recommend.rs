//! Table recommendation scoring
//!
//! Pure functions: given candidate tables and search criteria, compute
//! an integer fitness score per table and pick the best match.

use std::collections::HashMap;

use crate::db::models::{DiningTable, Feature, Preference};

/// Score awarded as a starting point for every candidate.
const BASE_SCORE: i32 = 100;
/// Penalty per seat of unused capacity.
const CAPACITY_PENALTY: i32 = 5;
/// Bonus per matched guest preference.
const PREFERENCE_BONUS: i32 = 10;
/// Bonus when the table sits in the requested zone.
const ZONE_BONUS: i32 = 5;

/// Calculate the recommendation score for a single table.
///
/// Starts at 100, subtracts 5 per seat of slack (a table smaller than
/// the party has negative slack and gets a bonus; callers that want
/// seated guests filter those out beforehand), adds 10 per preference
/// matched by a table feature and 5 for a zone match.
pub fn score(
    table: &DiningTable,
    table_zone_name: Option<&str>,
    guest_count: i32,
    zone_name: Option<&str>,
    preferences: &[Preference],
) -> i32 {
    let mut score = BASE_SCORE;

    // Penalize tables that are too large for the party
    score -= CAPACITY_PENALTY * (table.capacity - guest_count);

    for preference in preferences {
        let wanted = match preference {
            Preference::NearWindow => Feature::Window,
            Preference::PrivateCorner => Feature::PrivateArea,
            Preference::NearKidsZone => Feature::KidsZone,
        };
        if table.features.contains(&wanted) {
            score += PREFERENCE_BONUS;
        }
    }

    if let (Some(requested), Some(actual)) = (zone_name, table_zone_name)
        && requested.eq_ignore_ascii_case(actual)
    {
        score += ZONE_BONUS;
    }

    score
}

/// Pick the id of the best-scoring candidate.
///
/// Candidates are scanned in input order with a strict `>` comparison,
/// so the first candidate reaching the maximum score wins ties. An
/// empty candidate list yields `None`.
pub fn recommended_table_id(
    candidates: &[DiningTable],
    zone_names: &HashMap<i64, String>,
    guest_count: i32,
    zone_name: Option<&str>,
    preferences: &[Preference],
) -> Option<i64> {
    let mut best: Option<(i64, i32)> = None;

    for table in candidates {
        let table_zone = zone_names.get(&table.zone_id).map(String::as_str);
        let table_score = score(table, table_zone, guest_count, zone_name, preferences);

        match best {
            Some((_, best_score)) if table_score <= best_score => {}
            _ => best = Some((table.id, table_score)),
        }
    }

    best.map(|(id, _)| id)
}
