//! Present-tense occupancy resolution
//!
//! Computes the set of tables that are busy during a window. The real
//! answer comes from overlapping reservations; an optional demo mode
//! fabricates 1-2 "busy" tables when the reservation store is empty so
//! a fresh install still renders an interesting floor plan. Fabricated
//! ids are never persisted and are recomputed on every call.

use std::collections::HashSet;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sqlx::SqlitePool;

use crate::db::repository::{RepoResult, dining_table, reservation};

/// Demo occupancy sampler with an owned RNG.
///
/// The RNG is injected (seedable) rather than pulled from process
/// globals so tests can pin the sequence.
#[derive(Debug)]
pub struct DemoOccupancy {
    rng: Mutex<StdRng>,
}

impl DemoOccupancy {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Pick 1-2 table ids uniformly at random.
    fn pick(&self, table_ids: &[i64]) -> HashSet<i64> {
        let mut rng = self.rng.lock().expect("demo occupancy rng poisoned");
        let count = table_ids.len().min(1 + rng.gen_range(0..2usize));
        table_ids
            .choose_multiple(&mut *rng, count)
            .copied()
            .collect()
    }
}

/// Resolve the ids of tables unavailable during `[start, end)`.
///
/// Tables with a genuinely overlapping reservation are always
/// returned. Only when that set is empty AND `demo` is configured does
/// the resolver fabricate occupancy.
pub async fn unavailable_table_ids(
    pool: &SqlitePool,
    start: i64,
    end: i64,
    demo: Option<&DemoOccupancy>,
) -> RepoResult<HashSet<i64>> {
    let real: HashSet<i64> = reservation::find_overlapping_table_ids(pool, start, end)
        .await?
        .into_iter()
        .collect();

    if !real.is_empty() {
        return Ok(real);
    }

    let Some(demo) = demo else {
        return Ok(real);
    };

    let all_ids = dining_table::all_ids(pool).await?;
    if all_ids.is_empty() {
        return Ok(real);
    }

    let fabricated = demo.pick(&all_ids);
    tracing::debug!(
        count = fabricated.len(),
        "No real reservations in window, fabricating demo occupancy"
    );
    Ok(fabricated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_returns_one_or_two_ids() {
        let demo = DemoOccupancy::new(Some(42));
        let ids = [1i64, 2, 3, 4, 5];
        for _ in 0..50 {
            let picked = demo.pick(&ids);
            assert!((1..=2).contains(&picked.len()));
            assert!(picked.iter().all(|id| ids.contains(id)));
        }
    }

    #[test]
    fn pick_is_deterministic_for_a_seed() {
        let ids = [1i64, 2, 3, 4, 5];
        let a: Vec<HashSet<i64>> = {
            let demo = DemoOccupancy::new(Some(7));
            (0..10).map(|_| demo.pick(&ids)).collect()
        };
        let b: Vec<HashSet<i64>> = {
            let demo = DemoOccupancy::new(Some(7));
            (0..10).map(|_| demo.pick(&ids)).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn pick_clamps_to_population() {
        let demo = DemoOccupancy::new(Some(1));
        let ids = [9i64];
        for _ in 0..10 {
            assert_eq!(demo.pick(&ids), HashSet::from([9]));
        }
    }
}
