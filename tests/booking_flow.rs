//! End-to-end booking flow tests over a real (temp-file) SQLite database.

use std::collections::HashSet;

use crab_booking::booking::{self, DemoOccupancy, SearchCriteria};
use crab_booking::core::Config;
use crab_booking::db::models::{DiningTableCreate, Feature, Preference, ZoneCreate};
use crab_booking::db::repository::{dining_table, reservation, zone};
use crab_booking::db::{DbService, seed};
use crab_booking::utils::{AppError, time};
use sqlx::SqlitePool;
use tempfile::TempDir;

const HOUR: i64 = 3_600_000;

fn test_config(db_path: &str) -> Config {
    Config {
        http_port: 0,
        database_path: db_path.to_string(),
        environment: "test".to_string(),
        reservation_duration_hours: 2,
        demo_occupancy: false,
        demo_occupancy_seed: None,
        seed_demo_data: false,
        log_dir: None,
    }
}

/// Open a fresh database in a temp dir. The TempDir must stay alive
/// for the duration of the test.
async fn test_pool() -> (SqlitePool, TempDir) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("booking.db");
    let db = DbService::new(path.to_str().unwrap())
        .await
        .expect("open database");
    (db.pool, dir)
}

async fn seeded_pool() -> (SqlitePool, TempDir) {
    let (pool, dir) = test_pool().await;
    seed::seed_if_empty(&pool).await.expect("seed demo data");
    (pool, dir)
}

fn millis(date: &str, hhmm: &str) -> i64 {
    time::parse_datetime_millis(date, hhmm).expect("valid datetime")
}

fn criteria(start: i64, guest_count: i32) -> SearchCriteria {
    SearchCriteria {
        window_start: start,
        window_end: start + 2 * HOUR,
        guest_count,
        zone_name: None,
        preferences: Vec::new(),
    }
}

#[tokio::test]
async fn table_with_no_reservations_is_available() {
    let (pool, _dir) = test_pool().await;
    let z = zone::create(&pool, ZoneCreate { name: "main".into() })
        .await
        .unwrap();
    let t = dining_table::create(
        &pool,
        DiningTableCreate {
            name: Some("Table 1".into()),
            capacity: 4,
            zone_id: z.id,
            position_x: None,
            position_y: None,
            features: vec![],
        },
    )
    .await
    .unwrap();

    let start = millis("2024-01-01", "18:00");
    let available = booking::availability::is_table_available(&pool, t.id, start, start + 2 * HOUR)
        .await
        .unwrap();
    assert!(available);
}

#[tokio::test]
async fn overlapping_reservation_conflicts_touching_boundary_does_not() {
    let (pool, dir) = seeded_pool().await;
    let config = test_config(dir.path().join("booking.db").to_str().unwrap());

    let table_id = 1;
    let first_start = millis("2024-01-01", "18:00");

    // [18:00, 20:00) books fine
    let created = booking::reservation::create_reservation(
        &pool,
        table_id,
        first_start,
        2,
        vec![],
        config.reservation_duration_hours,
    )
    .await
    .unwrap();
    assert_eq!(created.datetime_end, first_start + 2 * HOUR);

    // [19:00, 21:00) overlaps and must fail with the literal conflict message
    let overlap_start = millis("2024-01-01", "19:00");
    let err = booking::reservation::create_reservation(
        &pool,
        table_id,
        overlap_start,
        2,
        vec![],
        config.reservation_duration_hours,
    )
    .await
    .unwrap_err();
    match err {
        AppError::Conflict(msg) => {
            assert_eq!(msg, "Table is not available for the requested time slot")
        }
        other => panic!("expected conflict, got {other:?}"),
    }

    // [20:00, 22:00) touches the first booking's end and must succeed
    let touch_start = millis("2024-01-01", "20:00");
    booking::reservation::create_reservation(
        &pool,
        table_id,
        touch_start,
        2,
        vec![],
        config.reservation_duration_hours,
    )
    .await
    .unwrap();

    let reservations = reservation::find_by_table(&pool, table_id).await.unwrap();
    assert_eq!(reservations.len(), 2);
}

#[tokio::test]
async fn rejected_reservation_does_not_mutate_the_store() {
    let (pool, _dir) = seeded_pool().await;

    let start = millis("2024-06-01", "12:00");
    booking::reservation::create_reservation(&pool, 3, start, 4, vec![], 2)
        .await
        .unwrap();
    let before = reservation::find_by_table(&pool, 3).await.unwrap().len();

    let err = booking::reservation::create_reservation(&pool, 3, start + HOUR, 4, vec![], 2)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let after = reservation::find_by_table(&pool, 3).await.unwrap().len();
    assert_eq!(before, after);
}

#[tokio::test]
async fn reservation_end_time_is_fixed_duration() {
    let (pool, _dir) = seeded_pool().await;

    let start = millis("2024-03-10", "19:30");
    let created = booking::reservation::create_reservation(&pool, 5, start, 6, vec![], 2)
        .await
        .unwrap();
    assert_eq!(created.datetime_start, start);
    assert_eq!(created.datetime_end, start + 2 * HOUR);
}

#[tokio::test]
async fn unknown_table_is_rejected() {
    let (pool, _dir) = seeded_pool().await;

    let start = millis("2024-03-10", "19:00");
    let err = booking::reservation::create_reservation(&pool, 9999, start, 2, vec![], 2)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn reservation_preferences_round_trip() {
    let (pool, _dir) = seeded_pool().await;

    let start = millis("2024-05-05", "18:00");
    let created = booking::reservation::create_reservation(
        &pool,
        7,
        start,
        4,
        vec![Preference::NearWindow, Preference::NearKidsZone],
        2,
    )
    .await
    .unwrap();

    let fetched = reservation::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    let prefs: HashSet<Preference> = fetched.preferences.into_iter().collect();
    assert_eq!(
        prefs,
        HashSet::from([Preference::NearWindow, Preference::NearKidsZone])
    );
}

#[tokio::test]
async fn cancelled_reservation_frees_the_slot() {
    let (pool, _dir) = seeded_pool().await;

    let start = millis("2024-02-02", "20:00");
    let created = booking::reservation::create_reservation(&pool, 2, start, 2, vec![], 2)
        .await
        .unwrap();

    booking::reservation::cancel_reservation(&pool, created.id)
        .await
        .unwrap();

    let available =
        booking::availability::is_table_available(&pool, 2, start, start + 2 * HOUR)
            .await
            .unwrap();
    assert!(available);

    // Cancelling twice reports not found
    let err = booking::reservation::cancel_reservation(&pool, created.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn search_is_idempotent_without_writes() {
    let (pool, _dir) = seeded_pool().await;

    let start = millis("2024-04-04", "18:00");
    let c = criteria(start, 4);

    let first = booking::search::search(&pool, &c, None).await.unwrap();
    let second = booking::search::search(&pool, &c, None).await.unwrap();

    let first_ids: Vec<i64> = first.available.iter().map(|t| t.id).collect();
    let second_ids: Vec<i64> = second.available.iter().map(|t| t.id).collect();
    assert_eq!(first_ids, second_ids);
    assert_eq!(first.recommended_id, second.recommended_id);
}

#[tokio::test]
async fn search_filters_capacity_and_zone() {
    let (pool, _dir) = seeded_pool().await;

    let start = millis("2024-04-04", "18:00");

    // Only the two 8-seaters fit a party of 8
    let big = booking::search::search(&pool, &criteria(start, 8), None)
        .await
        .unwrap();
    let ids: Vec<i64> = big.available.iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(big.available.iter().all(|t| t.capacity >= 8));

    // Zone filter is case-insensitive
    let mut c = criteria(start, 2);
    c.zone_name = Some("PATIO".into());
    let patio = booking::search::search(&pool, &c, None).await.unwrap();
    assert_eq!(patio.available.len(), 4);

    // Unknown zone matches nothing and recommends nothing
    let mut c = criteria(start, 2);
    c.zone_name = Some("rooftop".into());
    let rooftop = booking::search::search(&pool, &c, None).await.unwrap();
    assert!(rooftop.available.is_empty());
    assert_eq!(rooftop.recommended_id, None);
}

#[tokio::test]
async fn search_excludes_reserved_tables() {
    let (pool, _dir) = seeded_pool().await;

    let start = millis("2024-04-04", "18:00");
    booking::reservation::create_reservation(&pool, 2, start, 2, vec![], 2)
        .await
        .unwrap();

    let outcome = booking::search::search(&pool, &criteria(start, 2), None)
        .await
        .unwrap();
    assert!(outcome.available.iter().all(|t| t.id != 2));
    assert!(outcome.occupied_ids.contains(&2));

    // The slot right after the booking is free again
    let later = booking::search::search(&pool, &criteria(start + 2 * HOUR, 2), None)
        .await
        .unwrap();
    assert!(later.available.iter().any(|t| t.id == 2));
}

#[tokio::test]
async fn search_recommends_snuggest_preferred_table() {
    let (pool, _dir) = seeded_pool().await;

    // Party of 2 in patio with a window preference.
    // Outdoor Table (capacity 2, no features): 100 - 0 + 5 = 105 beats
    // Patio Table 1 (capacity 6, window): 100 - 20 + 10 + 5 = 95.
    let start = millis("2024-04-04", "18:00");
    let c = SearchCriteria {
        window_start: start,
        window_end: start + 2 * HOUR,
        guest_count: 2,
        zone_name: Some("patio".into()),
        preferences: vec![Preference::NearWindow],
    };
    let outcome = booking::search::search(&pool, &c, None).await.unwrap();

    let recommended = outcome.recommended_id.expect("a recommendation");
    let table = dining_table::find_by_id(&pool, recommended)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(table.name.as_deref(), Some("Outdoor Table"));
}

#[tokio::test]
async fn occupancy_is_empty_without_demo_mode() {
    let (pool, _dir) = seeded_pool().await;

    let start = millis("2024-04-04", "18:00");
    let occupied = booking::occupancy::unavailable_table_ids(&pool, start, start + 2 * HOUR, None)
        .await
        .unwrap();
    assert!(occupied.is_empty());
}

#[tokio::test]
async fn demo_mode_fabricates_occupancy_only_on_empty_store() {
    let (pool, _dir) = seeded_pool().await;
    let demo = DemoOccupancy::new(Some(42));

    let start = millis("2024-04-04", "18:00");
    let fabricated =
        booking::occupancy::unavailable_table_ids(&pool, start, start + 2 * HOUR, Some(&demo))
            .await
            .unwrap();
    assert!((1..=2).contains(&fabricated.len()));

    let all_ids: HashSet<i64> = dining_table::all_ids(&pool).await.unwrap().into_iter().collect();
    assert!(fabricated.is_subset(&all_ids));

    // Once a real reservation overlaps the window, only the real set comes back
    booking::reservation::create_reservation(&pool, 4, start, 2, vec![], 2)
        .await
        .unwrap();
    let real =
        booking::occupancy::unavailable_table_ids(&pool, start, start + 2 * HOUR, Some(&demo))
            .await
            .unwrap();
    assert_eq!(real, HashSet::from([4]));
}

#[tokio::test]
async fn seeding_is_idempotent() {
    let (pool, _dir) = seeded_pool().await;
    seed::seed_if_empty(&pool).await.unwrap();

    assert_eq!(zone::count(&pool).await.unwrap(), 4);
    assert_eq!(dining_table::all_ids(&pool).await.unwrap().len(), 16);

    let features_of = |name: &str| {
        let pool = pool.clone();
        let name = name.to_string();
        async move {
            let tables = dining_table::find_all(&pool).await.unwrap();
            tables
                .into_iter()
                .find(|t| t.name.as_deref() == Some(name.as_str()))
                .map(|t| t.features)
                .unwrap_or_default()
        }
    };
    assert_eq!(features_of("Kids Zone Table").await, vec![Feature::KidsZone]);
    assert_eq!(features_of("Private Cozy").await, vec![Feature::PrivateArea]);
}
