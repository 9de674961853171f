//! Startup data seeding
//!
//! Populates an empty database with a realistic restaurant floor plan
//! (zones, tables, positions, features) so search and reservation
//! endpoints have data to work with in development.

use sqlx::SqlitePool;

use crate::db::models::Feature::{self, KidsZone, PrivateArea, Window};
use crate::db::models::{DiningTableCreate, ZoneCreate};
use crate::db::repository::{RepoResult, dining_table, zone};

/// Seed layout entry: (name, capacity, x, y, features)
type TableSeed = (&'static str, i32, i64, i64, &'static [Feature]);

const MAIN_TABLES: &[TableSeed] = &[
    ("Table 1", 2, 100, 50, &[Window]),
    ("Table 2", 4, 150, 100, &[]),
    ("Table 3", 4, 200, 50, &[]),
    ("Table 4", 2, 250, 100, &[Window]),
    ("Large Table", 8, 200, 250, &[]),
    ("Corner Table", 6, 300, 200, &[]),
];

const PATIO_TABLES: &[TableSeed] = &[
    ("Patio Table 1", 6, 250, 200, &[Window]),
    ("Patio Table 2", 4, 100, 300, &[]),
    ("Kids Zone Table", 4, 150, 350, &[KidsZone]),
    ("Outdoor Table", 2, 200, 300, &[]),
];

const BALCONY_TABLES: &[TableSeed] = &[
    ("Balcony Corner", 2, 300, 150, &[Window]),
    ("Balcony View", 4, 350, 100, &[Window]),
    ("Balcony Duo", 2, 400, 150, &[]),
];

const PRIVATE_TABLES: &[TableSeed] = &[
    ("Private Table 1", 6, 400, 100, &[PrivateArea]),
    ("Private Table 2", 8, 450, 150, &[PrivateArea]),
    ("Private Cozy", 4, 430, 80, &[PrivateArea]),
];

/// Seed zones and tables if the database is empty. Idempotent.
pub async fn seed_if_empty(pool: &SqlitePool) -> RepoResult<()> {
    if zone::count(pool).await? > 0 {
        return Ok(());
    }

    let zones: &[(&str, &[TableSeed])] = &[
        ("main", MAIN_TABLES),
        ("patio", PATIO_TABLES),
        ("balcony", BALCONY_TABLES),
        ("private_room", PRIVATE_TABLES),
    ];

    let mut table_count = 0usize;
    for (zone_name, tables) in zones {
        let zone = zone::create(
            pool,
            ZoneCreate {
                name: zone_name.to_string(),
            },
        )
        .await?;

        for (name, capacity, x, y, features) in tables.iter() {
            dining_table::create(
                pool,
                DiningTableCreate {
                    name: Some(name.to_string()),
                    capacity: *capacity,
                    zone_id: zone.id,
                    position_x: Some(*x),
                    position_y: Some(*y),
                    features: features.to_vec(),
                },
            )
            .await?;
            table_count += 1;
        }
    }

    tracing::info!(
        zones = zones.len(),
        tables = table_count,
        "Seeded demo floor plan"
    );
    Ok(())
}
