//! Data models
//!
//! DB row types derive `sqlx::FromRow`; multi-row collections
//! (table features, reservation preferences) are assembled by the
//! repository layer. All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod dining_table;
pub mod reservation;
pub mod zone;

// Re-exports
pub use dining_table::{DiningTable, DiningTableCreate, DiningTableUpdate, Feature};
pub use reservation::{Preference, Reservation, ReservationCreate};
pub use zone::{Zone, ZoneCreate};
