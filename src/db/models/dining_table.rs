//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Fixed physical attribute of a table.
///
/// Stored as one row per feature in `table_feature`; wire form is the
/// SCREAMING_SNAKE_CASE token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Feature {
    /// Table is near a window
    Window,
    /// Table is in a secluded/private area
    PrivateArea,
    /// Table is in the kids-friendly zone
    KidsZone,
}

impl Feature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Window => "WINDOW",
            Feature::PrivateArea => "PRIVATE_AREA",
            Feature::KidsZone => "KIDS_ZONE",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "WINDOW" => Some(Feature::Window),
            "PRIVATE_AREA" => Some(Feature::PrivateArea),
            "KIDS_ZONE" => Some(Feature::KidsZone),
            _ => None,
        }
    }
}

/// Dining table entity (桌台)
///
/// `occupied` is a manual marker set by staff, independent of
/// time-based reservations. `features` is assembled from the
/// `table_feature` rows by the repository.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    pub id: i64,
    pub name: Option<String>,
    pub capacity: i32,
    /// Zone reference (by id, not a live object graph)
    pub zone_id: i64,
    /// Floor-plan coordinates, used by the frontend renderer
    pub position_x: Option<i64>,
    pub position_y: Option<i64>,
    pub occupied: bool,
    #[sqlx(skip)]
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTableCreate {
    pub name: Option<String>,
    pub capacity: i32,
    pub zone_id: i64,
    pub position_x: Option<i64>,
    pub position_y: Option<i64>,
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// Update dining table payload (occupied-flag toggle / feature edits)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTableUpdate {
    pub occupied: Option<bool>,
    pub features: Option<Vec<Feature>>,
}
