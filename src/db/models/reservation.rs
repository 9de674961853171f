//! Reservation Model

use serde::{Deserialize, Serialize};

/// Guest preference, matched against table [`Feature`]s during ranking.
///
/// [`Feature`]: super::dining_table::Feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Preference {
    /// Guest prefers a table near a window
    NearWindow,
    /// Guest prefers a private/secluded corner
    PrivateCorner,
    /// Guest prefers to be near the kids zone
    NearKidsZone,
}

impl Preference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preference::NearWindow => "NEAR_WINDOW",
            Preference::PrivateCorner => "PRIVATE_CORNER",
            Preference::NearKidsZone => "NEAR_KIDS_ZONE",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "NEAR_WINDOW" => Some(Preference::NearWindow),
            "PRIVATE_CORNER" => Some(Preference::PrivateCorner),
            "NEAR_KIDS_ZONE" => Some(Preference::NearKidsZone),
            _ => None,
        }
    }

    /// Parse a comma-separated preference list.
    ///
    /// Unrecognized tokens are silently dropped, duplicates collapse.
    pub fn parse_csv(csv: &str) -> Vec<Preference> {
        let mut parsed = Vec::new();
        for part in csv.split(',') {
            if let Some(pref) = Preference::from_token(part.trim())
                && !parsed.contains(&pref)
            {
                parsed.push(pref);
            }
        }
        parsed
    }
}

/// Reservation entity
///
/// Timestamps are Unix millis; the interval is half-open `[start, end)`.
/// Never mutated in place: cancelled by deletion, no reschedule.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub table_id: i64,
    pub datetime_start: i64,
    pub datetime_end: i64,
    pub guest_count: i32,
    #[sqlx(skip)]
    #[serde(default)]
    pub preferences: Vec<Preference>,
}

/// Create reservation payload (repository layer)
#[derive(Debug, Clone)]
pub struct ReservationCreate {
    pub table_id: i64,
    pub datetime_start: i64,
    pub datetime_end: i64,
    pub guest_count: i32,
    pub preferences: Vec<Preference>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_csv_drops_unknown_tokens() {
        let prefs = Preference::parse_csv("NEAR_WINDOW, BOGUS ,PRIVATE_CORNER");
        assert_eq!(
            prefs,
            vec![Preference::NearWindow, Preference::PrivateCorner]
        );
    }

    #[test]
    fn parse_csv_collapses_duplicates() {
        let prefs = Preference::parse_csv("NEAR_WINDOW,NEAR_WINDOW");
        assert_eq!(prefs, vec![Preference::NearWindow]);
    }

    #[test]
    fn parse_csv_empty_input() {
        assert!(Preference::parse_csv("").is_empty());
        assert!(Preference::parse_csv("  ,  ").is_empty());
    }
}
