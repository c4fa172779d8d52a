//! Response shapes for calendar queries

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::FromRow;

use super::DateKey;

/// A child-table row projected to a JSON object (column name → value).
pub type Record = Map<String, Value>;

/// Tables whose rows hang off a day via `date_key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Events,
    Academic,
    Sports,
    Closures,
    Occupancy,
    Weather,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Events,
        Category::Academic,
        Category::Sports,
        Category::Closures,
        Category::Occupancy,
        Category::Weather,
    ];

    /// Backing table name. Only ever these fixed identifiers reach SQL.
    pub const fn table(self) -> &'static str {
        match self {
            Self::Events => "events",
            Self::Academic => "academic_calendar",
            Self::Sports => "sports",
            Self::Closures => "closures",
            Self::Occupancy => "occupancy",
            Self::Weather => "weather",
        }
    }
}

/// Global row counts, `GET /api/stats`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Stats {
    pub closures: i64,
    pub events: i64,
    pub sports: i64,
    pub occupancy: i64,
}

/// One day of a month view with per-category counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct DaySummary {
    #[sqlx(try_from = "i64")]
    pub date_key: DateKey,
    pub date: Option<NaiveDate>,
    pub event_count: i64,
    pub academic_count: i64,
    pub sport_count: i64,
    pub closure_count: i64,
    pub occupancy_count: i64,
    pub weather_count: i64,
}

/// Everything stored for a single day, `GET /api/date/{date_key}`
///
/// Weather is 1:1 with a day; the other categories are 1:many.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateDetail {
    pub date_key: DateKey,
    pub date: Option<NaiveDate>,
    pub events: Vec<Record>,
    pub academic: Vec<Record>,
    pub sports: Vec<Record>,
    pub closures: Vec<Record>,
    pub occupancy: Vec<Record>,
    pub weather: Option<Record>,
}

impl DateDetail {
    /// Detail for a key with nothing stored against it.
    pub fn empty(date_key: DateKey) -> Self {
        Self {
            date_key,
            date: None,
            events: Vec::new(),
            academic: Vec::new(),
            sports: Vec::new(),
            closures: Vec::new(),
            occupancy: Vec::new(),
            weather: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.events.is_empty()
            && self.academic.is_empty()
            && self.sports.is_empty()
            && self.closures.is_empty()
            && self.occupancy.is_empty()
            && self.weather.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn table_names_are_fixed() {
        let tables: Vec<_> = Category::ALL.iter().map(|c| c.table()).collect();
        assert_eq!(
            tables,
            ["events", "academic_calendar", "sports", "closures", "occupancy", "weather"]
        );
    }

    #[test]
    fn empty_detail_serializes_nulls_and_arrays() {
        let detail = DateDetail::empty(DateKey::new(20200501));
        assert!(detail.is_empty());
        assert_eq!(
            serde_json::to_value(&detail).unwrap(),
            json!({
                "date_key": 20200501,
                "date": null,
                "events": [],
                "academic": [],
                "sports": [],
                "closures": [],
                "occupancy": [],
                "weather": null
            })
        );
    }

    #[test]
    fn day_summary_serializes_iso_date() {
        let summary = DaySummary {
            date_key: DateKey::new(20200501),
            date: NaiveDate::from_ymd_opt(2020, 5, 1),
            event_count: 2,
            academic_count: 0,
            sport_count: 1,
            closure_count: 0,
            occupancy_count: 3,
            weather_count: 1,
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["date_key"], 20200501);
        assert_eq!(value["date"], "2020-05-01");
        assert_eq!(value["event_count"], 2);
        assert_eq!(value["weather_count"], 1);
    }

    #[test]
    fn date_key_from_negative_is_rejected() {
        assert!(DateKey::try_from(-1_i64).is_err());
        assert_eq!(DateKey::try_from(20200501_i64).unwrap().get(), 20200501);
    }
}
