//! Calendar day identifiers and month ranges
//!
//! Days are keyed by an integer of the form `YYYYMMDD`. Months are
//! validated up front so the key range always ends on the true last
//! day of the month.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::ValidationError;

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// Integer day key, `YYYYMMDD`.
///
/// Any non-negative integer is accepted; a key that names no stored
/// day simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DateKey(u32);

impl DateKey {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Parse a key from path input. Only ASCII digits are accepted.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        const FIELD: &str = "date_key";

        if raw.is_empty() {
            return Err(ValidationError::Missing { field: FIELD });
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::Invalid { field: FIELD });
        }

        raw.parse::<u32>()
            .map(Self)
            .map_err(|_| ValidationError::Invalid { field: FIELD })
    }

    /// Key for a calendar date, if its year fits in four digits.
    pub fn from_date(date: NaiveDate) -> Option<Self> {
        let year = u32::try_from(date.year()).ok().filter(|y| *y <= MAX_YEAR as u32)?;
        Some(Self(year * 10_000 + date.month() * 100 + date.day()))
    }

    /// The calendar date this key names, if it is a real date.
    pub fn to_date(self) -> Option<NaiveDate> {
        let year = i32::try_from(self.0 / 10_000).ok()?;
        NaiveDate::from_ymd_opt(year, (self.0 / 100) % 100, self.0 % 100)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for DateKey {
    type Error = std::num::TryFromIntError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        u32::try_from(raw).map(Self)
    }
}

impl FromStr for DateKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A validated calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    first: NaiveDate,
    last: NaiveDate,
}

impl YearMonth {
    const FIELD: &'static str = "year or month";

    pub fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::Invalid { field: Self::FIELD };

        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(invalid());
        }

        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .ok_or_else(invalid)?;

        Ok(Self { first, last })
    }

    /// Build from raw query parameters.
    ///
    /// Absent or blank values are `Missing`; anything that is not a
    /// plain integer in range is `Invalid`.
    pub fn from_params(year: Option<&str>, month: Option<&str>) -> Result<Self, ValidationError> {
        let (Some(year), Some(month)) = (non_blank(year), non_blank(month)) else {
            return Err(ValidationError::Missing { field: Self::FIELD });
        };

        let invalid = || ValidationError::Invalid { field: Self::FIELD };
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;

        Self::new(year, month)
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last
    }

    pub fn days(&self) -> u32 {
        self.last.day()
    }

    /// Inclusive key range covering every day of the month.
    pub fn key_range(&self) -> RangeInclusive<DateKey> {
        let key = |d: NaiveDate| {
            DateKey(self.year() as u32 * 10_000 + d.month() * 100 + d.day())
        };
        key(self.first)..=key(self.last)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_digits() {
        assert_eq!(DateKey::parse("20200501").unwrap(), DateKey::new(20200501));
        assert_eq!("7".parse::<DateKey>().unwrap().get(), 7);
    }

    #[test]
    fn rejects_non_digits() {
        for raw in ["abc", "2020-05-01", "-20200501", " 20200501", "20200501x", "99999999999"] {
            assert_eq!(
                DateKey::parse(raw),
                Err(ValidationError::Invalid { field: "date_key" }),
                "{raw:?}"
            );
        }
        assert!(matches!(
            DateKey::parse(""),
            Err(ValidationError::Missing { .. })
        ));
    }

    #[test]
    fn key_date_conversion() {
        let date = NaiveDate::from_ymd_opt(2020, 5, 1).unwrap();
        let key = DateKey::from_date(date).unwrap();
        assert_eq!(key.get(), 20200501);
        assert_eq!(key.to_date(), Some(date));

        assert_eq!(DateKey::new(20200231).to_date(), None);
        assert_eq!(DateKey::new(5).to_date(), None);
    }

    #[test]
    fn month_range_uses_true_last_day() {
        let may = YearMonth::new(2020, 5).unwrap();
        assert_eq!(may.days(), 31);
        assert_eq!(
            may.key_range(),
            DateKey::new(20200501)..=DateKey::new(20200531)
        );

        let april = YearMonth::new(2021, 4).unwrap();
        assert_eq!(*april.key_range().end(), DateKey::new(20210430));

        assert_eq!(YearMonth::new(2020, 2).unwrap().days(), 29);
        assert_eq!(YearMonth::new(2021, 2).unwrap().days(), 28);
        assert_eq!(YearMonth::new(1900, 2).unwrap().days(), 28);
        assert_eq!(YearMonth::new(2000, 2).unwrap().days(), 29);
    }

    #[test]
    fn december_and_year_bounds() {
        let dec = YearMonth::new(9999, 12).unwrap();
        assert_eq!(
            dec.key_range(),
            DateKey::new(99991201)..=DateKey::new(99991231)
        );
        assert!(YearMonth::new(0, 1).is_err());
        assert!(YearMonth::new(10_000, 1).is_err());
    }

    #[test]
    fn from_params_distinguishes_missing_and_invalid() {
        let missing = ValidationError::Missing {
            field: "year or month",
        };
        let invalid = ValidationError::Invalid {
            field: "year or month",
        };

        assert_eq!(YearMonth::from_params(None, Some("5")), Err(missing.clone()));
        assert_eq!(YearMonth::from_params(Some("2020"), None), Err(missing.clone()));
        assert_eq!(YearMonth::from_params(Some(""), Some("5")), Err(missing));

        assert_eq!(YearMonth::from_params(Some("20x0"), Some("5")), Err(invalid.clone()));
        assert_eq!(YearMonth::from_params(Some("2020"), Some("13")), Err(invalid.clone()));
        assert_eq!(YearMonth::from_params(Some("2020"), Some("0")), Err(invalid.clone()));
        assert_eq!(YearMonth::from_params(Some("2020"), Some("-1")), Err(invalid));

        let ym = YearMonth::from_params(Some(" 2020 "), Some("05")).unwrap();
        assert_eq!((ym.year(), ym.month()), (2020, 5));
    }
}
