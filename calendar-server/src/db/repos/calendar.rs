//! Calendar repository
//!
//! Read-only queries over `dates` and its child tables:
//! - ping / stats: constant-shape aggregates
//! - month: one row per stored day with correlated per-category counts
//! - date_detail: seven lookups run concurrently on the pool

use sqlx::MySqlPool;

use super::DbError;
use crate::db::row_json::row_to_record;
use crate::models::{Category, DateDetail, DateKey, DaySummary, Record, Stats, YearMonth};

/// Calendar repository
pub struct CalendarRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> CalendarRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Round-trip a trivial query. Returns the selected constant (1).
    pub async fn ping(&self) -> Result<i64, DbError> {
        let (ok,): (i64,) = sqlx::query_as("SELECT CAST(1 AS SIGNED) AS ok")
            .fetch_one(self.pool)
            .await?;
        Ok(ok)
    }

    /// Total row counts of the tracked tables, in one query.
    pub async fn stats(&self) -> Result<Stats, DbError> {
        let stats = sqlx::query_as::<_, Stats>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM closures)  AS closures,
                (SELECT COUNT(*) FROM events)    AS events,
                (SELECT COUNT(*) FROM sports)    AS sports,
                (SELECT COUNT(*) FROM occupancy) AS occupancy
            "#,
        )
        .fetch_one(self.pool)
        .await?;

        Ok(stats)
    }

    /// Per-day summaries for every stored day of `month`, ascending.
    pub async fn month(&self, month: YearMonth) -> Result<Vec<DaySummary>, DbError> {
        let range = month.key_range();

        let days = sqlx::query_as::<_, DaySummary>(
            r#"
            SELECT
                CAST(d.date_key AS SIGNED) AS date_key,
                CAST(d.date AS DATE) AS date,
                (SELECT COUNT(*) FROM events            e  WHERE e.date_key  = d.date_key) AS event_count,
                (SELECT COUNT(*) FROM academic_calendar ac WHERE ac.date_key = d.date_key) AS academic_count,
                (SELECT COUNT(*) FROM sports            s  WHERE s.date_key  = d.date_key) AS sport_count,
                (SELECT COUNT(*) FROM closures          c  WHERE c.date_key  = d.date_key) AS closure_count,
                (SELECT COUNT(*) FROM occupancy         o  WHERE o.date_key  = d.date_key) AS occupancy_count,
                (SELECT COUNT(*) FROM weather           w  WHERE w.date_key  = d.date_key) AS weather_count
            FROM dates d
            WHERE d.date_key BETWEEN ? AND ?
            ORDER BY d.date_key
            "#,
        )
        .bind(range.start().get())
        .bind(range.end().get())
        .fetch_all(self.pool)
        .await?;

        Ok(days)
    }

    /// Everything stored for one day.
    ///
    /// An unknown key is not an error: the result is simply empty.
    pub async fn date_detail(&self, key: DateKey) -> Result<DateDetail, DbError> {
        let (date, events, academic, sports, closures, occupancy, weather) = tokio::try_join!(
            self.day_date(key),
            self.records(Category::Events, key),
            self.records(Category::Academic, key),
            self.records(Category::Sports, key),
            self.records(Category::Closures, key),
            self.records(Category::Occupancy, key),
            self.first_record(Category::Weather, key),
        )?;

        Ok(DateDetail {
            date_key: key,
            date,
            events,
            academic,
            sports,
            closures,
            occupancy,
            weather,
        })
    }

    async fn day_date(&self, key: DateKey) -> Result<Option<chrono::NaiveDate>, DbError> {
        let row: Option<(Option<chrono::NaiveDate>,)> =
            sqlx::query_as("SELECT CAST(date AS DATE) AS date FROM dates WHERE date_key = ?")
                .bind(key.get())
                .fetch_optional(self.pool)
                .await?;

        Ok(row.and_then(|(date,)| date))
    }

    async fn records(&self, category: Category, key: DateKey) -> Result<Vec<Record>, DbError> {
        let sql = format!("SELECT * FROM {} WHERE date_key = ?", category.table());
        let rows = sqlx::query(&sql)
            .bind(key.get())
            .fetch_all(self.pool)
            .await?;

        let records = rows
            .iter()
            .map(row_to_record)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    async fn first_record(
        &self,
        category: Category,
        key: DateKey,
    ) -> Result<Option<Record>, DbError> {
        let sql = format!(
            "SELECT * FROM {} WHERE date_key = ? LIMIT 1",
            category.table()
        );
        let row = sqlx::query(&sql)
            .bind(key.get())
            .fetch_optional(self.pool)
            .await?;

        Ok(row.as_ref().map(row_to_record).transpose()?)
    }
}
