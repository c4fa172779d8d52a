//! Generic row → JSON projection
//!
//! Child tables are read with `SELECT *`; the service does not know
//! their columns ahead of time. Each column is mapped by its reported
//! SQL type name.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde_json::{Number, Value};
use sqlx::mysql::types::MySqlTime;
use sqlx::mysql::MySqlRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};

use crate::models::Record;

/// How a column's values are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColumnKind {
    Null,
    Bool,
    Signed,
    Unsigned,
    Float,
    Double,
    Decimal,
    Date,
    DateTime,
    Timestamp,
    Time,
    Json,
    Text,
    Binary,
    Other,
}

impl ColumnKind {
    /// Classify a MySQL type name such as `INT UNSIGNED` or `VARCHAR`.
    pub(crate) fn from_type_name(name: &str) -> Self {
        let upper = name.trim().to_ascii_uppercase();
        let (base, unsigned) = match upper.strip_suffix(" UNSIGNED") {
            Some(base) => (base, true),
            None => (upper.as_str(), false),
        };

        match base {
            "NULL" => Self::Null,
            "BOOLEAN" | "BOOL" => Self::Bool,
            "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "INTEGER" | "BIGINT" => {
                if unsigned {
                    Self::Unsigned
                } else {
                    Self::Signed
                }
            }
            "YEAR" => Self::Unsigned,
            "FLOAT" => Self::Float,
            "DOUBLE" | "REAL" => Self::Double,
            "DECIMAL" | "NUMERIC" => Self::Decimal,
            "DATE" => Self::Date,
            "DATETIME" => Self::DateTime,
            "TIMESTAMP" => Self::Timestamp,
            "TIME" => Self::Time,
            "JSON" => Self::Json,
            "CHAR" | "VARCHAR" | "TINYTEXT" | "TEXT" | "MEDIUMTEXT" | "LONGTEXT" | "ENUM"
            | "SET" => Self::Text,
            "BINARY" | "VARBINARY" | "TINYBLOB" | "BLOB" | "MEDIUMBLOB" | "LONGBLOB" | "BIT"
            | "GEOMETRY" => Self::Binary,
            _ => Self::Other,
        }
    }
}

/// Project a row to a JSON object keyed by column name.
pub fn row_to_record(row: &MySqlRow) -> Result<Record, sqlx::Error> {
    let mut record = Record::new();

    for column in row.columns() {
        let index = column.ordinal();
        let value = if row.try_get_raw(index)?.is_null() {
            Value::Null
        } else {
            let kind = ColumnKind::from_type_name(column.type_info().name());
            column_value(row, index, kind)?
        };
        record.insert(column.name().to_owned(), value);
    }

    Ok(record)
}

// Decoding is unchecked: the kind was already chosen from the column's
// type, and integer widths are read from the wire length.
fn column_value(row: &MySqlRow, index: usize, kind: ColumnKind) -> Result<Value, sqlx::Error> {
    let value = match kind {
        ColumnKind::Null => Value::Null,
        ColumnKind::Bool => Value::Bool(row.try_get_unchecked::<bool, _>(index)?),
        ColumnKind::Signed => Value::from(row.try_get_unchecked::<i64, _>(index)?),
        ColumnKind::Unsigned => Value::from(row.try_get_unchecked::<u64, _>(index)?),
        ColumnKind::Float => float(f64::from(row.try_get_unchecked::<f32, _>(index)?)),
        ColumnKind::Double => float(row.try_get_unchecked::<f64, _>(index)?),
        ColumnKind::Decimal | ColumnKind::Text => {
            Value::String(row.try_get_unchecked::<String, _>(index)?)
        }
        ColumnKind::Date => {
            let date: NaiveDate = row.try_get_unchecked(index)?;
            Value::String(date.format("%Y-%m-%d").to_string())
        }
        ColumnKind::DateTime => {
            let datetime: NaiveDateTime = row.try_get_unchecked(index)?;
            Value::String(datetime.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
        }
        ColumnKind::Timestamp => {
            let timestamp: DateTime<Utc> = row.try_get_unchecked(index)?;
            Value::String(timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true))
        }
        // TIME is a signed interval up to 838:59:59, not a time of day
        ColumnKind::Time => interval(row.try_get_unchecked::<MySqlTime, _>(index)?),
        ColumnKind::Json => row.try_get_unchecked::<Value, _>(index)?,
        ColumnKind::Binary => {
            let bytes: Vec<u8> = row.try_get_unchecked(index)?;
            Value::String(BASE64.encode(bytes))
        }
        ColumnKind::Other => match row.try_get_unchecked::<String, _>(index) {
            Ok(text) => Value::String(text),
            Err(e) => {
                tracing::debug!(index, error = %e, "undecodable column rendered as null");
                Value::Null
            }
        },
    };

    Ok(value)
}

fn interval(time: MySqlTime) -> Value {
    Value::String(time.to_string())
}

fn float(v: f64) -> Value {
    Number::from_f64(v).map(Value::Number).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_types() {
        assert_eq!(ColumnKind::from_type_name("INT"), ColumnKind::Signed);
        assert_eq!(ColumnKind::from_type_name("BIGINT"), ColumnKind::Signed);
        assert_eq!(ColumnKind::from_type_name("TINYINT"), ColumnKind::Signed);
        assert_eq!(ColumnKind::from_type_name("INT UNSIGNED"), ColumnKind::Unsigned);
        assert_eq!(ColumnKind::from_type_name("bigint unsigned"), ColumnKind::Unsigned);
        assert_eq!(ColumnKind::from_type_name("YEAR"), ColumnKind::Unsigned);
        assert_eq!(ColumnKind::from_type_name("BOOLEAN"), ColumnKind::Bool);
    }

    #[test]
    fn temporal_types() {
        assert_eq!(ColumnKind::from_type_name("DATE"), ColumnKind::Date);
        assert_eq!(ColumnKind::from_type_name("DATETIME"), ColumnKind::DateTime);
        assert_eq!(ColumnKind::from_type_name("TIMESTAMP"), ColumnKind::Timestamp);
        assert_eq!(ColumnKind::from_type_name("TIME"), ColumnKind::Time);
    }

    #[test]
    fn textual_and_binary_types() {
        for name in ["VARCHAR", "CHAR", "TEXT", "LONGTEXT", "ENUM", "SET"] {
            assert_eq!(ColumnKind::from_type_name(name), ColumnKind::Text, "{name}");
        }
        for name in ["BLOB", "VARBINARY", "BINARY", "LONGBLOB", "BIT"] {
            assert_eq!(ColumnKind::from_type_name(name), ColumnKind::Binary, "{name}");
        }
        assert_eq!(ColumnKind::from_type_name("DECIMAL"), ColumnKind::Decimal);
        assert_eq!(ColumnKind::from_type_name("JSON"), ColumnKind::Json);
        assert_eq!(ColumnKind::from_type_name("NULL"), ColumnKind::Null);
    }

    #[test]
    fn unknown_types_fall_through() {
        assert_eq!(ColumnKind::from_type_name("VECTOR"), ColumnKind::Other);
        assert_eq!(ColumnKind::from_type_name(""), ColumnKind::Other);
    }

    #[test]
    fn time_intervals_keep_sign_and_long_hours() {
        use sqlx::mysql::types::MySqlTimeSign;

        let long = MySqlTime::new(MySqlTimeSign::Positive, 25, 30, 0, 0).unwrap();
        assert_eq!(interval(long), Value::from("25:30:00"));

        let negative = MySqlTime::new(MySqlTimeSign::Negative, 1, 0, 0, 0).unwrap();
        assert_eq!(interval(negative), Value::from("-1:00:00"));

        let max = MySqlTime::new(MySqlTimeSign::Positive, 838, 59, 59, 0).unwrap();
        assert_eq!(interval(max), Value::from("838:59:59"));
    }

    #[test]
    fn non_finite_floats_become_null() {
        assert_eq!(float(f64::NAN), Value::Null);
        assert_eq!(float(f64::INFINITY), Value::Null);
        assert_eq!(float(1.5), Value::from(1.5));
    }
}
