//! Row decoding and binding helpers shared by the repositories.

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{Row, postgres::PgRow};

/// Decode a non-negative `BIGINT` column.
pub(crate) fn try_get_unsigned(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    let value: i64 = row.try_get(col)?;

    u64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

pub(crate) fn try_get_timestamp(row: &PgRow, col: &str) -> Result<Timestamp, sqlx::Error> {
    Ok(row.try_get::<SqlxTimestamp, _>(col)?.to_jiff())
}

/// Encode an unsigned value for a `BIGINT` column.
pub(crate) fn to_bigint(col: &str, value: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

/// Encode an optional unsigned value for a `BIGINT` column.
pub(crate) fn to_optional_bigint(col: &str, value: Option<u64>) -> Result<Option<i64>, sqlx::Error> {
    value.map(|value| to_bigint(col, value)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_bigint_rejects_values_beyond_i64() {
        assert!(to_bigint("stock_quantity", u64::MAX).is_err());
        assert_eq!(to_bigint("stock_quantity", 12).ok(), Some(12));
    }

    #[test]
    fn to_optional_bigint_passes_none_through() {
        assert_eq!(to_optional_bigint("stock_quantity", None).ok(), Some(None));
        assert_eq!(to_optional_bigint("stock_quantity", Some(5)).ok(), Some(Some(5)));
    }
}
