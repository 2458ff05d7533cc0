//! Duration percentile buckets: query columns in, ordered chart series out.
//!
//! A percentile query returns a single row whose column names end in the
//! percentile they measure (`..._0_50`, `..._0_999`, `p100`). [`extract`] reads
//! those suffixes back into [`Percentile`] labels and orders the values for
//! plotting.
mod percentile;
mod row;


use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::ExtractError;

pub use percentile::Percentile;
pub use row::{BucketRow, rows_from_json};

/// Column measured when no span operation is selected.
pub const DEFAULT_DURATION_FIELD: &str = "transaction.duration";
/// Series title used for the percentile chart.
pub const SERIES_NAME: &str = "Duration";

const PERCENTILE_ARGS: [&str; 9] = [
    "0.10", "0.25", "0.50", "0.75", "0.90", "0.95", "0.99", "0.995", "0.999",
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExtractedBucket {
    pub label: Percentile,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentileSeries {
    pub series_name: String,
    pub data: Vec<SeriesPoint>,
}

/// Query columns for the percentile chart. `field` selects a span operation
/// breakdown column; `None` measures the whole transaction.
#[must_use]
pub fn percentile_fields(field: Option<&str>) -> Vec<String> {
    let (column, p100) = match field {
        Some(field) => (field, format!("p100({})", field)),
        None => (DEFAULT_DURATION_FIELD, "p100()".to_owned()),
    };
    PERCENTILE_ARGS
        .iter()
        .map(|arg| format!("percentile({}, {})", column, arg))
        .chain(std::iter::once(p100))
        .collect()
}

/// Extracts the percentile buckets of the first row, ordered by label.
///
/// Columns without a trailing number and labels of zero are dropped whatever
/// they hold. A percentile column with a `null` value has no data and is
/// skipped. Equal labels keep their column order.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidInput`] when there is no row, the first row
/// has no columns, or a percentile column holds something other than a number,
/// and [`ExtractError::UnsupportedSuffix`] when a column ends in more than
/// three digits.
pub fn extract(rows: &[BucketRow]) -> Result<Vec<ExtractedBucket>, ExtractError> {
    let row = rows
        .first()
        .ok_or_else(|| ExtractError::invalid_input("query returned no rows"))?;
    if row.is_empty() {
        return Err(ExtractError::invalid_input("first row has no columns"));
    }

    let mut buckets = Vec::with_capacity(row.len());
    for (key, value) in row.iter() {
        let label = match Percentile::from_key(key)? {
            Some(label) if label.is_positive() => label,
            Some(_) | None => {
                debug!("Skipping non-percentile column '{}'", key);
                continue;
            }
        };
        match value {
            Value::Number(number) => {
                let measured = number.as_f64().ok_or_else(|| {
                    ExtractError::invalid_input(format!(
                        "column '{}' holds {} which is not representable as a float",
                        key, number
                    ))
                })?;
                buckets.push(ExtractedBucket {
                    label,
                    value: measured,
                });
            }
            Value::Null => debug!("Percentile column '{}' has no data", key),
            Value::Bool(_) | Value::String(_) | Value::Array(_) | Value::Object(_) => {
                return Err(ExtractError::invalid_input(format!(
                    "column '{}' holds {} instead of a number",
                    key, value
                )));
            }
        }
    }
    buckets.sort_by_key(|bucket| bucket.label);

    Ok(buckets)
}

/// Shapes extracted buckets into a named chart series with `NN%` labels.
#[must_use]
pub fn to_series(buckets: &[ExtractedBucket]) -> PercentileSeries {
    PercentileSeries {
        series_name: SERIES_NAME.to_owned(),
        data: buckets
            .iter()
            .map(|bucket| SeriesPoint {
                name: bucket.label.label(),
                value: bucket.value,
            })
            .collect(),
    }
}
