use std::fmt;

use serde::Deserialize;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_json::Value;
use serde_json::error::Category;

use crate::error::ExtractError;

/// Wrapper key of a query response.
const DATA_KEY: &str = "data";

/// One row of a percentile query, keyed by column name. Columns keep the
/// order they were received in; values are kept as received so columns that
/// are never plotted may hold anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BucketRow {
    entries: Vec<(String, Value)>,
}

impl BucketRow {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for BucketRow
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut row = BucketRow::new();
        for (key, value) in iter {
            row.insert(key, value);
        }
        row
    }
}

impl<'de> Deserialize<'de> for BucketRow {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = BucketRow;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object mapping column names to values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut row = BucketRow::new();
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    row.insert(key, value);
                }
                Ok(row)
            }
        }

        deserializer.deserialize_map(RowVisitor)
    }
}

/// Rows of a query response: `{"data": [...], ...}` or a bare array.
struct QueryPayload(Vec<BucketRow>);

impl<'de> Deserialize<'de> for QueryPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PayloadVisitor;

        impl<'de> Visitor<'de> for PayloadVisitor {
            type Value = QueryPayload;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an array of rows or an object with a 'data' array")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut rows = Vec::new();
                while let Some(row) = seq.next_element::<BucketRow>()? {
                    rows.push(row);
                }
                Ok(QueryPayload(rows))
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut rows = None;
                while let Some(key) = access.next_key::<String>()? {
                    if key == DATA_KEY {
                        rows = Some(access.next_value::<Vec<BucketRow>>()?);
                    } else {
                        access.next_value::<IgnoredAny>()?;
                    }
                }
                rows.map(QueryPayload)
                    .ok_or_else(|| de::Error::missing_field(DATA_KEY))
            }
        }

        deserializer.deserialize_any(PayloadVisitor)
    }
}

/// Parses a query response, either `{"data": [...]}` or a bare array of rows.
///
/// # Errors
///
/// Returns [`ExtractError::Json`] when the input is not JSON and
/// [`ExtractError::InvalidInput`] when it is JSON of the wrong shape.
pub fn rows_from_json(input: &str) -> Result<Vec<BucketRow>, ExtractError> {
    serde_json::from_str::<QueryPayload>(input)
        .map(|QueryPayload(rows)| rows)
        .map_err(|err| match err.classify() {
            Category::Data => ExtractError::invalid_input(err.to_string()),
            Category::Io | Category::Syntax | Category::Eof => ExtractError::Json { source: err },
        })
}
