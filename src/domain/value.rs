//! Cell values and row identifiers.

use crate::helpers::parse_date_like;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Stable identifier of a row within one dataset.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Number(i64),
    Text(String),
}

impl RowId {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            RowId::Number(n) => Some(*n),
            RowId::Text(_) => None,
        }
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Number(n) => write!(f, "{n}"),
            RowId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RowId {
    fn from(n: i64) -> Self {
        RowId::Number(n)
    }
}

impl From<i32> for RowId {
    fn from(n: i32) -> Self {
        RowId::Number(i64::from(n))
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        RowId::Text(s.to_string())
    }
}

impl From<String> for RowId {
    fn from(s: String) -> Self {
        RowId::Text(s)
    }
}

/// Raw (pre-render) value of one row field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Object(BTreeMap<String, CellValue>),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Compare two raw values for sorting.
    ///
    /// Values are ranked by kind first: null, bools, numbers, date-like
    /// text, other text, objects. Within a rank numbers compare
    /// numerically, dates as parsed dates and text case-sensitively, so
    /// mixed columns still get a total order.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        let (a, b) = (self.sort_key(), other.sort_key());
        match (&a, &b) {
            (SortKey::Bool(x), SortKey::Bool(y)) => x.cmp(y),
            (SortKey::Number(x), SortKey::Number(y)) => x.total_cmp(y),
            (SortKey::Date(x), SortKey::Date(y)) => x.cmp(y),
            (SortKey::Text(x), SortKey::Text(y)) => x.cmp(y),
            (SortKey::Object(x), SortKey::Object(y)) => x.cmp(y),
            _ => a.rank().cmp(&b.rank()),
        }
    }

    fn sort_key(&self) -> SortKey<'_> {
        match self {
            CellValue::Null => SortKey::Null,
            CellValue::Bool(b) => SortKey::Bool(*b),
            CellValue::Number(n) => SortKey::Number(*n),
            CellValue::Text(s) => parse_date_like(s).map_or(SortKey::Text(s), SortKey::Date),
            CellValue::Object(_) => SortKey::Object(self.to_string()),
        }
    }
}

enum SortKey<'a> {
    Null,
    Bool(bool),
    Number(f64),
    Date(NaiveDateTime),
    Text(&'a str),
    Object(String),
}

impl SortKey<'_> {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Null => 0,
            SortKey::Bool(_) => 1,
            SortKey::Number(_) => 2,
            SortKey::Date(_) => 3,
            SortKey::Text(_) => 4,
            SortKey::Object(_) => 5,
        }
    }
}

/// String form used for display fallbacks, search and select filters.
///
/// `Null` renders as an empty string.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Object(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<&String> for CellValue {
    fn from(s: &String) -> Self {
        CellValue::Text(s.clone())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(f64::from(n))
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Number(f64::from(n))
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<&RowId> for CellValue {
    fn from(id: &RowId) -> Self {
        match id {
            RowId::Number(n) => CellValue::from(*n),
            RowId::Text(s) => CellValue::Text(s.clone()),
        }
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Null, Into::into)
    }
}

impl From<serde_json::Value> for CellValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => CellValue::Null,
            serde_json::Value::Bool(b) => CellValue::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(CellValue::Null, CellValue::Number),
            serde_json::Value::String(s) => CellValue::Text(s),
            serde_json::Value::Array(items) => CellValue::Text(
                items
                    .into_iter()
                    .map(|item| CellValue::from(item).to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            serde_json::Value::Object(map) => CellValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, CellValue::from(value)))
                    .collect(),
            ),
        }
    }
}
