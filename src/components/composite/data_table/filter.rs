//! Filter Definitions
//!
//! User-facing filter descriptors and the predicates derived from their values.

use crate::domain::CellValue;
use crate::helpers::{contains_ignore_case, parse_date_like};
use chrono::NaiveDate;

/// One `value, label` pair of a select filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// How a filter is presented and matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterKind {
    /// Case-insensitive substring
    Text,
    /// Exact match against one of the options
    Select { options: Vec<SelectOption> },
    /// Inclusive `from`/`to` date range
    Date,
}

/// Describes one filterable field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterField {
    pub name: String,
    pub label: String,
    pub kind: FilterKind,
}

impl FilterField {
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: FilterKind::Text,
        }
    }

    pub fn select(name: impl Into<String>, label: impl Into<String>, options: &[(&str, &str)]) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: FilterKind::Select {
                options: options
                    .iter()
                    .map(|(value, label)| SelectOption::new(*value, *label))
                    .collect(),
            },
        }
    }

    pub fn date(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: FilterKind::Date,
        }
    }
}

/// Current value of one filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Select(String),
    DateRange {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl FilterValue {
    /// Whether this value constrains anything
    pub fn is_active(&self) -> bool {
        match self {
            FilterValue::Text(text) | FilterValue::Select(text) => !text.trim().is_empty(),
            FilterValue::DateRange { from, to } => from.is_some() || to.is_some(),
        }
    }

    /// Test a row's field value.
    ///
    /// `None` means the row has no such field; that always passes.
    pub fn matches(&self, value: Option<&CellValue>) -> bool {
        let Some(value) = value else {
            return true;
        };
        if !self.is_active() {
            return true;
        }

        match self {
            FilterValue::Text(needle) => contains_ignore_case(&value.to_string(), needle),
            FilterValue::Select(expected) => value.to_string() == *expected,
            FilterValue::DateRange { from, to } => {
                let Some(date) = value
                    .as_str()
                    .and_then(parse_date_like)
                    .map(|dt| dt.date())
                else {
                    return false;
                };
                from.is_none_or(|from| date >= from) && to.is_none_or(|to| date <= to)
            }
        }
    }
}
