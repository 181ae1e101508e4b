//! Form values, validation errors and typed form parsing.

use super::RowId;
use crate::helpers::parse_date_like;
use std::collections::BTreeMap;
use std::fmt;

/// Raw form input keyed by field name.
pub type FormValues = BTreeMap<String, String>;

/// A single inline validation message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Ordered validation failures, at most one per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure unless the field already has one.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        if self.for_field(field).is_none() {
            self.0.push(FieldError {
                field: field.to_string(),
                message: message.into(),
            });
        }
    }

    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

/// Turn `start_date` into `Start date`.
pub fn humanize_field(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Check that every required field has a non-blank value.
pub fn check_required(values: &FormValues, required: &[&str]) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for field in required {
        let blank = values.get(*field).is_none_or(|v| v.trim().is_empty());
        if blank {
            errors.add(field, format!("{} is required", humanize_field(field)));
        }
    }
    errors
}

/// A record that can be edited through a dialog form.
pub trait EntityForm: Sized {
    /// Fields that must be non-blank before submission.
    const REQUIRED: &'static [&'static str];

    /// Parse validated form input into a typed record.
    fn from_form(id: Option<RowId>, values: &FormValues) -> Result<Self, ValidationErrors>;

    /// Project a record back into form input (edit/view dialogs).
    fn to_form(&self) -> FormValues;

    /// Initial values for an empty Add dialog.
    fn defaults() -> FormValues {
        FormValues::new()
    }
}

/// Accumulating reader used by `EntityForm::from_form` implementations.
pub struct FormReader<'a> {
    values: &'a FormValues,
    errors: ValidationErrors,
}

impl<'a> FormReader<'a> {
    pub fn new(values: &'a FormValues, required: &[&str]) -> Self {
        Self {
            values,
            errors: check_required(values, required),
        }
    }

    fn raw(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn text(&self, key: &str) -> String {
        self.raw(key).unwrap_or_default().to_string()
    }

    pub fn opt_text(&self, key: &str) -> Option<String> {
        self.raw(key).map(str::to_string)
    }

    pub fn number(&mut self, key: &str) -> Option<f64> {
        let raw = self.raw(key)?.replace(',', "");
        match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => Some(n),
            _ => {
                self.errors
                    .add(key, format!("{} must be a number", humanize_field(key)));
                None
            }
        }
    }

    pub fn integer(&mut self, key: &str) -> Option<u32> {
        let raw = self.raw(key)?;
        match raw.parse::<u32>() {
            Ok(n) => Some(n),
            Err(_) => {
                self.errors.add(
                    key,
                    format!("{} must be a whole number", humanize_field(key)),
                );
                None
            }
        }
    }

    /// Parse a date and normalize it to `YYYY-MM-DD`.
    pub fn date(&mut self, key: &str) -> Option<String> {
        let raw = self.raw(key)?;
        match parse_date_like(raw) {
            Some(dt) => Some(dt.date().format("%Y-%m-%d").to_string()),
            None => {
                self.errors
                    .add(key, format!("{} must be a valid date", humanize_field(key)));
                None
            }
        }
    }

    /// Value restricted to `allowed`; blank falls back to `default`.
    pub fn choice(&mut self, key: &str, allowed: &[&str], default: &str) -> String {
        match self.raw(key) {
            None => default.to_string(),
            Some(v) if allowed.contains(&v) => v.to_string(),
            Some(_) => {
                self.errors.add(
                    key,
                    format!("{} must be one of: {}", humanize_field(key), allowed.join(", ")),
                );
                default.to_string()
            }
        }
    }

    pub fn error(&mut self, key: &str, message: impl Into<String>) {
        self.errors.add(key, message);
    }

    pub fn finish<T>(self, value: T) -> Result<T, ValidationErrors> {
        self.errors.into_result().map(|()| value)
    }
}

/// Build form values from pairs.
pub fn form<const N: usize>(pairs: [(&str, &str); N]) -> FormValues {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_report_blank_values() {
        let values = form([("name", "  "), ("code", "HQ")]);
        let errors = check_required(&values, &["name", "code", "start_date"]);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.for_field("name"), Some("Name is required"));
        assert_eq!(errors.for_field("start_date"), Some("Start date is required"));
        assert_eq!(errors.for_field("code"), None);
    }

    #[test]
    fn first_error_per_field_wins() {
        let values = form([("amount", "")]);
        let mut reader = FormReader::new(&values, &["amount"]);
        reader.error("amount", "second");

        let errors = reader.finish(()).expect_err("blank amount");
        assert_eq!(errors.for_field("amount"), Some("Amount is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn reader_parses_typed_fields() {
        let values = form([
            ("amount", "1,200.50"),
            ("grade", "12"),
            ("date", "2024-05-01T09:00:00"),
            ("status", "active"),
        ]);
        let mut reader = FormReader::new(&values, &[]);

        assert_eq!(reader.number("amount"), Some(1200.5));
        assert_eq!(reader.integer("grade"), Some(12));
        assert_eq!(reader.date("date").as_deref(), Some("2024-05-01"));
        assert_eq!(reader.choice("status", &["active", "inactive"], "active"), "active");
        assert!(reader.finish(()).is_ok());
    }

    #[test]
    fn reader_reports_type_errors() {
        let values = form([("amount", "lots"), ("date", "soon"), ("status", "gone")]);
        let mut reader = FormReader::new(&values, &[]);
        reader.number("amount");
        reader.date("date");
        reader.choice("status", &["active"], "active");

        let errors = reader.finish(()).expect_err("invalid input");
        assert_eq!(errors.for_field("amount"), Some("Amount must be a number"));
        assert_eq!(errors.for_field("date"), Some("Date must be a valid date"));
        assert!(errors.for_field("status").is_some());
    }
}
