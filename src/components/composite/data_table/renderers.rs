//! Cell Renderers
//!
//! Stock renderers shared by the admin pages.

use super::column::{CellRenderer, RenderError};
use crate::domain::CellValue;
use crate::helpers::{format_amount, parse_date_like};

/// Status badge, e.g. `in_maintenance` → `[In Maintenance]`
#[derive(Debug, Clone, Copy, Default)]
pub struct Badge;

impl<R> CellRenderer<R> for Badge {
    fn render(&self, value: &CellValue, _row: &R) -> Result<String, RenderError> {
        let raw = match value {
            CellValue::Null => return Ok(String::new()),
            CellValue::Text(text) => text.as_str(),
            other => return Err(RenderError::new(format!("not a status: {other}"))),
        };
        let label = raw
            .split(['_', '-', ' '])
            .filter(|w| !w.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ");
        Ok(format!("[{label}]"))
    }
}

/// Monetary amount with thousands separators
#[derive(Debug, Clone)]
pub struct Currency {
    pub code: String,
}

impl Currency {
    pub fn naira() -> Self {
        Self { code: "NGN".into() }
    }
}

impl<R> CellRenderer<R> for Currency {
    fn render(&self, value: &CellValue, _row: &R) -> Result<String, RenderError> {
        if value.is_null() {
            return Ok(String::new());
        }
        let amount = value
            .as_f64()
            .ok_or_else(|| RenderError::new(format!("not an amount: {value}")))?;
        Ok(format_amount(&self.code, amount))
    }
}

/// Date in a display format (default `%d %b %Y`)
#[derive(Debug, Clone)]
pub struct DateCell {
    pub format: &'static str,
}

impl Default for DateCell {
    fn default() -> Self {
        Self { format: "%d %b %Y" }
    }
}

impl DateCell {
    pub fn with_time() -> Self {
        Self {
            format: "%d %b %Y %H:%M",
        }
    }
}

impl<R> CellRenderer<R> for DateCell {
    fn render(&self, value: &CellValue, _row: &R) -> Result<String, RenderError> {
        let Some(text) = value.as_str() else {
            return if value.is_null() {
                Ok(String::new())
            } else {
                Err(RenderError::new(format!("not a date: {value}")))
            };
        };
        let date = parse_date_like(text).ok_or_else(|| RenderError::new(format!("not a date: {text}")))?;
        Ok(date.format(self.format).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DynamicRow;

    fn row() -> DynamicRow {
        DynamicRow::new(1)
    }

    #[test]
    fn badge_title_cases_status() {
        let out = Badge.render(&CellValue::from("in_maintenance"), &row());
        assert_eq!(out, Ok("[In Maintenance]".to_string()));
        assert_eq!(Badge.render(&CellValue::Null, &row()), Ok(String::new()));
        assert!(Badge.render(&CellValue::from(3), &row()).is_err());
    }

    #[test]
    fn currency_formats_and_rejects_text() {
        let naira = Currency::naira();
        assert_eq!(
            naira.render(&CellValue::from(1_250_000.0), &row()),
            Ok("NGN 1,250,000.00".to_string())
        );
        assert!(naira.render(&CellValue::from("lots"), &row()).is_err());
    }

    #[test]
    fn date_cell_reformats_and_fails_on_garbage() {
        let date = DateCell::default();
        assert_eq!(
            date.render(&CellValue::from("2024-03-05"), &row()),
            Ok("05 Mar 2024".to_string())
        );
        assert!(date.render(&CellValue::from("soon"), &row()).is_err());
        assert_eq!(
            DateCell::with_time().render(&CellValue::from("2024-03-05T09:15:00"), &row()),
            Ok("05 Mar 2024 09:15".to_string())
        );
    }
}
