//! Column Definition
//!
//! Defines table columns with their properties and cell renderers.

use crate::constants::ACTIONS_COLUMN_KEY;
use crate::domain::{CellValue, Row};
use snafu::Snafu;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Failure reported by a cell renderer
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(display("render failed: {message}"))]
pub struct RenderError {
    pub message: String,
}

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Maps a raw cell value (and its row) to display text
pub trait CellRenderer<R>: Send + Sync {
    fn render(&self, value: &CellValue, row: &R) -> Result<String, RenderError>;
}

impl<R, F> CellRenderer<R> for F
where
    F: Fn(&CellValue, &R) -> Result<String, RenderError> + Send + Sync,
{
    fn render(&self, value: &CellValue, row: &R) -> Result<String, RenderError> {
        self(value, row)
    }
}

/// Which part of a row a column shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKey {
    /// Bound to a named row field
    Field(String),
    /// No data binding; rendered purely from the row
    Virtual(String),
}

impl ColumnKey {
    pub fn as_str(&self) -> &str {
        match self {
            ColumnKey::Field(key) | ColumnKey::Virtual(key) => key,
        }
    }
}

/// Column width specification (in character cells)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Fixed width
    Fixed(usize),
    /// Fit content within optional bounds
    Flex { min: Option<usize>, max: Option<usize> },
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex {
            min: None,
            max: Some(32),
        }
    }
}

impl ColumnWidth {
    /// Resolve against the widest content in the column
    pub fn resolve(&self, content_width: usize) -> usize {
        match *self {
            ColumnWidth::Fixed(w) => w,
            ColumnWidth::Flex { min, max } => {
                let w = content_width.max(min.unwrap_or(1));
                max.map_or(w, |max| w.min(max))
            }
        }
    }
}

/// Rendered cell text plus whether the renderer failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellOutput {
    pub text: String,
    pub fallback: bool,
}

/// Column definition for the DataTable
pub struct Column<R> {
    /// Column binding
    pub key: ColumnKey,
    /// Column header label
    pub label: String,
    /// Column width
    pub width: ColumnWidth,
    /// Whether the column is sortable
    pub sortable: bool,
    /// Optional cell renderer
    pub render: Option<Box<dyn CellRenderer<R>>>,
}

impl<R: Row> Column<R> {
    /// Create a column bound to a row field
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: ColumnKey::Field(key.into()),
            label: label.into(),
            width: ColumnWidth::default(),
            sortable: false,
            render: None,
        }
    }

    /// Create a column with no data binding
    pub fn virtual_column(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: ColumnKey::Virtual(key.into()),
            ..Self::new("", label)
        }
    }

    /// The per-row action buttons column
    pub fn actions() -> Self {
        Self::virtual_column(ACTIONS_COLUMN_KEY, "Actions")
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: usize) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set flexible width with optional constraints
    pub fn flex_width(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.width = ColumnWidth::Flex { min, max };
        self
    }

    /// Make the column sortable
    pub fn sortable(mut self) -> Self {
        if matches!(self.key, ColumnKey::Field(_)) {
            self.sortable = true;
        }
        self
    }

    /// Use a custom renderer for cells
    pub fn render_with(mut self, renderer: impl CellRenderer<R> + 'static) -> Self {
        self.render = Some(Box::new(renderer));
        self
    }

    pub fn is_virtual(&self) -> bool {
        matches!(self.key, ColumnKey::Virtual(_))
    }

    /// Raw (pre-render) value of this column for a row
    pub fn raw_value(&self, row: &R) -> CellValue {
        match &self.key {
            ColumnKey::Field(key) => row.field(key).unwrap_or_default(),
            ColumnKey::Virtual(_) => CellValue::Null,
        }
    }

    /// Render a cell, containing renderer failures and panics.
    ///
    /// A failing renderer falls back to the raw value's string form.
    pub fn render_cell(&self, row: &R) -> CellOutput {
        let value = self.raw_value(row);
        let Some(renderer) = &self.render else {
            return CellOutput {
                text: value.to_string(),
                fallback: false,
            };
        };

        let outcome = catch_unwind(AssertUnwindSafe(|| renderer.render(&value, row)));
        match outcome {
            Ok(Ok(text)) => CellOutput {
                text,
                fallback: false,
            },
            Ok(Err(e)) => {
                tracing::warn!(column = %self.key.as_str(), row = %row.id(), error = %e, "Cell renderer failed");
                CellOutput {
                    text: value.to_string(),
                    fallback: true,
                }
            }
            Err(_) => {
                tracing::warn!(column = %self.key.as_str(), row = %row.id(), "Cell renderer panicked");
                CellOutput {
                    text: value.to_string(),
                    fallback: true,
                }
            }
        }
    }
}

impl<R> std::fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("custom_render", &self.render.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DynamicRow;

    fn row() -> DynamicRow {
        DynamicRow::new(7).with("name", "Ngozi").with("salary", 250_000.0)
    }

    #[test]
    fn plain_column_uses_string_form() {
        let column = Column::<DynamicRow>::new("salary", "Salary");
        assert_eq!(column.render_cell(&row()).text, "250000");
    }

    #[test]
    fn renderer_error_falls_back_to_raw_value() {
        let column = Column::<DynamicRow>::new("name", "Name")
            .render_with(|_: &CellValue, _: &DynamicRow| -> Result<String, RenderError> {
                Err(RenderError::new("boom"))
            });
        let out = column.render_cell(&row());
        assert_eq!(out.text, "Ngozi");
        assert!(out.fallback);
    }

    #[test]
    fn renderer_panic_is_contained() {
        let column = Column::<DynamicRow>::new("name", "Name").render_with(
            |_: &CellValue, _: &DynamicRow| -> Result<String, RenderError> { panic!("buggy renderer") },
        );
        let out = column.render_cell(&row());
        assert_eq!(out.text, "Ngozi");
        assert!(out.fallback);
    }

    #[test]
    fn virtual_columns_are_never_sortable() {
        let column = Column::<DynamicRow>::actions().sortable();
        assert!(column.is_virtual());
        assert!(!column.sortable);
        assert_eq!(column.raw_value(&row()), CellValue::Null);
    }

    #[test]
    fn flex_width_clamps_to_bounds() {
        let width = ColumnWidth::Flex {
            min: Some(4),
            max: Some(10),
        };
        assert_eq!(width.resolve(2), 4);
        assert_eq!(width.resolve(7), 7);
        assert_eq!(width.resolve(30), 10);
        assert_eq!(ColumnWidth::Fixed(12).resolve(30), 12);
    }
}
