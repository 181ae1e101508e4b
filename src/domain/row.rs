//! Row abstraction consumed by the data table.

use super::{CellValue, RowId};

/// A record displayed by the data table.
///
/// Rows are opaque beyond their id and named field values. `field` returns
/// `None` when the row shape has no field with that key.
pub trait Row {
    fn id(&self) -> RowId;

    fn field(&self, key: &str) -> Option<CellValue>;
}

/// Untyped row, used where records arrive as loose key/value maps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DynamicRow {
    pub id: Option<RowId>,
    pub fields: std::collections::BTreeMap<String, CellValue>,
}

impl DynamicRow {
    pub fn new(id: impl Into<RowId>) -> Self {
        Self {
            id: Some(id.into()),
            fields: Default::default(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

impl Row for DynamicRow {
    fn id(&self) -> RowId {
        self.id.clone().unwrap_or(RowId::Number(0))
    }

    fn field(&self, key: &str) -> Option<CellValue> {
        if key == "id" {
            return self.id.as_ref().map(CellValue::from);
        }
        self.fields.get(key).cloned()
    }
}
