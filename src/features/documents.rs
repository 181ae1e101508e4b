//! Documents Page
//!
//! Uploaded files with free-form metadata.

use crate::components::composite::data_table::{Column, DataTable, DateCell, FilterField, RenderError};
use crate::domain::{CellValue, Document};
use crate::error::Result;
use crate::services::{InMemoryRepository, ServiceHub};
use crate::states::{Page, PageActions, PageState};

pub type DocumentsPage = PageState<Document, InMemoryRepository<Document>>;

fn file_size(value: &CellValue, _: &Document) -> Result<String, RenderError> {
    let kb = value
        .as_f64()
        .ok_or_else(|| RenderError::new(format!("size is not a number: {value}")))?;
    if kb >= 1024.0 {
        Ok(format!("{:.1} MB", kb / 1024.0))
    } else {
        Ok(format!("{kb:.0} KB"))
    }
}

fn metadata(value: &CellValue, _: &Document) -> Result<String, RenderError> {
    match value {
        CellValue::Object(map) => Ok(map
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(", ")),
        CellValue::Null => Ok(String::new()),
        other => Err(RenderError::new(format!("metadata is not an object: {other}"))),
    }
}

pub fn columns() -> Vec<Column<Document>> {
    vec![
        Column::new("id", "ID").sortable().fixed_width(8),
        Column::new("title", "Title").sortable(),
        Column::new("category", "Category").sortable(),
        Column::new("owner", "Owner"),
        Column::new("uploaded_at", "Uploaded").sortable().render_with(DateCell::with_time()),
        Column::new("size_kb", "Size").sortable().render_with(file_size),
        Column::new("metadata", "Metadata").render_with(metadata),
        Column::actions(),
    ]
}

pub fn filters() -> Vec<FilterField> {
    vec![
        FilterField::select(
            "category",
            "Category",
            &[
                ("policy", "Policy"),
                ("report", "Report"),
                ("letter", "Letter"),
                ("contract", "Contract"),
                ("schedule", "Schedule"),
                ("certificate", "Certificate"),
            ],
        ),
        FilterField::text("owner", "Owner"),
        FilterField::date("uploaded_at", "Uploaded"),
    ]
}

pub fn page(hub: &ServiceHub, items_per_page: usize) -> Result<DocumentsPage> {
    let table = DataTable::new(columns())?
        .with_filters(filters())
        .with_search_fields(&["title", "owner", "metadata"])
        .items_per_page(items_per_page)
        .items_label("documents");
    Ok(PageState::new(Page::Documents, table, PageActions::CRUD, hub.documents(), hub.sender()))
}
