//! Maintenance Types Page

use crate::components::composite::data_table::{Badge, Column, DataTable, FilterField, RenderError};
use crate::domain::{CellValue, MaintenanceType};
use crate::error::Result;
use crate::services::{InMemoryRepository, ServiceHub};
use crate::states::{Page, PageActions, PageState};

pub type MaintenanceTypesPage = PageState<MaintenanceType, InMemoryRepository<MaintenanceType>>;

pub fn columns() -> Vec<Column<MaintenanceType>> {
    vec![
        Column::new("name", "Name").sortable(),
        Column::new("description", "Description").flex_width(Some(12), Some(40)),
        Column::new("interval_days", "Interval").sortable().render_with(
            |value: &CellValue, _: &MaintenanceType| -> Result<String, RenderError> {
                match value.as_f64() {
                    Some(days) if days == 1.0 => Ok("Daily".into()),
                    Some(days) => Ok(format!("Every {days} days")),
                    None => Err(RenderError::new("interval is not a number")),
                }
            },
        ),
        Column::new("status", "Status").render_with(Badge),
        Column::actions(),
    ]
}

pub fn filters() -> Vec<FilterField> {
    vec![FilterField::select(
        "status",
        "Status",
        &[("active", "Active"), ("inactive", "Inactive")],
    )]
}

pub fn page(hub: &ServiceHub, items_per_page: usize) -> Result<MaintenanceTypesPage> {
    let table = DataTable::new(columns())?
        .with_filters(filters())
        .with_search_fields(&["name", "description"])
        .items_per_page(items_per_page)
        .items_label("maintenance types");
    Ok(PageState::new(
        Page::MaintenanceTypes,
        table,
        PageActions::CRUD,
        hub.maintenance_types(),
        hub.sender(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn interval_renders_as_text() {
        let hub = ServiceHub::with_defaults();
        let mut page = page(&hub, 50).expect("page");
        page.load().await;
        page.table_mut().set_search("elevator");

        let view = page.view();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].cells[2].text, "Every 30 days");
        assert_eq!(view.rows[0].cells[3].text, "[Active]");
    }
}
