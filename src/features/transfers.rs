//! Transfers Page
//!
//! Staff postings between offices.

use crate::components::composite::data_table::{Badge, Column, DataTable, DateCell, FilterField, RenderError};
use crate::domain::{CellValue, Transfer};
use crate::error::Result;
use crate::services::{InMemoryRepository, ServiceHub};
use crate::states::{Page, PageActions, PageState};

pub type TransfersPage = PageState<Transfer, InMemoryRepository<Transfer>>;

pub fn columns() -> Vec<Column<Transfer>> {
    vec![
        Column::new("employee_name", "Employee").sortable(),
        Column::new("ippis_number", "IPPIS No.").fixed_width(11),
        Column::virtual_column("route", "Route").render_with(
            |_: &CellValue, row: &Transfer| -> Result<String, RenderError> {
                Ok(format!("{} → {}", row.from_location, row.to_location))
            },
        ),
        Column::new("transfer_date", "Date").sortable().render_with(DateCell::default()),
        Column::new("reason", "Reason").flex_width(None, Some(28)),
        Column::new("status", "Status").render_with(Badge),
        Column::actions(),
    ]
}

pub fn filters() -> Vec<FilterField> {
    vec![
        FilterField::select(
            "status",
            "Status",
            &[
                ("pending", "Pending"),
                ("approved", "Approved"),
                ("completed", "Completed"),
                ("rejected", "Rejected"),
            ],
        ),
        FilterField::text("from_location", "From"),
        FilterField::text("to_location", "To"),
        FilterField::date("transfer_date", "Transfer date"),
    ]
}

pub fn page(hub: &ServiceHub, items_per_page: usize) -> Result<TransfersPage> {
    let table = DataTable::new(columns())?
        .with_filters(filters())
        .with_search_fields(&["employee_name", "ippis_number", "from_location", "to_location", "reason"])
        .items_per_page(items_per_page)
        .items_label("transfers");
    Ok(PageState::new(Page::Transfers, table, PageActions::CRUD, hub.transfers(), hub.sender()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_table::FilterValue;

    #[tokio::test]
    async fn transfers_into_abuja() {
        let hub = ServiceHub::with_defaults();
        let mut page = page(&hub, 50).expect("page");
        page.load().await;
        page.table_mut().set_filter("to_location", FilterValue::Text("abuja".into()));

        let view = page.view();
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].cells[2].text, "Lagos Branch → Abuja HQ");
        assert_eq!(view.rows[1].cells[4].text, "Promotion posting");
    }

    #[tokio::test]
    async fn missing_reason_renders_blank() {
        let hub = ServiceHub::with_defaults();
        let mut page = page(&hub, 50).expect("page");
        page.load().await;
        page.table_mut().set_search("Segun");

        assert_eq!(page.view().rows[0].cells[4].text, "");
    }
}
