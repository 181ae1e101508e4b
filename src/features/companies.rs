//! Companies Page
//!
//! Registered vendors and contractors.

use crate::components::composite::data_table::{Badge, Column, DataTable, FilterField};
use crate::domain::Company;
use crate::error::Result;
use crate::services::{InMemoryRepository, ServiceHub};
use crate::states::{Page, PageActions, PageState};

pub type CompaniesPage = PageState<Company, InMemoryRepository<Company>>;

pub fn columns() -> Vec<Column<Company>> {
    vec![
        Column::new("name", "Name").sortable(),
        Column::new("registration_number", "RC No.").sortable().fixed_width(10),
        Column::new("email", "Email"),
        Column::new("phone", "Phone"),
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

pub fn page(hub: &ServiceHub, items_per_page: usize) -> Result<CompaniesPage> {
    let table = DataTable::new(columns())?
        .with_filters(filters())
        .with_search_fields(&["name", "registration_number", "email", "address"])
        .items_per_page(items_per_page)
        .items_label("companies");
    Ok(PageState::new(Page::Companies, table, PageActions::CRUD, hub.companies(), hub.sender()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_reaches_unlisted_address_field() {
        let hub = ServiceHub::with_defaults();
        let mut page = page(&hub, 50).expect("page");
        page.load().await;
        page.table_mut().set_search("port harcourt");

        let view = page.view();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].cells[0].text, "Coolair Engineering");
    }
}
