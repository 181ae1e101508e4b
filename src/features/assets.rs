//! Assets Page
//!
//! Government asset register: vehicles, equipment, furniture.

use crate::components::composite::data_table::{Badge, Column, Currency, DataTable, DateCell, FilterField};
use crate::domain::Asset;
use crate::error::Result;
use crate::services::{InMemoryRepository, ServiceHub};
use crate::states::{Page, PageActions, PageState};

pub type AssetsPage = PageState<Asset, InMemoryRepository<Asset>>;

pub const SEARCH_FIELDS: &[&str] = &["asset_tag", "name", "category", "location"];

pub fn columns() -> Vec<Column<Asset>> {
    vec![
        Column::new("asset_tag", "Tag").sortable().fixed_width(9),
        Column::new("name", "Name").sortable(),
        Column::new("category", "Category").sortable(),
        Column::new("location", "Location"),
        Column::new("status", "Status").render_with(Badge),
        Column::new("purchase_date", "Purchased").sortable().render_with(DateCell::default()),
        Column::new("value", "Value").sortable().render_with(Currency::naira()),
        Column::actions(),
    ]
}

pub fn filters() -> Vec<FilterField> {
    vec![
        FilterField::select(
            "status",
            "Status",
            &[("active", "Active"), ("in_maintenance", "In maintenance"), ("retired", "Retired")],
        ),
        FilterField::text("category", "Category"),
        FilterField::text("location", "Location"),
        FilterField::date("purchase_date", "Purchase date"),
    ]
}

pub fn page(hub: &ServiceHub, items_per_page: usize) -> Result<AssetsPage> {
    let table = DataTable::new(columns())?
        .with_filters(filters())
        .with_search_fields(SEARCH_FIELDS)
        .items_per_page(items_per_page)
        .items_label("assets")
        .empty_message("No assets found");
    Ok(PageState::new(Page::Assets, table, PageActions::CRUD, hub.assets(), hub.sender()))
}
