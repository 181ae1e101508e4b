//! Locations Page

use crate::components::composite::data_table::{Badge, Column, DataTable, FilterField};
use crate::domain::Location;
use crate::error::Result;
use crate::services::{InMemoryRepository, ServiceHub};
use crate::states::{Page, PageActions, PageState};

pub type LocationsPage = PageState<Location, InMemoryRepository<Location>>;

pub fn columns() -> Vec<Column<Location>> {
    vec![
        Column::new("code", "Code").sortable().fixed_width(7),
        Column::new("name", "Name").sortable(),
        Column::new("state", "State").sortable(),
        Column::new("address", "Address"),
        Column::new("location_type", "Type").render_with(Badge),
        Column::actions(),
    ]
}

pub fn filters() -> Vec<FilterField> {
    vec![
        FilterField::select(
            "location_type",
            "Type",
            &[("headquarters", "Headquarters"), ("branch", "Branch"), ("field_office", "Field office")],
        ),
        FilterField::text("state", "State"),
    ]
}

pub fn page(hub: &ServiceHub, items_per_page: usize) -> Result<LocationsPage> {
    let table = DataTable::new(columns())?
        .with_filters(filters())
        .items_per_page(items_per_page)
        .items_label("locations");
    Ok(PageState::new(Page::Locations, table, PageActions::CRUD, hub.locations(), hub.sender()))
}
