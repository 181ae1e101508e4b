//! Projects Page
//!
//! Contracted projects with their budgets and timelines.

use crate::components::composite::data_table::{Badge, Column, Currency, DataTable, DateCell, FilterField};
use crate::domain::Project;
use crate::error::Result;
use crate::services::{InMemoryRepository, ServiceHub};
use crate::states::{Page, PageActions, PageState};

pub type ProjectsPage = PageState<Project, InMemoryRepository<Project>>;

pub fn columns() -> Vec<Column<Project>> {
    vec![
        Column::new("code", "Code").sortable().fixed_width(8),
        Column::new("name", "Name").sortable(),
        Column::new("company", "Company").sortable(),
        Column::new("budget", "Budget").sortable().render_with(Currency::naira()),
        Column::new("start_date", "Start").sortable().render_with(DateCell::default()),
        Column::new("end_date", "End").sortable().render_with(DateCell::default()),
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
                ("planned", "Planned"),
                ("active", "Active"),
                ("on_hold", "On hold"),
                ("completed", "Completed"),
            ],
        ),
        FilterField::text("company", "Company"),
        FilterField::date("start_date", "Start date"),
    ]
}

pub fn page(hub: &ServiceHub, items_per_page: usize) -> Result<ProjectsPage> {
    let table = DataTable::new(columns())?
        .with_filters(filters())
        .with_search_fields(&["code", "name", "company"])
        .items_per_page(items_per_page)
        .items_label("projects");
    Ok(PageState::new(Page::Projects, table, PageActions::CRUD, hub.projects(), hub.sender()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_table::FilterValue;

    #[tokio::test]
    async fn open_ended_projects_render_blank_end_date() {
        let hub = ServiceHub::with_defaults();
        let mut page = page(&hub, 50).expect("page");
        page.load().await;
        page.table_mut().set_filter("company", FilterValue::Text("sigma".into()));
        page.table_mut().toggle_sort("start_date");

        let view = page.view();
        let codes: Vec<&str> = view.rows.iter().map(|r| r.cells[0].text.as_str()).collect();
        assert_eq!(codes, vec!["PRJ-001", "PRJ-004", "PRJ-010"]);
        assert_eq!(view.rows[1].cells[5].text, "");
        assert_eq!(view.rows[1].cells[3].text, "NGN 76,000,000.00");
        assert_eq!(view.render_failures, 0);
    }
}
