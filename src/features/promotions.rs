//! Promotions Page
//!
//! Grade-level promotions awaiting or past approval.

use crate::components::composite::data_table::{Badge, Column, DataTable, DateCell, FilterField, RenderError};
use crate::domain::{CellValue, Promotion};
use crate::error::Result;
use crate::services::{InMemoryRepository, ServiceHub};
use crate::states::{Page, PageActions, PageState};

pub type PromotionsPage = PageState<Promotion, InMemoryRepository<Promotion>>;

/// `8` → `GL 08`
fn grade_level(value: &CellValue, _: &Promotion) -> Result<String, RenderError> {
    let level = value
        .as_f64()
        .ok_or_else(|| RenderError::new(format!("grade is not a number: {value}")))?;
    Ok(format!("GL {:02}", level as u32))
}

pub fn columns() -> Vec<Column<Promotion>> {
    vec![
        Column::new("ippis_number", "IPPIS No.").fixed_width(11),
        Column::new("employee_name", "Employee").sortable(),
        Column::new("from_grade", "From").render_with(grade_level),
        Column::new("to_grade", "To").sortable().render_with(grade_level),
        Column::new("effective_date", "Effective").sortable().render_with(DateCell::default()),
        Column::new("status", "Status").render_with(Badge),
        Column::actions(),
    ]
}

pub fn filters() -> Vec<FilterField> {
    vec![
        FilterField::select(
            "status",
            "Status",
            &[("pending", "Pending"), ("approved", "Approved"), ("rejected", "Rejected")],
        ),
        FilterField::date("effective_date", "Effective date"),
    ]
}

pub fn page(hub: &ServiceHub, items_per_page: usize) -> Result<PromotionsPage> {
    let table = DataTable::new(columns())?
        .with_filters(filters())
        .with_search_fields(&["employee_name", "ippis_number"])
        .items_per_page(items_per_page)
        .items_label("promotions");
    Ok(PageState::new(Page::Promotions, table, PageActions::CRUD, hub.promotions(), hub.sender()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_table::FilterValue;

    #[tokio::test]
    async fn pending_promotions_show_grade_levels() {
        let hub = ServiceHub::with_defaults();
        let mut page = page(&hub, 50).expect("page");
        page.load().await;
        page.table_mut().set_filter("status", FilterValue::Select("pending".into()));

        let view = page.view();
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.rows[0].cells[1].text, "Funke Adeyemi");
        assert_eq!(view.rows[0].cells[2].text, "GL 07");
        assert_eq!(view.rows[0].cells[3].text, "GL 08");
    }

    #[tokio::test]
    async fn search_by_ippis_number() {
        let hub = ServiceHub::with_defaults();
        let mut page = page(&hub, 50).expect("page");
        page.load().await;
        page.table_mut().set_search("ipp-100871");

        let view = page.view();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].cells[1].text, "Musa Bello");
    }
}
