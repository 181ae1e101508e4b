//! Console View
//!
//! Paints table, dialog and notification display models as plain text.
//!
//! ```text
//! Tag       │ Name            │ Status
//! ──────────┼─────────────────┼──────────
//! AST-001   │ Toyota Hilux    │ [Active]
//!
//! Showing 1-12 · 12 assets · page 1 / 1
//! ```

use std::fmt::Write;

use crate::components::composite::data_table::TableView;
use crate::components::composite::modal::DialogView;
use crate::helpers::truncate;
use crate::states::{NotificationSeverity, UiEvent};

const SEPARATOR: &str = " │ ";

fn width_of(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let fill = width.saturating_sub(width_of(&text));
    format!("{text}{}", " ".repeat(fill))
}

/// Resolve every column's width against its header and cell contents
fn column_widths(view: &TableView) -> Vec<usize> {
    view.headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let header_width = width_of(&header_label(view, i));
            let content = view
                .rows
                .iter()
                .filter_map(|row| row.cells.get(i))
                .map(|cell| width_of(&cell.text))
                .max()
                .unwrap_or(0);
            header.width.resolve(content.max(header_width))
        })
        .collect()
}

fn header_label(view: &TableView, index: usize) -> String {
    let header = &view.headers[index];
    match header.sort {
        Some(direction) => format!("{} {}", header.label, direction.arrow()),
        None => header.label.clone(),
    }
}

/// Render a table with its pagination footer
pub fn render_table(view: &TableView) -> String {
    let widths = column_widths(view);
    let mut out = String::new();

    let header = (0..view.headers.len())
        .map(|i| pad(&header_label(view, i), widths[i]))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let _ = writeln!(out, "{}", header.trim_end());

    let rule = widths.iter().map(|w| "─".repeat(*w)).collect::<Vec<_>>().join("─┼─");
    let _ = writeln!(out, "{rule}");

    if let Some(message) = &view.empty_message {
        let _ = writeln!(out, "{message}");
    }

    for row in &view.rows {
        let line = row
            .cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let text = if cell.fallback { format!("{}*", cell.text) } else { cell.text.clone() };
                pad(&text, *width)
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        let _ = writeln!(out, "{}", line.trim_end());
    }

    if view.show_pagination {
        let _ = writeln!(out);
        let label = view.pagination.label(&view.items_label);
        match view.pagination.showing() {
            Some((first, last)) => {
                let _ = writeln!(out, "Showing {first}-{last} · {label}");
            }
            None => {
                let _ = writeln!(out, "{label}");
            }
        }
    }
    if view.render_failures > 0 {
        let _ = writeln!(out, "* {} cell(s) shown raw", view.render_failures);
    }
    out
}

/// Render an open dialog
pub fn render_dialog(view: &DialogView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", view.title);
    if let Some(message) = &view.message {
        let _ = writeln!(out, "{message}");
    }

    let label_width = view.fields.iter().map(|f| width_of(&f.label) + 1).max().unwrap_or(0);
    for field in &view.fields {
        let marker = if field.required && !view.read_only { "*" } else { "" };
        let label = format!("{}{marker}", field.label);
        let _ = writeln!(out, "{} : {}", pad(&label, label_width), field.value);
        if let Some(error) = &field.error {
            let _ = writeln!(out, "{}   ! {error}", " ".repeat(label_width));
        }
    }

    if let Some(error) = &view.error {
        let _ = writeln!(out, "! {error}");
    }

    let mut buttons = Vec::new();
    if let Some(label) = view.submit_label {
        buttons.push(if view.submit_enabled { format!("[{label}]") } else { format!("({label})") });
    }
    let close = if view.read_only { "Close" } else { "Cancel" };
    buttons.push(if view.cancel_enabled { format!("[{close}]") } else { format!("({close})") });
    let _ = writeln!(out, "{}", buttons.join(" "));
    out
}

/// One-line form of a UI event, or `None` for events with nothing to show
pub fn render_event(event: &UiEvent) -> Option<String> {
    match event {
        UiEvent::Toast { message, severity } => {
            let tag = match severity {
                NotificationSeverity::Info => "info",
                NotificationSeverity::Success => "ok",
                NotificationSeverity::Warning => "warn",
                NotificationSeverity::Error => "error",
            };
            Some(format!("[{tag}] {message}"))
        }
        UiEvent::ErrorOccurred { source, message } => Some(format!("[error] {source}: {message}")),
        UiEvent::Progress { task, percent } => Some(format!("{task}: {percent}%")),
        UiEvent::LoadingChanged {
            message: Some(message),
            loading: true,
            ..
        } => Some(format!("{message}…")),
        UiEvent::LoadingChanged { .. } | UiEvent::Intent { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_table::{Column, DataTable, FilterValue};
    use crate::components::composite::modal::Dialog;
    use crate::domain::{Company, DynamicRow, Location};
    use crate::services::fixtures;

    fn people() -> Vec<DynamicRow> {
        ["Ada", "Bayo", "Chika"]
            .into_iter()
            .zip(1..)
            .map(|(name, id)| DynamicRow::new(id).with("name", name))
            .collect()
    }

    #[test]
    fn table_has_header_rule_rows_and_footer() {
        let mut table: DataTable<DynamicRow> = DataTable::new(vec![Column::new("name", "Name").sortable()])
            .expect("table")
            .items_per_page(2)
            .items_label("people");
        table.toggle_sort("name");

        let text = render_table(&table.view(&people()));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Name ▲");
        assert!(lines[1].starts_with("──────"));
        assert_eq!(&lines[2..4], &["Ada", "Bayo"]);
        assert_eq!(lines[5], "Showing 1-2 · 3 people · page 1 / 2");
    }

    #[test]
    fn empty_table_prints_message_without_footer() {
        let mut table: DataTable<DynamicRow> = DataTable::new(vec![Column::new("name", "Name")])
            .expect("table")
            .empty_message("Nobody here");
        table.set_filter("name", FilterValue::Text("zed".into()));

        let text = render_table(&table.view(&people()));
        assert!(text.contains("Nobody here"));
        assert!(!text.contains("page"));
    }

    #[test]
    fn long_cells_are_truncated_to_fixed_width() {
        let table: DataTable<Location> = DataTable::new(vec![Column::new("address", "Address").fixed_width(10)])
            .expect("table");
        let text = render_table(&table.view(&fixtures::locations()[..1]));
        assert!(text.lines().any(|l| l == "Plot 1 Ce…"));
    }

    #[test]
    fn dialog_shows_required_markers_and_errors() {
        let mut dialog = Dialog::<Company>::new();
        dialog.open_add();
        assert!(dialog.begin_submit().is_err());

        let text = render_dialog(&dialog.view().expect("open"));
        assert!(text.starts_with("== Add Company =="));
        assert!(text.contains("Name*"));
        assert!(text.contains("! "));
        assert!(text.contains("[Cancel]"));
    }

    #[test]
    fn events_render_as_single_lines() {
        assert_eq!(render_event(&UiEvent::success("Saved")).as_deref(), Some("[ok] Saved"));
        let progress = UiEvent::Progress {
            task: "backup BKP-0009".into(),
            percent: 40,
        };
        assert_eq!(render_event(&progress).as_deref(), Some("backup BKP-0009: 40%"));
    }
}
