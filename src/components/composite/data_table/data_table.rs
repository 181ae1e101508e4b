//! DataTable Component
//!
//! A generic client-side table over an in-memory row slice: filter, search,
//! sort and paginate, then render each visible cell to text.
//!
//! ```text
//! rows ─► filter (AND) ─► search (ANY) ─► stable sort ─► page slice ─► render
//! ```
//!
//! The table never owns or mutates rows. User actions come back out as
//! `TableIntent`s through the optional callbacks.

use std::collections::{BTreeMap, HashSet};

use super::column::{Column, ColumnKey, ColumnWidth};
use super::filter::{FilterField, FilterValue};
use super::pagination::{Pagination, total_pages};
use super::sort::{SortDirection, SortSpec, next_sort, sort_rows};
use crate::constants::{ACTIONS_COLUMN_KEY, DEFAULT_ITEMS_PER_PAGE, EMPTY_TABLE_MESSAGE};
use crate::domain::{Row, RowId};
use crate::error::{InvalidSnafu, Result};
use crate::helpers::contains_ignore_case;

/// User intent reported upward by the table
#[derive(Debug, Clone, PartialEq)]
pub enum TableIntent {
    Add,
    Edit(RowId),
    Delete(RowId),
    View(RowId),
    Search(String),
    Filter { name: String, value: Option<FilterValue> },
    Sort(Option<SortSpec>),
    Paginate(usize),
}

/// Query state of one table instance
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub search: String,
    pub filters: BTreeMap<String, FilterValue>,
    pub sort: Option<SortSpec>,
    /// 1-based
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

/// Transitions over `TableState`
#[derive(Debug, Clone, PartialEq)]
pub enum TableAction {
    Search(String),
    SetFilter { name: String, value: FilterValue },
    ClearFilter(String),
    ClearFilters,
    SetSort(Option<SortSpec>),
    GoToPage(usize),
    PrevPage,
    SetItemsPerPage(usize),
    /// Clamp the page after the row count changed
    Clamp { total_items: usize },
}

impl TableState {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            sort: None,
            current_page: 1,
            items_per_page,
        }
    }

    /// Apply one action. Search, filter and sort changes reset to page 1.
    pub fn reduce(mut self, action: TableAction) -> Self {
        match action {
            TableAction::Search(query) => {
                if self.search != query {
                    self.search = query;
                    self.current_page = 1;
                }
            }
            TableAction::SetFilter { name, value } => {
                let changed = if value.is_active() {
                    self.filters.insert(name, value.clone()).as_ref() != Some(&value)
                } else {
                    self.filters.remove(&name).is_some()
                };
                if changed {
                    self.current_page = 1;
                }
            }
            TableAction::ClearFilter(name) => {
                if self.filters.remove(&name).is_some() {
                    self.current_page = 1;
                }
            }
            TableAction::ClearFilters => {
                if !self.filters.is_empty() {
                    self.filters.clear();
                    self.current_page = 1;
                }
            }
            TableAction::SetSort(sort) => {
                if self.sort != sort {
                    self.sort = sort;
                    self.current_page = 1;
                }
            }
            TableAction::GoToPage(page) => self.current_page = page.max(1),
            TableAction::PrevPage => self.current_page = self.current_page.saturating_sub(1).max(1),
            TableAction::SetItemsPerPage(n) => {
                self.items_per_page = n;
                self.current_page = 1;
            }
            TableAction::Clamp { total_items } => {
                let pages = total_pages(total_items, self.items_per_page);
                self.current_page = self.current_page.clamp(1, pages);
            }
        }
        self
    }
}

type ActionCallback = Box<dyn Fn() + Send + Sync>;
type RowCallback = Box<dyn Fn(&RowId) + Send + Sync>;
type IntentCallback = Box<dyn Fn(&TableIntent) + Send + Sync>;

/// Optional action callbacks; buttons render only for supplied ones
#[derive(Default)]
struct TableCallbacks {
    on_add: Option<ActionCallback>,
    on_edit: Option<RowCallback>,
    on_delete: Option<RowCallback>,
    on_view: Option<RowCallback>,
    on_change: Option<IntentCallback>,
}

/// Which row actions are available
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowActions {
    pub view: bool,
    pub edit: bool,
    pub delete: bool,
}

impl RowActions {
    pub fn labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.view {
            labels.push("View");
        }
        if self.edit {
            labels.push("Edit");
        }
        if self.delete {
            labels.push("Delete");
        }
        labels
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    pub width: ColumnWidth,
    pub sortable: bool,
    pub sort: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub text: String,
    /// The column renderer failed; `text` is the raw value
    pub fallback: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: RowId,
    pub cells: Vec<CellView>,
    pub actions: RowActions,
}

/// Everything needed to paint one table
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<RowView>,
    /// Set when no row is visible
    pub empty_message: Option<String>,
    pub pagination: Pagination,
    /// Pagination controls are suppressed for empty results
    pub show_pagination: bool,
    pub can_add: bool,
    pub items_label: String,
    pub render_failures: usize,
}

/// DataTable component
pub struct DataTable<R> {
    columns: Vec<Column<R>>,
    filter_fields: Vec<FilterField>,
    search_fields: Vec<String>,
    state: TableState,
    callbacks: TableCallbacks,
    empty_message: String,
    items_label: String,
}

impl<R: Row> DataTable<R> {
    /// Create a new data table; `columns` must not be empty
    pub fn new(columns: Vec<Column<R>>) -> Result<Self> {
        snafu::ensure!(
            !columns.is_empty(),
            InvalidSnafu {
                message: "a data table needs at least one column",
            }
        );
        Ok(Self {
            columns,
            filter_fields: Vec::new(),
            search_fields: Vec::new(),
            state: TableState::default(),
            callbacks: TableCallbacks::default(),
            empty_message: EMPTY_TABLE_MESSAGE.to_string(),
            items_label: "records".to_string(),
        })
    }

    // ==================== Builders ====================

    pub fn with_filters(mut self, filters: Vec<FilterField>) -> Self {
        self.filter_fields = filters;
        self
    }

    /// Fields searched by the global search box (defaults to every bound column)
    pub fn with_search_fields(mut self, fields: &[&str]) -> Self {
        self.search_fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn items_per_page(mut self, n: usize) -> Self {
        self.state.items_per_page = n;
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn items_label(mut self, label: impl Into<String>) -> Self {
        self.items_label = label.into();
        self
    }

    pub fn on_add(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.callbacks.on_add = Some(Box::new(handler));
        self
    }

    pub fn on_edit(mut self, handler: impl Fn(&RowId) + Send + Sync + 'static) -> Self {
        self.callbacks.on_edit = Some(Box::new(handler));
        self
    }

    pub fn on_delete(mut self, handler: impl Fn(&RowId) + Send + Sync + 'static) -> Self {
        self.callbacks.on_delete = Some(Box::new(handler));
        self
    }

    pub fn on_view(mut self, handler: impl Fn(&RowId) + Send + Sync + 'static) -> Self {
        self.callbacks.on_view = Some(Box::new(handler));
        self
    }

    /// Observe search/filter/sort/paginate intents
    pub fn on_change(mut self, handler: impl Fn(&TableIntent) + Send + Sync + 'static) -> Self {
        self.callbacks.on_change = Some(Box::new(handler));
        self
    }

    // ==================== Getters ====================

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn filter_fields(&self) -> &[FilterField] {
        &self.filter_fields
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn row_actions(&self) -> RowActions {
        RowActions {
            view: self.callbacks.on_view.is_some(),
            edit: self.callbacks.on_edit.is_some(),
            delete: self.callbacks.on_delete.is_some(),
        }
    }

    // ==================== State transitions ====================

    fn dispatch(&mut self, action: TableAction) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
    }

    fn emit(&self, intent: TableIntent) {
        if let Some(handler) = &self.callbacks.on_change {
            handler(&intent);
        }
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.dispatch(TableAction::Search(query.clone()));
        self.emit(TableIntent::Search(query));
    }

    pub fn set_filter(&mut self, name: &str, value: FilterValue) {
        if !self.filter_fields.iter().any(|f| f.name == name) {
            tracing::debug!(filter = name, "Filter is not declared for this table");
        }
        let active = value.is_active().then(|| value.clone());
        self.dispatch(TableAction::SetFilter {
            name: name.to_string(),
            value,
        });
        self.emit(TableIntent::Filter {
            name: name.to_string(),
            value: active,
        });
    }

    pub fn clear_filters(&mut self) {
        self.dispatch(TableAction::ClearFilters);
        for field in &self.filter_fields {
            self.emit(TableIntent::Filter {
                name: field.name.clone(),
                value: None,
            });
        }
    }

    /// Header click. Returns the new sort, or `None` if the column is not sortable.
    pub fn toggle_sort(&mut self, key: &str) -> Option<Option<SortSpec>> {
        let sortable = self
            .columns
            .iter()
            .any(|c| c.sortable && c.key == ColumnKey::Field(key.to_string()));
        if !sortable {
            return None;
        }
        let sort = next_sort(self.state.sort.as_ref(), key);
        self.dispatch(TableAction::SetSort(sort.clone()));
        self.emit(TableIntent::Sort(sort.clone()));
        Some(sort)
    }

    pub fn go_to_page(&mut self, page: usize, total_items: usize) {
        self.dispatch(TableAction::GoToPage(page));
        self.dispatch(TableAction::Clamp { total_items });
        self.emit(TableIntent::Paginate(self.state.current_page));
    }

    pub fn next_page(&mut self, total_items: usize) {
        self.go_to_page(self.state.current_page + 1, total_items);
    }

    pub fn prev_page(&mut self) {
        self.dispatch(TableAction::PrevPage);
        self.emit(TableIntent::Paginate(self.state.current_page));
    }

    pub fn set_items_per_page(&mut self, n: usize) {
        self.dispatch(TableAction::SetItemsPerPage(n));
    }

    /// Re-clamp the current page after the owner's rows changed
    pub fn sync(&mut self, rows: &[R]) {
        let total_items = self.visible_rows(rows).len();
        self.dispatch(TableAction::Clamp { total_items });
    }

    // ==================== Row actions ====================

    /// Press the Add button; `false` when the table has no add handler
    pub fn click_add(&self) -> bool {
        match &self.callbacks.on_add {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    fn click_row(handler: &Option<RowCallback>, id: &RowId) -> bool {
        match handler {
            Some(handler) => {
                handler(id);
                true
            }
            None => false,
        }
    }

    pub fn click_edit(&self, id: &RowId) -> bool {
        Self::click_row(&self.callbacks.on_edit, id)
    }

    pub fn click_delete(&self, id: &RowId) -> bool {
        Self::click_row(&self.callbacks.on_delete, id)
    }

    pub fn click_view(&self, id: &RowId) -> bool {
        Self::click_row(&self.callbacks.on_view, id)
    }

    // ==================== Derivation ====================

    fn passes_filters(&self, row: &R) -> bool {
        self.state
            .filters
            .iter()
            .all(|(name, value)| value.matches(row.field(name).as_ref()))
    }

    fn passes_search(&self, row: &R) -> bool {
        let query = self.state.search.as_str();
        if query.trim().is_empty() {
            return true;
        }

        let matches = |key: &str| {
            row.field(key)
                .is_some_and(|value| contains_ignore_case(&value.to_string(), query))
        };

        if self.search_fields.is_empty() {
            self.columns.iter().any(|c| match &c.key {
                ColumnKey::Field(key) => matches(key),
                ColumnKey::Virtual(_) => false,
            })
        } else {
            self.search_fields.iter().any(|key| matches(key))
        }
    }

    /// Filtered, searched and sorted rows (not paginated), in display order
    pub fn visible_rows<'a>(&self, rows: &'a [R]) -> Vec<&'a R> {
        let mut visible: Vec<&R> = rows
            .iter()
            .filter(|row| self.passes_filters(row) && self.passes_search(row))
            .collect();

        if let Some(spec) = &self.state.sort {
            sort_rows(&mut visible, spec);
        }
        visible
    }

    fn render_row(&self, row: &R, actions: RowActions) -> RowView {
        let cells = self
            .columns
            .iter()
            .map(|column| {
                if column.render.is_none() && column.key == ColumnKey::Virtual(ACTIONS_COLUMN_KEY.into()) {
                    return CellView {
                        text: actions.labels().join(" | "),
                        fallback: false,
                    };
                }
                let out = column.render_cell(row);
                CellView {
                    text: out.text,
                    fallback: out.fallback,
                }
            })
            .collect();

        RowView {
            id: row.id(),
            cells,
            actions,
        }
    }

    /// Derive the display model for the current page
    pub fn view(&self, rows: &[R]) -> TableView {
        let mut seen = HashSet::with_capacity(rows.len());
        if let Some(dup) = rows.iter().map(Row::id).find(|id| !seen.insert(id.clone())) {
            tracing::warn!(id = %dup, "Duplicate row id passed to data table");
        }

        let visible = self.visible_rows(rows);
        let pagination = Pagination::new(
            self.state.current_page,
            visible.len(),
            self.state.items_per_page,
        );
        let actions = self.row_actions();

        let page_rows: Vec<RowView> = visible[pagination.range()]
            .iter()
            .map(|row| self.render_row(row, actions))
            .collect();

        let render_failures = page_rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .filter(|c| c.fallback)
            .count();

        let headers = self
            .columns
            .iter()
            .map(|column| {
                let key = column.key.as_str().to_string();
                let sort = self
                    .state
                    .sort
                    .as_ref()
                    .filter(|s| column.sortable && s.key == key)
                    .map(|s| s.direction);
                HeaderCell {
                    key,
                    label: column.label.clone(),
                    width: column.width,
                    sortable: column.sortable,
                    sort,
                }
            })
            .collect();

        TableView {
            headers,
            empty_message: page_rows.is_empty().then(|| self.empty_message.clone()),
            rows: page_rows,
            show_pagination: !visible.is_empty(),
            pagination,
            can_add: self.callbacks.on_add.is_some(),
            items_label: self.items_label.clone(),
            render_failures,
        }
    }
}

impl<R> std::fmt::Debug for DataTable<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.columns)
            .field("filters", &self.filter_fields)
            .field("state", &self.state)
            .finish()
    }
}
