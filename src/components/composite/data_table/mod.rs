//! DataTable Component
//!
//! A reusable client-side table: columns, filters, global search, sorting
//! and pagination over rows owned by the caller.

pub mod column;
pub mod data_table;
pub mod filter;
pub mod pagination;
pub mod renderers;
pub mod sort;

pub use column::{CellOutput, CellRenderer, Column, ColumnKey, ColumnWidth, RenderError};
pub use data_table::{
    CellView, DataTable, HeaderCell, RowActions, RowView, TableAction, TableIntent, TableState, TableView,
};
pub use filter::{FilterField, FilterKind, FilterValue, SelectOption};
pub use pagination::{Pagination, total_pages};
pub use renderers::{Badge, Currency, DateCell};
pub use sort::{SortDirection, SortSpec, next_sort, sort_rows};
