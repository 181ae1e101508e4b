//! Composite components built from row data and entity forms.

pub mod data_table;
pub mod modal;

pub use data_table::DataTable;
pub use modal::{Dialog, DialogMode, DialogPhase, DialogView, Submission};
