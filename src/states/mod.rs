//! State Management Layer
//!
//! Page view-models with a unidirectional data flow:
//!
//! ```text
//! User Action → Table/Dialog → Intent → PageState → Repository → Rows → View
//! ```

mod app;
mod page;
mod query;
mod ui_event;

pub use app::*;
pub use page::*;
pub use query::*;
pub use ui_event::*;
