//! Application Layer
//!
//! Service wiring, page selection and rendering entry points.

pub mod application;
pub mod navigation;

pub use application::Application;
pub use navigation::{PageRequest, page_list};
