//! View Components
//!
//! Text renderers for the display models produced by the components layer.

pub mod console;
