//! Components - Reusable UI Components
//!
//! Pure state and display models that don't depend on services or do I/O.

pub mod composite;
