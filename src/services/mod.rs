//! Service Layer
//!
//! Data access and long-running operations behind the page states.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ServiceHub                             │
//! │  ┌──────────────────────┐  ┌──────────────────────────┐    │
//! │  │ InMemoryRepository<E>│  │  run_with_progress       │    │
//! │  │ (one per entity)     │  │  (backup/restore)        │    │
//! │  └──────────────────────┘  └──────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼ UiEvent
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      State Layer                            │
//! │                  (PageState<E, R>)                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod fixtures;
mod hub;
mod progress;
mod repository;

pub use hub::*;
pub use progress::*;
pub use repository::*;
