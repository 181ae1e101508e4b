//! Application Constants
//!
//! Centralized defaults for table paging, progress simulation and channels.

/// Rows per table page when the config does not override it
pub const DEFAULT_ITEMS_PER_PAGE: usize = 50;

/// Message shown in place of rows when a table has nothing to display
pub const EMPTY_TABLE_MESSAGE: &str = "No records found";

/// Virtual column key for per-row action buttons
pub const ACTIONS_COLUMN_KEY: &str = "actions";

/// Progress simulation defaults (backup/restore)
pub const PROGRESS_TICK_MS: u64 = 200;
pub const PROGRESS_STEP: u8 = 10;
pub const PROGRESS_CAP: u8 = 90;
pub const PROGRESS_DONE: u8 = 100;

/// Generic message surfaced when a submission callback fails
pub const SUBMIT_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "ippis-admin.toml";

/// Log file prefix inside the platform data directory
pub const LOG_FILE_PREFIX: &str = "ippis-admin.log";
