//! Application State
//!
//! Persisted configuration and the set of admin pages.

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_ITEMS_PER_PAGE, PROGRESS_CAP, PROGRESS_STEP, PROGRESS_TICK_MS,
};
use crate::error::{InvalidSnafu, Result};
use crate::helpers::{ensure_file, get_or_create_config_dir};
use crate::services::ProgressConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Admin pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Assets,
    MaintenanceTypes,
    Promotions,
    Transfers,
    Projects,
    Companies,
    Locations,
    Documents,
    Backups,
}

impl Page {
    pub const ALL: [Page; 9] = [
        Page::Assets,
        Page::MaintenanceTypes,
        Page::Promotions,
        Page::Transfers,
        Page::Projects,
        Page::Companies,
        Page::Locations,
        Page::Documents,
        Page::Backups,
    ];

    /// Command-line / config name
    pub fn slug(self) -> &'static str {
        match self {
            Page::Assets => "assets",
            Page::MaintenanceTypes => "maintenance_types",
            Page::Promotions => "promotions",
            Page::Transfers => "transfers",
            Page::Projects => "projects",
            Page::Companies => "companies",
            Page::Locations => "locations",
            Page::Documents => "documents",
            Page::Backups => "backups",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Assets => "Assets",
            Page::MaintenanceTypes => "Maintenance Types",
            Page::Promotions => "Promotions",
            Page::Transfers => "Transfers",
            Page::Projects => "Projects",
            Page::Companies => "Companies",
            Page::Locations => "Locations",
            Page::Documents => "Documents",
            Page::Backups => "Backups",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        match Page::ALL.into_iter().find(|p| p.slug() == wanted) {
            Some(page) => Ok(page),
            None => InvalidSnafu {
                message: format!("unknown page '{s}'"),
            }
            .fail(),
        }
    }
}

// ==================== Persisted Config ====================

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    ensure_file(&config_dir, CONFIG_FILE_NAME)
}

/// Persisted application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub items_per_page: usize,
    pub log_level: String,
    pub log_to_file: bool,
    pub progress_tick_ms: u64,
    pub progress_step: u8,
    pub progress_cap: u8,
    pub simulated_latency_ms: u64,
    pub default_page: Page,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            log_level: "info".to_string(),
            log_to_file: false,
            progress_tick_ms: PROGRESS_TICK_MS,
            progress_step: PROGRESS_STEP,
            progress_cap: PROGRESS_CAP,
            simulated_latency_ms: 0,
            default_page: Page::default(),
        }
    }
}

impl AppConfig {
    /// Load config from the platform config directory; a blank file means defaults.
    ///
    /// Runs before logging is set up, so failures are only returned.
    pub fn try_load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let value = std::fs::read_to_string(path)?;
        Self::parse(&value)
    }

    /// Parse config text; a blank string means defaults
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(value)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        snafu::ensure!(
            self.progress_step > 0,
            InvalidSnafu {
                message: "progress_step must be at least 1",
            }
        );
        snafu::ensure!(
            self.progress_tick_ms > 0,
            InvalidSnafu {
                message: "progress_tick_ms must be at least 1",
            }
        );
        Ok(())
    }

    pub fn progress(&self) -> ProgressConfig {
        ProgressConfig {
            tick: Duration::from_millis(self.progress_tick_ms),
            step: self.progress_step,
            cap: self.progress_cap,
        }
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

/// Save config to disk
pub fn save_app_config(config: &AppConfig) -> Result<()> {
    let path = get_config_path()?;
    let value = toml::to_string_pretty(config)?;
    std::fs::write(path, value)?;
    Ok(())
}
