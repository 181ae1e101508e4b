//! File System Utilities
//!
//! Configuration and data directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("ng", "ippis", "ippis-admin").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/ippis-admin/` or `$XDG_CONFIG_HOME/ippis-admin/`
/// - **macOS**: `~/Library/Application Support/ng.ippis.ippis-admin/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\ippis\ippis-admin\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    ensure_dir(dirs.config_dir())
}

/// Get or create the data directory (log files)
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    ensure_dir(dirs.data_dir())
}

/// Resolve a file inside `dir`, creating it empty when missing
pub fn ensure_file(dir: &Path, name: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if !path.exists() {
        fs::write(&path, "")?;
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_file_creates_empty_file_once() {
        let dir = std::env::temp_dir().join(format!("ippis-fs-{}", uuid::Uuid::new_v4()));
        let dir = ensure_dir(&dir).expect("create dir");

        let path = ensure_file(&dir, "a.toml").expect("create file");
        assert_eq!(fs::read_to_string(&path).expect("read"), "");

        fs::write(&path, "x = 1").expect("write");
        let again = ensure_file(&dir, "a.toml").expect("existing file");
        assert_eq!(fs::read_to_string(&again).expect("read"), "x = 1");

        let _ = fs::remove_dir_all(&dir);
    }
}
