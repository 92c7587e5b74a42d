//! Configuration loading for Marker Cleaner

mod schema;

pub use schema::{CheckSetting, Config};

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".markercleanerrc.json";

/// Find and load the config file. Searches the folder then its parents.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let path = match custom_path {
        // Relative paths resolve against the cwd first, then the scanned folder.
        Some(p) if p.is_absolute() || p.exists() => Some(p.to_path_buf()),
        Some(p) => {
            let path = work_dir.join(p);
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            Some(path)
        }
        None => find_config_in_parents(work_dir),
    };

    match path {
        Some(path) => read_config(&path),
        None => Ok(Config::default()),
    }
}

fn read_config(config_path: &Path) -> Result<Config> {
    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid config: {}", config_path.display()))
}

/// Search for .markercleanerrc.json in directory and its parents
fn find_config_in_parents(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.is_file())
}

/// Build a GlobSet from ignore patterns
pub fn build_ignore_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob =
            Glob::new(pattern).with_context(|| format!("Invalid ignore pattern: {}", pattern))?;
        builder.add(glob);
    }
    builder.build().map_err(|e| anyhow::anyhow!("{}", e))
}

/// Check if a marker file should be skipped; patterns match the file name.
pub fn is_ignored(path: &Path, ignore_set: &GlobSet) -> bool {
    path.file_name()
        .map(|name| ignore_set.is_match(Path::new(name)))
        .unwrap_or(false)
}
