use std::fs;
use std::path::{Path, PathBuf};

use super::core::EngineConfig;
use super::validation::validate_config;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".healthpredict.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<EngineConfig> {
    let config = toml::from_str::<EngineConfig>(contents)?;
    validate_config(&config)?;
    Ok(config)
}

/// Load and validate a specific config file. Any failure is an error.
pub fn load_config_from_path(path: &Path) -> Result<EngineConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        Error::configuration_with_path(format!("Failed to read {}: {e}", path.display()), path)
    })?;
    let config = parse_and_validate_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try a candidate discovered on the search path; unusable files are
/// reported and skipped.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<EngineConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read config file {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("Ignoring {}: {}. Using defaults.", config_path.display(), e);
            None
        }
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file, falling back to the
/// built-in tables.
pub fn discover_config(start: PathBuf) -> EngineConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            EngineConfig::default()
        })
}

pub fn load_config() -> EngineConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!("Failed to get current directory: {}. Using default config.", e);
            EngineConfig::default()
        }
    }
}
