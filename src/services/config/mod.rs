//! Read-only adapter configuration.
//!
//! Defaults reproduce the device layout; an optional JSON file may override
//! any subset of fields. Nothing is ever written back.

pub mod models;

pub use models::*;

use crate::services::wallpaper::Screen;
use crate::types::errors::{CommandError, CommandResult};
use std::fs;
use std::path::Path;

/// Load configuration from `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> CommandResult<AdapterConfig> {
    let Some(path) = path else {
        return Ok(AdapterConfig::default());
    };

    let content = fs::read_to_string(path).map_err(|e| {
        CommandError::Config(format!("Failed to read '{}': {e}", path.display()))
    })?;
    let config = parse_config(&content)
        .map_err(|e| CommandError::Config(format!("'{}': {e}", path.display())))?;

    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Parse and validate a JSON configuration document.
pub fn parse_config(content: &str) -> Result<AdapterConfig, String> {
    let config: AdapterConfig =
        serde_json::from_str(content).map_err(|e| format!("Failed to parse config: {e}"))?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &AdapterConfig) -> Result<(), String> {
    for screen in Screen::ALL {
        let file_name = &config.screen(screen).file_name;
        if file_name.trim().is_empty() {
            return Err(format!("{screen} file_name must not be empty"));
        }
        if file_name.contains(['/', '\\']) || file_name == "." || file_name == ".." {
            return Err(format!("{screen} file_name must be a bare file name: {file_name}"));
        }
    }

    if config.top.file_name.eq_ignore_ascii_case(&config.bottom.file_name) {
        return Err("top and bottom file_name must differ".to_string());
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
