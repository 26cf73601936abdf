//! Settings file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Settings;
use crate::error::{GatherError, Result};

/// Location of the project settings file, relative to the project root.
pub fn project_settings_path(project_root: &Path) -> PathBuf {
    project_root.join(".gather").join("config.yml")
}

/// Parse settings from YAML content.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(content).map_err(|e| GatherError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load settings from a specific file.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GatherError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GatherError::Io(e)
        }
    })?;
    parse_settings(&content, path)
}

/// Load settings with optional path override.
///
/// An explicit `config_override` must exist. Otherwise the project
/// settings file is used when present, and defaults when it is not.
pub fn load_settings(project_root: &Path, config_override: Option<&Path>) -> Result<Settings> {
    if let Some(path) = config_override {
        tracing::debug!(path = %path.display(), "loading settings override");
        return load_settings_file(path);
    }

    let path = project_settings_path(project_root);
    if path.exists() {
        tracing::debug!(path = %path.display(), "loading project settings");
        load_settings_file(&path)
    } else {
        Ok(Settings::default())
    }
}
