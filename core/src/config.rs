// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

/// The name of the mocal application.
pub const APP_NAME: &str = "mocal";

const DEFAULT_EVENTS_FILE: &str = "events.json";

/// Configuration for the mocal application.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Path to the recurring event source. Defaults to
    /// `<config-dir>/mocal/events.json`.
    #[serde(default)]
    pub events_path: Option<PathBuf>,
}

impl Config {
    /// Normalize the configuration: expand home prefixes and fill in
    /// the default event source path.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        match &self.events_path {
            Some(path) => {
                self.events_path = Some(
                    expand_path(path).map_err(|e| format!("Failed to expand event path: {e}"))?,
                )
            }

            None => match get_config_dir() {
                Ok(dir) => self.events_path = Some(dir.join(APP_NAME).join(DEFAULT_EVENTS_FILE)),
                Err(e) => tracing::warn!("failed to get config directory: {e}"),
            },
        };

        Ok(())
    }

    /// The resolved event source path. Falls back to a file in the
    /// working directory when no user directory could be determined.
    pub fn events_path(&self) -> &Path {
        self.events_path
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_EVENTS_FILE))
    }
}

/// Handle tilde (~) and home environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or("User-specific home directory not found".into())
}

pub(crate) fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}
