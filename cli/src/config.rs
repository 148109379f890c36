// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use mocal_core::{APP_NAME, Config};

const MOCAL_CONFIG_ENV: &str = "MOCAL_CONFIG";

/// Locate and parse the configuration: the `--config` flag first, then
/// the `MOCAL_CONFIG` environment variable, then the user config
/// directory. A missing default config is not an error; the calendar
/// must always open.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        Some(path)
    } else if let Ok(env_path) = std::env::var(MOCAL_CONFIG_ENV) {
        Some(PathBuf::from(env_path))
    } else {
        default_config_path().filter(|path| path.exists())
    };

    let mut config = match path {
        Some(path) => {
            fs::read_to_string(&path)
                .await
                .map_err(|e| format!("Failed to read config file at {}: {e}", path.display()))?
                .parse::<ConfigRaw>()?
                .0
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            Config::default()
        }
    };

    config.normalize()?;
    Ok(config)
}

struct ConfigRaw(Config);

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ConfigRaw(toml::from_str(s)?))
    }
}

fn default_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(APP_NAME).join("config.toml"))
}

fn get_config_dir() -> Option<PathBuf> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir
}
