//! User settings read from an optional TOML file.
//!
//! Settings only configure the application (locale, logging, window size).
//! Nothing the user types into the form is ever written back.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tax_core::Locale;
use thiserror::Error;
use tracing::{debug, warn};

use crate::logging::app_name;

/// File name looked up inside the per-user config directory.
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Window dimensions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 560.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Locale tag such as `en_US`; detected from the system when unset.
    pub locale: Option<String>,
    /// `EnvFilter` directive, e.g. `debug` or `info,tax_ui=trace`.
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
    pub log_stdout: bool,
    pub window: WindowSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: None,
            log_level: None,
            log_file: None,
            log_stdout: true,
            window: WindowSettings::default(),
        }
    }
}

impl Settings {
    /// Parses settings from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Loads settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        Self::from_toml_str(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Default location: `<config dir>/<app name>/settings.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(app_name()).join(SETTINGS_FILE_NAME))
    }

    /// Resolves the locale to format currency with.
    ///
    /// A configured tag wins if it parses; otherwise [`Locale::detect`] decides.
    pub fn resolve_locale(&self) -> Locale {
        match self.locale.as_deref().map(Locale::parse) {
            Some(Ok(locale)) => locale,
            Some(Err(error)) => {
                warn!(%error, "configured locale is invalid, detecting system locale");
                Locale::detect()
            }
            None => Locale::detect(),
        }
    }
}
