// ShowLog - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation (DevWorkflow Part A Rule 13).
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::model::MalformedMarkerPolicy;
use crate::platform::fs::read_file_lossy;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for ShowLog configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/showlog/ or %APPDATA%\ShowLog\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Location of the default `config.toml`.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation (Rule 13)
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logging]` section.
    pub logging: LoggingSection,
    /// `[parser]` section.
    pub parser: ParserSection,
    /// `[session]` section.
    pub session: SessionSection,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// `[parser]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ParserSection {
    /// Handling of unterminated command markers: "fatal" or "skip".
    pub malformed_markers: Option<String>,
}

/// `[session]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct SessionSection {
    /// Show the welcome banner before the first prompt.
    pub banner: Option<bool>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Log file path.
    pub log_file: Option<String>,

    // -- Parser --
    pub malformed_markers: MalformedMarkerPolicy,

    // -- Session --
    pub show_banner: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            log_file: None,
            malformed_markers: MalformedMarkerPolicy::default(),
            show_banner: constants::DEFAULT_SHOW_BANNER,
        }
    }
}

/// Load and validate the config file at `config_path`, if there is one.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults with that error
/// as a warning -- the application still starts but the user is informed.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<ConfigError>) {
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    match load_explicit_config(config_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::debug!(error = %e, "Config unusable; using defaults");
            (AppConfig::default(), vec![e])
        }
    }
}

/// Load and validate a config file the user named explicitly.
///
/// Unlike [`load_config`], a missing, unreadable, or unparseable file is an
/// error: the user asked for this file, so silently ignoring it would hide a
/// typo. Out-of-range values are still warnings.
pub fn load_explicit_config(
    config_path: &Path,
) -> Result<(AppConfig, Vec<ConfigError>), ConfigError> {
    let content = read_file_lossy(config_path).map_err(|e| ConfigError::Io {
        path: config_path.to_path_buf(),
        source: e,
    })?;

    let raw: RawConfig = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: config_path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %config_path.display(), "Loaded config.toml");
    Ok(validate(raw))
}

/// Validate each field, accumulating a warning per rejected value.
fn validate(raw: RawConfig) -> (AppConfig, Vec<ConfigError>) {
    let mut config = AppConfig::default();
    let mut warnings = Vec::new();

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "[logging] level".to_string(),
                value: level.clone(),
                expected: format!(
                    "one of {}; using default ({})",
                    constants::VALID_LOG_LEVELS.join(", "),
                    constants::DEFAULT_LOG_LEVEL
                ),
            });
        }
    }

    // -- Logging: file --
    if let Some(ref file) = raw.logging.file {
        if !file.is_empty() {
            config.log_file = Some(file.clone());
        }
    }

    // -- Parser: malformed_markers --
    if let Some(ref policy) = raw.parser.malformed_markers {
        match MalformedMarkerPolicy::from_label(policy) {
            Some(p) => config.malformed_markers = p,
            None => warnings.push(ConfigError::ValueOutOfRange {
                field: "[parser] malformed_markers".to_string(),
                value: policy.clone(),
                expected: format!(
                    "\"fatal\" or \"skip\"; using default ({})",
                    MalformedMarkerPolicy::default()
                ),
            }),
        }
    }

    // -- Session: banner --
    if let Some(banner) = raw.session.banner {
        config.show_banner = banner;
    }

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}
