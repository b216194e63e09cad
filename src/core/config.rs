//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.morse/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::LogLevel;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MorseConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub prompt: Option<String>,
    pub show_banner: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<LogLevel>,
    pub file: Option<PathBuf>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PROMPT: &str = "Input your message(H - Help, 0 - Exit): ";
pub const DEFAULT_LOG_FILE_NAME: &str = "morse.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub prompt: String,
    pub show_banner: bool,
    pub log_level: LogLevel,
    pub log_file: PathBuf,
    /// Problems found while resolving, reported once the logger is up.
    pub warnings: Vec<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&MorseConfig::default(), &CliOverrides::default(), |_| None)
    }
}

/// Values taken from command-line flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_level: Option<LogLevel>,
    pub log_file: Option<PathBuf>,
    pub no_banner: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.morse`, the directory holding the config and log files.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".morse"))
}

/// Returns the path to `~/.morse/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from an explicit path, or from `~/.morse/config.toml`.
///
/// A missing default file is generated as a commented-out template and
/// `MorseConfig::default()` is returned. A missing explicit file is an
/// I/O error. A malformed file returns `ConfigError::Parse`.
pub fn load_config(explicit: Option<&Path>) -> Result<MorseConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MorseConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MorseConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<MorseConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<MorseConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Morse Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# prompt = "Input your message(H - Help, 0 - Exit): "   # Or set MORSE_PROMPT
# show_banner = true                                    # --no-banner disables

# [logging]
# level = "info"             # "off", "error", "warn", "info", "debug", "trace"
# file = "/tmp/morse.log"    # Or set MORSE_LOG_FILE; default ~/.morse/morse.log
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `env` looks up an environment variable; pass `|k| std::env::var(k).ok()`
/// outside of tests.
pub fn resolve(
    config: &MorseConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Prompt: env → config → default
    let prompt = env("MORSE_PROMPT")
        .or_else(|| config.general.prompt.clone())
        .unwrap_or_else(|| DEFAULT_PROMPT.to_string());

    // Banner: CLI can only turn it off
    let show_banner = !cli.no_banner && config.general.show_banner.unwrap_or(true);

    let mut warnings = Vec::new();

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .or_else(|| match env("MORSE_LOG_LEVEL")?.parse::<LogLevel>() {
            Ok(level) => Some(level),
            Err(e) => {
                warnings.push(format!("ignoring MORSE_LOG_LEVEL: {e}"));
                None
            }
        })
        .or(config.logging.level)
        .unwrap_or_default();

    // Log file: CLI → env → config → ~/.morse/morse.log → ./morse.log
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("MORSE_LOG_FILE").map(PathBuf::from))
        .or_else(|| config.logging.file.clone())
        .or_else(|| config_dir().map(|d| d.join(DEFAULT_LOG_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE_NAME));

    ResolvedConfig {
        prompt,
        show_banner,
        log_level,
        log_file,
        warnings,
    }
}
