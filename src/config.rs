//! Rendering configuration, optionally loaded from a TOML file.
//!
//! The config file is optional: a missing file yields `RenderConfig::default()`.
//! Unknown keys are accepted by serde, though we log a warning when the file
//! contains potential typos.
use chrono::FixedOffset;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file too large: {0}")]
    TooLarge(String),

    #[error("UTC offset of {0} minutes is out of range (must be within ±24 hours)")]
    InvalidOffset(i32),
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Settings that affect how a feed is written, never what it contains.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Spaces per nesting level. 0 = no pretty printing.
    pub indent_size: usize,

    /// Offset from UTC, in minutes, used for `pubDate` and `lastBuildDate`.
    pub utc_offset_minutes: i32,

    /// Whether the document ends with a newline after `</rss>`.
    pub trailing_newline: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_size: 2,
            utc_offset_minutes: 0,
            trailing_newline: true,
        }
    }
}

impl RenderConfig {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    const KNOWN_KEYS: [&'static str; 3] = ["indent_size", "utc_offset_minutes", "trailing_newline"];

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(RenderConfig::default())`
    /// - Empty file → `Ok(RenderConfig::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → accepted, logged as warning
    /// - Offset beyond ±24h → `Err(ConfigError::InvalidOffset)`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Deleted between metadata and read
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        let config = Self::from_toml(&content)?;
        tracing::info!(
            path = %path.display(),
            indent_size = config.indent_size,
            utc_offset_minutes = config.utc_offset_minutes,
            "Loaded render configuration"
        );
        Ok(config)
    }

    /// Parse configuration from TOML text. Empty text yields the defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            tracing::debug!("Config is empty, using defaults");
            return Ok(Self::default());
        }

        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if !Self::KNOWN_KEYS.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: RenderConfig = toml::from_str(content)?;
        config.offset()?;
        Ok(config)
    }

    /// The configured UTC offset as a chrono offset.
    pub fn offset(&self) -> Result<FixedOffset, ConfigError> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(ConfigError::InvalidOffset(self.utc_offset_minutes))
    }

    /// Sets the UTC offset in whole hours.
    pub fn with_utc_offset_hours(mut self, hours: i32) -> Self {
        self.utc_offset_minutes = hours.saturating_mul(60);
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
