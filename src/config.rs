//! Configuration file support for rating-control.
//!
//! Configuration is loaded from `~/.config/rating-control/config.toml` with the
//! following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/rating-control/config.toml
//! title = "How was your day?"
//! domain = ["Awful", "Meh", "Fine", "Good", "Great"]
//! initial = "Fine"
//! log_dir = "/tmp/rating-control-logs"
//!
//! [colors]
//! filled = "#7CAFC2"
//! empty = "darkgray"
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::Color;
use serde::Deserialize;

use crate::domain::{CaseIterable, OrderedDomain};
use crate::error::{DomainResult, Result};
use crate::log;
use crate::rating::Rating;
use crate::tui::theme::{SEGMENT_EMPTY, SEGMENT_FILLED};

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Heading shown above the segments
    pub title: Option<String>,

    /// Ordered labels to rate over (defaults to One..Five)
    pub domain: Option<Vec<String>>,

    /// Label selected at startup (defaults to the first element)
    pub initial: Option<String>,

    /// Segment colours
    pub colors: ColorConfig,

    /// Directory for log files
    pub log_dir: Option<PathBuf>,
}

/// Segment colour configuration, as `#RRGGBB` or a colour name.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ColorConfig {
    pub filled: Option<String>,
    pub empty: Option<String>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: Failed to load config file: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rating-control")
            .join("config.toml")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(
        mut self,
        title: Option<String>,
        domain: Option<Vec<String>>,
        initial: Option<String>,
    ) -> Self {
        if title.is_some() {
            self.title = title;
        }
        if domain.is_some() {
            self.domain = domain;
        }
        if initial.is_some() {
            self.initial = initial;
        }
        self
    }

    /// Get the heading text.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("Rating")
    }

    /// Build the ordered domain from the configured labels, or the
    /// descriptions of the built-in five-step scale.
    pub fn domain(&self) -> DomainResult<OrderedDomain<String>> {
        match &self.domain {
            Some(labels) => OrderedDomain::from_labels(labels),
            None => OrderedDomain::from_labels(Rating::all_cases().iter().map(ToString::to_string)),
        }
    }

    /// Get the log directory: `RATING_CONTROL_LOG_DIR`, then the file, then
    /// the default.
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir_with_env(std::env::var_os("RATING_CONTROL_LOG_DIR").map(PathBuf::from))
    }

    fn log_dir_with_env(&self, env: Option<PathBuf>) -> PathBuf {
        env.filter(|dir| !dir.as_os_str().is_empty())
            .or_else(|| self.log_dir.clone())
            .unwrap_or_else(log::default_dir)
    }

    pub fn filled_color(&self) -> Color {
        parse_color(self.colors.filled.as_deref(), SEGMENT_FILLED)
    }

    pub fn empty_color(&self) -> Color {
        parse_color(self.colors.empty.as_deref(), SEGMENT_EMPTY)
    }
}

fn parse_color(value: Option<&str>, fallback: Color) -> Color {
    match value {
        Some(text) => Color::from_str(text.trim()).unwrap_or_else(|_| {
            log::log(&format!("Ignoring unknown color '{}'", text));
            fallback
        }),
        None => fallback,
    }
}
