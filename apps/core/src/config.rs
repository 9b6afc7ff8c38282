//! Classifier configuration.
//!
//! Read once from the environment (optionally seeded by a `.env` file) and
//! handed to the classifier by value.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `CAPTURE_LANGUAGE` | `en` | Pattern set (`en`, `es`); unsupported codes fall back to `en` |
//! | `CAPTURE_LOG` | `info` | `tracing` filter directive |
//! | `CAPTURE_LOG_FORMAT` | `pretty` | `pretty` or `json` |

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::warn;

use crate::classifier::Language;
use crate::error::AppError;

pub const LANGUAGE_VAR: &str = "CAPTURE_LANGUAGE";
pub const LOG_FILTER_VAR: &str = "CAPTURE_LOG";
pub const LOG_FORMAT_VAR: &str = "CAPTURE_LOG_FORMAT";

const DEFAULT_LOG_FILTER: &str = "info";

/// Output format for the tracing subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Pattern set used when no per-call language is given
    pub language: Language,
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl ClassifierConfig {
    /// Load `.env` from the working directory if present, then read the
    /// process environment.
    pub fn from_env() -> Result<Self, AppError> {
        if let Err(e) = dotenv::dotenv() {
            if !e.not_found() {
                return Err(e.into());
            }
        }
        Ok(Self::from_lookup(|key| env::var(key).ok()))
    }

    /// Read settings from a specific env file without touching the process
    /// environment.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        // NOTE: dotenv 0.15 has no undeprecated reader that leaves the process env alone
        #[allow(deprecated)]
        let iter = dotenv::from_path_iter(path.as_ref())?;

        let mut pairs = Vec::new();
        for item in iter {
            pairs.push(item?);
        }
        Ok(Self::from_lookup(|key| {
            pairs
                .iter()
                .rev()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        }))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let language = lookup(LANGUAGE_VAR)
            .map(|code| Language::from_code(&code))
            .unwrap_or(defaults.language);

        let log_filter = lookup(LOG_FILTER_VAR)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        let log_format = match lookup(LOG_FORMAT_VAR).as_deref().map(str::trim) {
            None | Some("") => defaults.log_format,
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(f) if f.eq_ignore_ascii_case("pretty") => LogFormat::Pretty,
            Some(other) => {
                warn!("Unknown log format '{}', using pretty output", other);
                LogFormat::Pretty
            }
        };

        Self {
            language,
            log_filter,
            log_format,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}
