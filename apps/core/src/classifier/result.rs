//! Classification Result - Output structure for the classifier.
//!
//! Contains the category, calibrated confidence, reasoning and task metadata
//! produced for a single captured text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use super::metadata::TaskMetadata;
use crate::error::AppError;

/// Category assigned to a captured text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Actionable item
    Task,
    /// Informational or reflective item
    Note,
}

impl Category {
    /// Returns the lowercase label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Category::Task => "task",
            Category::Note => "note",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "task" => Ok(Category::Task),
            "note" => Ok(Category::Note),
            other => Err(AppError::Validation(format!("Unknown category: {}", other))),
        }
    }
}

/// Language whose pattern set drives feature extraction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Spanish,
}

impl Language {
    /// Returns the language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }

    /// Lenient lookup: unsupported codes fall back to the default language.
    pub fn from_code(code: &str) -> Self {
        match code.parse() {
            Ok(language) => language,
            Err(_) => {
                warn!(
                    "Unsupported language '{}', falling back to '{}'",
                    code,
                    Language::default().code()
                );
                Language::default()
            }
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = AppError;

    /// Accepts ISO codes and regional tags (`es-MX`, `en_US`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let primary = lowered.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "en" | "english" => Ok(Language::English),
            "es" | "spanish" | "español" | "espanol" => Ok(Language::Spanish),
            _ => Err(AppError::Validation(format!("Unsupported language: {}", s))),
        }
    }
}

/// Complete result of classifying one captured text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Task or note
    pub category: Category,

    /// Heuristic strength in (0.0, 1.0], not a probability
    pub confidence: f32,

    /// Diagnostic justification, carries no contract
    pub reasoning: String,

    /// Present only when `category` is `Task`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TaskMetadata>,
}

impl ClassificationResult {
    pub fn is_task(&self) -> bool {
        self.category == Category::Task
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Category: {} ({:.0}%), Urgency: {}, Reasoning: {}",
            self.category,
            self.confidence * 100.0,
            self.metadata
                .as_ref()
                .map(|m| m.urgency.label())
                .unwrap_or("-"),
            self.reasoning
        )
    }
}
