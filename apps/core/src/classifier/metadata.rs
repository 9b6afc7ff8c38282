//! Task metadata extraction: urgency tier, date/time summary, action patterns.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::features::FeatureRecord;
use super::patterns::{URGENCY_FUTURE, URGENCY_IMMEDIATE, URGENCY_SOON};

/// Time-criticality of a task, Immediate > Soon > Future > None
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    None,
    Future,
    Soon,
    Immediate,
}

impl Urgency {
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::None => "none",
            Urgency::Future => "future",
            Urgency::Soon => "soon",
            Urgency::Immediate => "immediate",
        }
    }

    /// First matching tier wins
    pub fn detect(text: &str) -> Self {
        if URGENCY_IMMEDIATE.is_match(text) {
            Urgency::Immediate
        } else if URGENCY_SOON.is_match(text) {
            Urgency::Soon
        } else if URGENCY_FUTURE.is_match(text) {
            Urgency::Future
        } else {
            Urgency::None
        }
    }

    /// Sort key for urgency-based ordering, higher is more urgent
    pub fn rank(&self) -> u8 {
        match self {
            Urgency::None => 0,
            Urgency::Future => 1,
            Urgency::Soon => 2,
            Urgency::Immediate => 3,
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raw date/time references found in a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInfo {
    /// Dates then times, comma separated, in extraction order
    pub summary: String,
    pub has_date: bool,
    pub has_time: bool,
}

/// Structured metadata attached to task results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskMetadata {
    pub urgency: Urgency,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_info: Option<DateInfo>,

    /// Matched action words, omitted when none matched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<String>>,
}

pub fn extract_task_metadata(features: &FeatureRecord, text: &str) -> TaskMetadata {
    let date_info = features.has_temporal_reference().then(|| DateInfo {
        summary: features
            .dates
            .iter()
            .chain(features.times.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        has_date: !features.dates.is_empty(),
        has_time: !features.times.is_empty(),
    });

    let patterns = (!features.action_words.is_empty()).then(|| features.action_words.clone());

    TaskMetadata {
        urgency: Urgency::detect(text),
        date_info,
        patterns,
    }
}
