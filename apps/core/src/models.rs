use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::classifier::{Category, ClassificationResult, TaskMetadata, TaskNoteClassifier};
use crate::error::AppError;

/// Represents a captured item together with its stored classification.
///
/// The classification fields are written once at capture time and kept
/// verbatim; they are only refreshed by an explicit edit or override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapturedItem {
    /// The unique identifier for the item (UUID v4).
    pub id: Uuid,
    /// The captured text.
    pub text: String,
    pub category: Category,
    pub confidence: f32,
    /// Diagnostic only, never parsed back.
    pub reasoning: String,
    /// Present only when `category` is `Task`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TaskMetadata>,
    /// Set once a user picks the category by hand; automatic
    /// re-classification never replaces it afterwards.
    #[serde(default)]
    pub category_overridden: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CapturedItem {
    /// Classify `text` once and store the result.
    pub fn capture(classifier: &TaskNoteClassifier, text: impl Into<String>) -> Self {
        let text = text.into();
        let result = classifier.classify(&text);
        let now = Utc::now();

        let item = Self {
            id: Uuid::new_v4(),
            text,
            category: result.category,
            confidence: result.confidence,
            reasoning: result.reasoning,
            metadata: result.metadata,
            category_overridden: false,
            created_at: now,
            updated_at: now,
        };
        debug!("Captured item {} as {}", item.id, item.category);
        item
    }

    /// Replace the text and refresh the stored classification, keeping a
    /// manually chosen category. Confidence, reasoning and metadata always
    /// describe the stored category.
    pub fn edit_text(&mut self, classifier: &TaskNoteClassifier, text: impl Into<String>) {
        self.text = text.into();
        let result = if self.category_overridden {
            classifier.classify_as(&self.text, self.category)
        } else {
            classifier.classify(&self.text)
        };

        self.apply(result);
    }

    /// Pin the category chosen by the user.
    pub fn override_category(&mut self, classifier: &TaskNoteClassifier, category: Category) {
        let result = classifier.classify_as(&self.text, category);
        self.apply(result);
        self.category_overridden = true;
        debug!("Item {} manually set to {}", self.id, category);
    }

    fn apply(&mut self, result: ClassificationResult) {
        self.category = result.category;
        self.confidence = result.confidence;
        self.reasoning = result.reasoning;
        self.metadata = result.metadata;
        self.updated_at = Utc::now();
    }

    /// The stored classification as a result value.
    pub fn classification(&self) -> ClassificationResult {
        ClassificationResult {
            category: self.category,
            confidence: self.confidence,
            reasoning: self.reasoning.clone(),
            metadata: self.metadata.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let item: Self = serde_json::from_str(json)?;
        match (item.category, item.metadata.is_some()) {
            (Category::Note, true) => Err(AppError::Validation(format!(
                "Item {} is a note but carries task metadata",
                item.id
            ))),
            (Category::Task, false) => Err(AppError::Validation(format!(
                "Item {} is a task but has no metadata",
                item.id
            ))),
            _ => Ok(item),
        }
    }
}
