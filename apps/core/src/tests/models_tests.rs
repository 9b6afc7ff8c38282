//! Captured Item Tests
//!
//! Capture, edit, manual override and JSON persistence of classified items.

use crate::classifier::{Category, TaskNoteClassifier, Urgency};
use crate::error::AppError;
use crate::models::CapturedItem;

#[cfg(test)]
mod captured_item_tests {
    use super::*;

    #[test]
    fn test_capture_stores_classification_verbatim() {
        let classifier = TaskNoteClassifier::new();

        let item = CapturedItem::capture(&classifier, "Buy groceries today");
        let expected = classifier.classify("Buy groceries today");

        assert_eq!(item.classification(), expected);
        assert!(!item.category_overridden);
        assert_eq!(item.created_at, item.updated_at);
    }

    #[test]
    fn test_capture_assigns_unique_ids() {
        let classifier = TaskNoteClassifier::new();

        let first = CapturedItem::capture(&classifier, "Call mom");
        let second = CapturedItem::capture(&classifier, "Call mom");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_edit_reclassifies_without_override() {
        let classifier = TaskNoteClassifier::new();
        let mut item = CapturedItem::capture(&classifier, "I wonder what time it is");
        assert_eq!(item.category, Category::Note);

        item.edit_text(&classifier, "Call the bank now");
        assert_eq!(item.category, Category::Task);
        assert_eq!(item.metadata.as_ref().unwrap().urgency, Urgency::Immediate);
        assert!(item.updated_at >= item.created_at);
    }

    #[test]
    fn test_override_survives_reclassification() {
        let classifier = TaskNoteClassifier::new();
        let mut item = CapturedItem::capture(&classifier, "Call mom");
        assert_eq!(item.category, Category::Task);

        item.override_category(&classifier, Category::Note);
        assert!(item.category_overridden);
        assert!(item.metadata.is_none());

        item.edit_text(&classifier, "Call mom tomorrow");
        assert_eq!(item.category, Category::Note);
        assert!(item.metadata.is_none());
    }

    #[test]
    fn test_overridden_edit_explains_the_kept_category() {
        let classifier = TaskNoteClassifier::new();
        let mut item = CapturedItem::capture(&classifier, "Call mom");
        item.override_category(&classifier, Category::Note);

        item.edit_text(&classifier, "Call mom tomorrow");
        assert!(item.reasoning.starts_with("Classified as note"));
        assert!(!item.reasoning.starts_with("Classified as task"));

        let natural = classifier.classify("Call mom tomorrow");
        assert_eq!(natural.category, Category::Task);
        assert_ne!(item.confidence, natural.confidence);
        assert_eq!(
            item.classification(),
            classifier.classify_as("Call mom tomorrow", Category::Note)
        );
    }

    #[test]
    fn test_override_refreshes_confidence_and_reasoning() {
        let classifier = TaskNoteClassifier::new();
        let mut item = CapturedItem::capture(&classifier, "I want to visit Rome next year");
        assert!(item.reasoning.starts_with("Classified as note"));

        item.override_category(&classifier, Category::Task);
        assert!(item.reasoning.starts_with("Classified as task"));
        assert_eq!(
            item.classification(),
            classifier.classify_as("I want to visit Rome next year", Category::Task)
        );
    }

    #[test]
    fn test_override_to_task_builds_metadata() {
        let classifier = TaskNoteClassifier::new();
        let mut item = CapturedItem::capture(&classifier, "I want to visit Rome next year");
        assert_eq!(item.category, Category::Note);

        item.override_category(&classifier, Category::Task);
        let metadata = item.metadata.as_ref().unwrap();
        assert_eq!(metadata.urgency, Urgency::Future);
        assert_eq!(metadata.date_info.as_ref().unwrap().summary, "next year");

        item.edit_text(&classifier, "I want to visit Rome someday");
        assert_eq!(item.category, Category::Task);
        assert!(item.metadata.as_ref().unwrap().date_info.is_none());
    }
}

#[cfg(test)]
mod persistence_tests {
    use super::*;

    #[test]
    fn test_json_round_trip_keeps_every_field() {
        let classifier = TaskNoteClassifier::new();
        let mut item = CapturedItem::capture(&classifier, "Meeting with Sarah on Tuesday at 3pm");
        item.override_category(&classifier, Category::Task);

        let json = item.to_json().unwrap();
        let restored = CapturedItem::from_json(&json).unwrap();
        assert_eq!(restored, item);
    }

    #[test]
    fn test_note_json_has_no_metadata_key() {
        let classifier = TaskNoteClassifier::new();
        let item = CapturedItem::capture(&classifier, "What if we tried X");

        let value: serde_json::Value = serde_json::from_str(&item.to_json().unwrap()).unwrap();
        assert_eq!(value["category"], "note");
        assert!(value.get("metadata").is_none());
    }

    #[test]
    fn test_malformed_json_is_a_validation_error() {
        let result = CapturedItem::from_json("{ not json");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_note_with_metadata_is_rejected() {
        let classifier = TaskNoteClassifier::new();
        let item = CapturedItem::capture(&classifier, "Buy groceries today");

        let mut value: serde_json::Value = serde_json::from_str(&item.to_json().unwrap()).unwrap();
        value["category"] = serde_json::Value::String("note".to_string());

        let result = CapturedItem::from_json(&value.to_string());
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_task_without_metadata_is_rejected() {
        let classifier = TaskNoteClassifier::new();
        let item = CapturedItem::capture(&classifier, "Buy groceries today");
        assert_eq!(item.category, Category::Task);

        let mut value: serde_json::Value = serde_json::from_str(&item.to_json().unwrap()).unwrap();
        value.as_object_mut().unwrap().remove("metadata");

        let result = CapturedItem::from_json(&value.to_string());
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
