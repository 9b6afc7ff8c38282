//! Human-readable reasoning for a classification. Diagnostic only.

use super::features::FeatureRecord;
use super::result::Category;

/// Short justification derived from the same feature record as the category
pub fn generate_reasoning(features: &FeatureRecord, category: Category) -> String {
    let mut reasons: Vec<String> = Vec::new();

    match category {
        Category::Task => {
            if features.has_imperative {
                reasons.push("imperative phrasing".to_string());
            }
            if features.has_action_verb {
                reasons.push(format!("action words ({})", features.action_words.join(", ")));
            } else if !features.action_words.is_empty() {
                reasons.push(format!("obligation ({})", features.action_words.join(", ")));
            }
            if features.has_temporal_reference() {
                let refs: Vec<&str> = features
                    .dates
                    .iter()
                    .chain(features.times.iter())
                    .map(String::as_str)
                    .collect();
                reasons.push(format!("time reference ({})", refs.join(", ")));
            }
            if features.has_modal {
                reasons.push("modal verb".to_string());
            }
        }
        Category::Note => {
            if features.has_intent {
                reasons.push(format!("expresses intent ({})", features.intent_words.join(", ")));
            }
            if features.has_question {
                reasons.push("question".to_string());
            }
            if features.has_thought_pattern {
                reasons.push("reflective thought".to_string());
            }
        }
    }

    if reasons.is_empty() {
        return match category {
            Category::Task => "Classified as task: task keywords outweigh note signals".to_string(),
            Category::Note => "Classified as note: no strong task signals".to_string(),
        };
    }

    format!("Classified as {}: {}", category, reasons.join("; "))
}
