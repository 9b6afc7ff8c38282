//! Confidence calibration.
//!
//! Additive heuristic strength on top of a 0.5 base, clamped to 1.0.
//! Not a probability: strong signals stack until the clamp.

use super::features::FeatureRecord;
use super::patterns::STRONG_OBLIGATION;

const BASE_CONFIDENCE: f32 = 0.5;
const MAX_CONFIDENCE: f32 = 1.0;

/// Confidence in (0.0, 1.0] for the resolved category
pub fn calculate_confidence(features: &FeatureRecord, is_task: bool) -> f32 {
    let mut confidence = BASE_CONFIDENCE;

    if is_task {
        if features.has_imperative {
            confidence += 0.3;
        }
        if features
            .action_words
            .iter()
            .any(|word| STRONG_OBLIGATION.is_match(word))
        {
            confidence += 0.3;
        }
        if features.has_temporal_reference() {
            confidence += 0.2;
        }
        if features.has_action_verb {
            confidence += 0.1;
        }
    } else {
        if features.has_intent {
            confidence += 0.4;
        }
        if features.has_question {
            confidence += 0.3;
        }
        if features.has_thought_pattern {
            confidence += 0.2;
        }
    }

    confidence.min(MAX_CONFIDENCE)
}
