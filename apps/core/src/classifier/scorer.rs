//! Task/note scoring.
//!
//! Two independent integer accumulators fed by an ordered rule table.
//! Ties resolve to `Note`.

use serde::{Deserialize, Serialize};

use super::features::FeatureRecord;
use super::patterns::{
    FUTURE_MARKERS, HEDGING, NOTE_NOUNS, PAST_TENSE, STRONG_MODALITY, STRONG_OBLIGATION,
    TASK_NOUNS,
};

/// Accumulator a rule feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Task,
    Note,
}

/// Evidence a scoring rule looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Imperative,
    StrongObligation,
    TaskNoun,
    /// Action verb outside a desire clause
    ActionVerbWithoutIntent,
    Intent,
    Question,
    ThoughtPattern,
    PastTense,
    NoteNoun,
    /// Modal present but no strong modality
    WeakModal,
    TemporalReference,
    Hedging,
    /// Future tense while task evidence is still below 3
    BareFuture,
}

/// One row of the scoring table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRule {
    pub signal: Signal,
    pub side: Side,
    pub weight: u32,
}

const fn rule(signal: Signal, side: Side, weight: u32) -> ScoringRule {
    ScoringRule {
        signal,
        side,
        weight,
    }
}

/// Evaluated top to bottom. `BareFuture` reads the task total, so it stays
/// after every task rule.
pub const SCORING_RULES: &[ScoringRule] = &[
    rule(Signal::Imperative, Side::Task, 3),
    rule(Signal::StrongObligation, Side::Task, 4),
    rule(Signal::TaskNoun, Side::Task, 3),
    rule(Signal::ActionVerbWithoutIntent, Side::Task, 2),
    rule(Signal::Intent, Side::Note, 5),
    rule(Signal::Question, Side::Note, 3),
    rule(Signal::ThoughtPattern, Side::Note, 3),
    rule(Signal::PastTense, Side::Note, 2),
    rule(Signal::NoteNoun, Side::Note, 2),
    rule(Signal::WeakModal, Side::Note, 1),
    rule(Signal::TemporalReference, Side::Task, 2),
    rule(Signal::Hedging, Side::Note, 2),
    rule(Signal::BareFuture, Side::Note, 1),
];

const BARE_FUTURE_TASK_CEILING: u32 = 3;

impl Signal {
    /// Whether the signal is present. `task_score` is the task total so far.
    pub fn fires(&self, features: &FeatureRecord, text: &str, task_score: u32) -> bool {
        match self {
            Signal::Imperative => features.has_imperative,
            Signal::StrongObligation => STRONG_OBLIGATION.is_match(text),
            Signal::TaskNoun => TASK_NOUNS.is_match(text),
            Signal::ActionVerbWithoutIntent => features.has_action_verb && !features.has_intent,
            Signal::Intent => features.has_intent,
            Signal::Question => features.has_question,
            Signal::ThoughtPattern => features.has_thought_pattern,
            Signal::PastTense => PAST_TENSE.is_match(text),
            Signal::NoteNoun => NOTE_NOUNS.is_match(text),
            Signal::WeakModal => features.has_modal && !STRONG_MODALITY.is_match(text),
            Signal::TemporalReference => features.has_temporal_reference(),
            Signal::Hedging => HEDGING.is_match(text),
            Signal::BareFuture => {
                FUTURE_MARKERS.is_match(text) && task_score < BARE_FUTURE_TASK_CEILING
            }
        }
    }
}

/// Both accumulators plus the signals that fired, in table order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub task_score: u32,
    pub note_score: u32,
    pub fired: Vec<Signal>,
}

impl ScoreBreakdown {
    /// Strictly greater task score wins; ties go to note
    pub fn is_task(&self) -> bool {
        self.task_score > self.note_score
    }
}

/// Apply every rule of `SCORING_RULES` to the feature record and text
pub fn score(features: &FeatureRecord, text: &str) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();

    for rule in SCORING_RULES {
        if !rule.signal.fires(features, text, breakdown.task_score) {
            continue;
        }
        match rule.side {
            Side::Task => breakdown.task_score += rule.weight,
            Side::Note => breakdown.note_score += rule.weight,
        }
        breakdown.fired.push(rule.signal);
    }

    breakdown
}

pub fn is_task(features: &FeatureRecord, text: &str) -> bool {
    score(features, text).is_task()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weight_of(signal: Signal) -> u32 {
        SCORING_RULES
            .iter()
            .find(|r| r.signal == signal)
            .map(|r| r.weight)
            .unwrap()
    }

    #[test]
    fn test_empty_record_scores_zero() {
        let breakdown = score(&FeatureRecord::default(), "");
        assert_eq!(breakdown.task_score, 0);
        assert_eq!(breakdown.note_score, 0);
        assert!(breakdown.fired.is_empty());
        assert!(!breakdown.is_task());
    }

    #[test]
    fn test_tie_resolves_to_note() {
        // imperative (+3 task) against question (+3 note)
        let features = FeatureRecord {
            has_imperative: true,
            has_question: true,
            ..Default::default()
        };

        let breakdown = score(&features, "");
        assert_eq!(breakdown.task_score, breakdown.note_score);
        assert!(!is_task(&features, ""));
    }

    #[test]
    fn test_intent_suppresses_action_verb() {
        let features = FeatureRecord {
            has_action_verb: true,
            has_intent: true,
            ..Default::default()
        };

        let breakdown = score(&features, "");
        assert_eq!(breakdown.task_score, 0);
        assert_eq!(breakdown.note_score, weight_of(Signal::Intent));
        assert!(!breakdown.fired.contains(&Signal::ActionVerbWithoutIntent));
    }

    #[test]
    fn test_intent_is_the_heaviest_rule() {
        let max = SCORING_RULES.iter().map(|r| r.weight).max().unwrap();
        assert_eq!(weight_of(Signal::Intent), max);
        assert_eq!(
            SCORING_RULES.iter().filter(|r| r.weight == max).count(),
            1
        );
    }

    #[test]
    fn test_each_text_rule_in_isolation() {
        let blank = FeatureRecord::default();
        let cases = [
            ("remember to", Signal::StrongObligation, Side::Task),
            ("the deadline", Signal::TaskNoun, Side::Task),
            ("it was late", Signal::PastTense, Side::Note),
            ("an idea", Signal::NoteNoun, Side::Note),
            ("perhaps", Signal::Hedging, Side::Note),
            ("I will", Signal::BareFuture, Side::Note),
        ];

        for (text, signal, side) in cases {
            let breakdown = score(&blank, text);
            assert_eq!(breakdown.fired, vec![signal], "unexpected signals for {:?}", text);
            let expected = weight_of(signal);
            match side {
                Side::Task => assert_eq!(breakdown.task_score, expected),
                Side::Note => assert_eq!(breakdown.note_score, expected),
            }
        }
    }

    #[test]
    fn test_weak_modal_excludes_strong_modality() {
        let features = FeatureRecord {
            has_modal: true,
            ..Default::default()
        };

        assert!(score(&features, "you should rest").fired.contains(&Signal::WeakModal));
        assert!(!score(&features, "you must rest").fired.contains(&Signal::WeakModal));
    }

    #[test]
    fn test_bare_future_only_without_task_evidence() {
        let weak = score(&FeatureRecord::default(), "I will think about it");
        assert!(weak.fired.contains(&Signal::BareFuture));

        let features = FeatureRecord {
            has_imperative: true,
            ..Default::default()
        };
        let strong = score(&features, "I will think about it");
        assert!(!strong.fired.contains(&Signal::BareFuture));
    }

    #[test]
    fn test_temporal_reference_adds_task_weight() {
        let features = FeatureRecord {
            times: vec!["9am".to_string()],
            ..Default::default()
        };

        let breakdown = score(&features, "");
        assert_eq!(breakdown.task_score, weight_of(Signal::TemporalReference));
        assert!(breakdown.is_task());
    }
}
