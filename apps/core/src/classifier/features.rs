//! Feature extraction over raw captured text.
//!
//! Applies the language's pattern set and a lightweight mood check to
//! produce a fixed-shape `FeatureRecord`. Never fails: text that matches
//! nothing yields a record with every flag false and every list empty.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::patterns::LanguagePatterns;
use super::result::Language;

/// Linguistic signals detected in one input text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub has_imperative: bool,
    pub has_modal: bool,
    pub has_action_verb: bool,
    pub has_question: bool,
    pub has_thought_pattern: bool,
    pub has_intent: bool,
    /// Raw date substrings, pattern order then position, duplicates kept
    pub dates: Vec<String>,
    /// Raw time substrings, pattern order then position, duplicates kept
    pub times: Vec<String>,
    /// Matched action verbs then obligation cues, in library order
    pub action_words: Vec<String>,
    /// Matched intent phrases, in library order
    pub intent_words: Vec<String>,
}

impl FeatureRecord {
    pub fn has_temporal_reference(&self) -> bool {
        !self.dates.is_empty() || !self.times.is_empty()
    }
}

/// Stateless extractor; the language is chosen per call
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureExtractor;

impl FeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the feature record for `text` using `language`'s patterns
    pub fn extract(&self, text: &str, language: Language) -> FeatureRecord {
        let patterns = LanguagePatterns::for_language(language);
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return FeatureRecord::default();
        }

        let mut action_words: Vec<String> = patterns
            .action_verbs
            .iter()
            .filter(|p| p.regex.is_match(trimmed))
            .map(|p| p.label.to_string())
            .collect();
        let has_action_verb = !action_words.is_empty();

        action_words.extend(
            patterns
                .obligation_cues
                .iter()
                .filter(|p| p.regex.is_match(trimmed))
                .map(|p| p.label.to_string()),
        );

        let intent_words: Vec<String> = patterns
            .intent_patterns
            .iter()
            .filter(|p| p.regex.is_match(trimmed))
            .map(|p| p.label.to_string())
            .collect();

        FeatureRecord {
            has_imperative: detect_imperative(trimmed, patterns),
            has_modal: any_match(&patterns.modals, trimmed),
            has_action_verb,
            has_question: trimmed.ends_with('?') || any_match(&patterns.question_words, trimmed),
            has_thought_pattern: any_match(&patterns.thought_patterns, trimmed),
            has_intent: !intent_words.is_empty(),
            dates: collect_matches(&patterns.date_patterns, trimmed),
            times: collect_matches(&patterns.time_patterns, trimmed),
            action_words,
            intent_words,
        }
    }
}

fn any_match(patterns: &[Regex], text: &str) -> bool {
    patterns.iter().any(|p| p.is_match(text))
}

fn collect_matches(patterns: &[Regex], text: &str) -> Vec<String> {
    patterns
        .iter()
        .flat_map(|p| p.find_iter(text).map(|m| m.as_str().to_string()))
        .collect()
}

/// Imperative mood: the first non-filler token is a bare verb, or the
/// sentence opens with a known imperative construction. A leading subject
/// pronoun rules it out.
fn detect_imperative(text: &str, patterns: &LanguagePatterns) -> bool {
    if any_match(&patterns.imperative_constructions, text) {
        return true;
    }

    let leading = text
        .split_whitespace()
        .map(normalize_token)
        .filter(|token| !token.is_empty())
        .find(|token| !patterns.filler_tokens.contains(&token.as_str()));

    match leading.as_deref() {
        Some(token) if patterns.subject_pronouns.contains(&token) => false,
        Some(token) => patterns.imperative_verbs.contains(&token),
        None => false,
    }
}

/// Lowercase and strip surrounding punctuation, keeping inner apostrophes
fn normalize_token(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '’')
        .trim_matches(|c: char| c == '\'' || c == '’')
        .to_lowercase()
}
