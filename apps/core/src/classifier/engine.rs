//! Task/note classifier - main entry point.
//!
//! Runs the full pipeline for every call:
//! 1. Feature extraction (language-specific patterns)
//! 2. Scoring (task vs note accumulators, ties go to note)
//! 3. Confidence calibration
//! 4. Task metadata (tasks only) and reasoning
//!
//! Nothing is cached between calls.

use futures::future::join_all;
use std::time::Instant;
use tracing::{debug, info, trace};

use super::confidence::calculate_confidence;
use super::explanation::generate_reasoning;
use super::features::{FeatureExtractor, FeatureRecord};
use super::metadata::extract_task_metadata;
use super::result::{Category, ClassificationResult, Language};
use super::scorer;
use crate::config::ClassifierConfig;

/// Offline classifier that sorts captured text into tasks and notes
#[derive(Debug, Clone, Default)]
pub struct TaskNoteClassifier {
    config: ClassifierConfig,
    extractor: FeatureExtractor,
}

impl TaskNoteClassifier {
    /// Create a classifier with default settings (English patterns)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClassifierConfig) -> Self {
        Self {
            config,
            extractor: FeatureExtractor::new(),
        }
    }

    pub fn with_language(language: Language) -> Self {
        Self::with_config(ClassifierConfig::default().with_language(language))
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn language(&self) -> Language {
        self.config.language
    }

    /// Switch the default language. Takes `&mut self`, so no classification
    /// can run on this instance while it changes.
    pub fn set_language(&mut self, language: Language) {
        if self.config.language != language {
            debug!("Classifier language {} -> {}", self.config.language, language);
        }
        self.config.language = language;
    }

    /// Classify with the configured language
    pub fn classify(&self, text: &str) -> ClassificationResult {
        self.classify_with_language(text, self.config.language)
    }

    /// Classify with an explicit per-call language
    pub fn classify_with_language(&self, text: &str, language: Language) -> ClassificationResult {
        let features = self.extractor.extract(text, language);
        trace!(?features, "Extracted features");

        let breakdown = scorer::score(&features, text);
        let is_task = breakdown.is_task();
        let category = if is_task { Category::Task } else { Category::Note };

        let result = assemble(&features, text, category);

        debug!(
            task_score = breakdown.task_score,
            note_score = breakdown.note_score,
            signals = ?breakdown.fired,
            "Classified as {} ({:.2})",
            category,
            result.confidence
        );

        result
    }

    /// Result for a category chosen by the caller instead of the scorer.
    /// Confidence, reasoning and metadata all describe `category`.
    pub fn classify_as(&self, text: &str, category: Category) -> ClassificationResult {
        let features = self.extractor.extract(text, self.config.language);
        assemble(&features, text, category)
    }

    /// Classify many texts concurrently; output order matches input order
    pub async fn classify_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<ClassificationResult> {
        let start = Instant::now();

        let results = join_all(
            texts
                .iter()
                .map(|text| async move { self.classify(text.as_ref()) }),
        )
        .await;

        info!(
            "Classified batch of {} items in {:?}",
            results.len(),
            start.elapsed()
        );
        results
    }

    /// Blocking variant of `classify_batch`
    pub fn classify_batch_sync<S: AsRef<str>>(&self, texts: &[S]) -> Vec<ClassificationResult> {
        texts.iter().map(|text| self.classify(text.as_ref())).collect()
    }
}

fn assemble(features: &FeatureRecord, text: &str, category: Category) -> ClassificationResult {
    let is_task = category == Category::Task;

    ClassificationResult {
        category,
        confidence: calculate_confidence(features, is_task),
        reasoning: generate_reasoning(features, category),
        metadata: is_task.then(|| extract_task_metadata(features, text)),
    }
}
