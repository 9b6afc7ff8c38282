//! # Classifier Module
//!
//! Offline task/note classification for captured speech and text.
//! No model, no network: deterministic pattern scoring.
//!
//! ## Components
//! - `patterns`: EN/ES lexical pattern library
//! - `features`: Feature extraction into a `FeatureRecord`
//! - `scorer`: Rule table and task/note resolution
//! - `confidence`: Confidence calibration
//! - `metadata`: Urgency and date/time metadata for tasks
//! - `explanation`: Diagnostic reasoning text
//! - `result`: Output data structures
//! - `engine`: Main orchestrator

pub mod confidence;
pub mod engine;
pub mod explanation;
pub mod features;
pub mod metadata;
pub mod patterns;
pub mod result;
pub mod scorer;

pub use engine::TaskNoteClassifier;
pub use features::{FeatureExtractor, FeatureRecord};
pub use metadata::{DateInfo, TaskMetadata, Urgency};
pub use result::{Category, ClassificationResult, Language};
pub use scorer::{ScoreBreakdown, ScoringRule, Side, Signal, SCORING_RULES};
