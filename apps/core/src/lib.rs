//! Capture core: sorts captured speech and text into tasks and notes,
//! entirely on-device.

pub mod classifier;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;

pub use classifier::{Category, ClassificationResult, Language, TaskNoteClassifier};
pub use config::ClassifierConfig;
pub use error::AppError;

#[cfg(test)]
mod tests;
