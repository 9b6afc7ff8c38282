//! Test Module
//!
//! Cross-module test suite for the capture core.
//!
//! ## Test Categories
//! - `classifier_tests`: End-to-end classification scenarios and properties
//! - `models_tests`: Captured items, manual overrides, JSON persistence
//! - `config_tests`: Environment and `.env` configuration loading

pub mod config_tests;
pub mod models_tests;
