//! Configuration Tests
//!
//! Environment-driven configuration and `.env` file loading.

use std::io::Write;

use crate::classifier::{Category, Language, TaskNoteClassifier};
use crate::config::{ClassifierConfig, LogFormat, LANGUAGE_VAR, LOG_FILTER_VAR, LOG_FORMAT_VAR};
use crate::error::AppError;

#[cfg(test)]
mod env_tests {
    use super::*;

    #[test]
    fn test_from_env_reads_variables() {
        temp_env::with_vars(
            [
                (LANGUAGE_VAR, Some("es-MX")),
                (LOG_FILTER_VAR, Some("capture_core=debug")),
                (LOG_FORMAT_VAR, Some("json")),
            ],
            || {
                let config = ClassifierConfig::from_env().unwrap();
                assert_eq!(config.language, Language::Spanish);
                assert_eq!(config.log_filter, "capture_core=debug");
                assert_eq!(config.log_format, LogFormat::Json);
            },
        );
    }

    #[test]
    fn test_from_env_defaults_when_unset() {
        temp_env::with_vars_unset([LANGUAGE_VAR, LOG_FILTER_VAR, LOG_FORMAT_VAR], || {
            let config = ClassifierConfig::from_env().unwrap();
            assert_eq!(config, ClassifierConfig::default());
        });
    }

    #[test]
    fn test_unsupported_language_does_not_fail() {
        temp_env::with_var(LANGUAGE_VAR, Some("klingon"), || {
            let config = ClassifierConfig::from_env().unwrap();
            assert_eq!(config.language, Language::English);
        });
    }

    #[test]
    fn test_config_drives_classifier_language() {
        temp_env::with_var(LANGUAGE_VAR, Some("es"), || {
            let config = ClassifierConfig::from_env().unwrap();
            let classifier = TaskNoteClassifier::with_config(config);

            assert_eq!(classifier.language(), Language::Spanish);
            assert_eq!(classifier.classify("Compra pan hoy").category, Category::Task);
        });
    }
}

#[cfg(test)]
mod env_file_tests {
    use super::*;

    #[test]
    fn test_env_config_feeds_tracing_setup() {
        temp_env::with_vars(
            [(LOG_FILTER_VAR, Some("capture_core=trace")), (LOG_FORMAT_VAR, Some("JSON"))],
            || {
                let config = ClassifierConfig::from_env().unwrap();
                assert_eq!(config.log_format, LogFormat::Json);

                // another test may already own the global subscriber
                let result = crate::telemetry::init_tracing(&config);
                assert!(matches!(result, Ok(()) | Err(AppError::Config(_))));
            },
        );
    }

    #[test]
    fn test_from_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# capture settings").unwrap();
        writeln!(file, "{}=es", LANGUAGE_VAR).unwrap();
        writeln!(file, "{}=warn", LOG_FILTER_VAR).unwrap();

        let config = ClassifierConfig::from_env_file(file.path()).unwrap();
        assert_eq!(config.language, Language::Spanish);
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_env_file_leaves_process_env_untouched() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}=es", LANGUAGE_VAR).unwrap();

        temp_env::with_var_unset(LANGUAGE_VAR, || {
            let config = ClassifierConfig::from_env_file(file.path()).unwrap();
            assert_eq!(config.language, Language::Spanish);
            assert!(std::env::var(LANGUAGE_VAR).is_err());
        });
    }

    #[test]
    fn test_missing_env_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ClassifierConfig::from_env_file(dir.path().join("absent.env"));
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
