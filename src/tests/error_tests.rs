//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::error::dictionary::DictionaryError;
use crate::error::{
    report_error, set_error_reporter, ErrorContext, ErrorReporter, NiihauError,
    TracingErrorReporter,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = NiihauError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors work correctly.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let dictionary_error = DictionaryError::Unavailable {
        path: PathBuf::from("words.txt"),
        source: io_error,
    };
    let niihau_error = NiihauError::from(dictionary_error);

    let error_string = format!("{niihau_error}");
    assert!(error_string.starts_with("Dictionary error:"));
    assert!(error_string.contains("words.txt"));
    assert!(error_string.contains("file not found"));
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl MockErrorReporter {
    fn reported_count(&self) -> usize {
        self.reported_count.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter works correctly.
///
/// Note: This test modifies global state.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::default());
    set_error_reporter(reporter.clone());

    let error = NiihauError::Custom("test error".to_string());
    report_error(ErrorContext::new(error, "test_component"));

    assert!(reporter.reported_count() >= 1);
}

/// Test that the default tracing error reporter can be created.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let error = NiihauError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component");

    // Just make sure this doesn't panic
    reporter.report(context);
}
