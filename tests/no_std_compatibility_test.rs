//! Test `no_std` compatibility for zeturn-error
//!
//! This file validates that the zeturn-error crate works correctly in `no_std` environments.

// For testing in a no_std environment
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::unnecessary_literal_unwrap, clippy::panic)]
mod tests {
    // Import necessary types for no_std environment
    #[cfg(not(feature = "std"))]
    use alloc::{format, string::ToString};

    #[cfg(feature = "std")]
    use std::string::ToString;

    // Import from zeturn-error
    use zeturn_error::{Error, Extractor, Result, code_from_error, codes};

    #[test]
    fn test_error_creation() {
        // Create an error
        let error = Error::with_code("probe_failed", "probe did not answer".to_string());

        // Verify error properties
        assert_eq!(error.code, "probe_failed");
        assert_eq!(error.msg, "probe did not answer");
        assert!(!error.show);
    }

    #[test]
    fn test_result_operations() {
        // Test successful result
        let ok_result: Result<i32> = Ok(42);
        assert!(ok_result.is_ok());
        assert_eq!(ok_result.unwrap(), 42);

        // Test error result
        let err_result: Result<i32> = Err(Error::new("went sideways"));
        assert!(err_result.is_err());

        let extracted = err_result.unwrap_err();
        assert_eq!(extracted.code, codes::NO_ERROR_CODE);
    }

    #[test]
    fn test_display_formatting() {
        let error = Error::with_code("bad_input", "value out of range");
        assert_eq!(format!("{error}"), "[bad_input] value out of range");
    }

    #[test]
    fn test_extraction_without_std() {
        let error = Error::with_code("still_here", "works without std");
        assert_eq!(code_from_error(&error), "still_here");

        let extractor = Extractor::default();
        assert_eq!(extractor.code_from_error(&0_u8), codes::UNKNOWN_CODE);
    }
}
