// Zeturn - zeturn-error
// Module: Zeturn Error Field Extraction
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Field extraction from caught values of unknown shape.
//!
//! Code that catches a panic payload or collects an error value of
//! unknown provenance can pull a code and a message out of it without
//! caring what the value actually is. Lookups never panic: values that
//! do not expose the requested field resolve to a fallback — the global
//! sentinels in [`codes`], or the pair carried by an [`Extractor`].

use core::any::Any;

use crate::codes;
use crate::errors::{Error, ErrorSource};
use crate::prelude::String;

/// Which payload field a lookup is after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Code,
    Message,
}

/// Borrow the caught value as an error source if it has a known payload
/// shape.
fn as_source(error: &dyn Any) -> Option<&dyn ErrorSource> {
    if let Some(payload) = error.downcast_ref::<Error>() {
        return Some(payload);
    }
    if let Some(wrapped) = error.downcast_ref::<Option<Error>>() {
        return wrapped.as_ref().map(|payload| payload as &dyn ErrorSource);
    }
    None
}

/// Resolve an optional field value against a fallback. Empty fields
/// count as absent.
fn resolve<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(present) if !present.is_empty() => present,
        _ => fallback,
    }
}

/// Shared lookup core for both extraction surfaces.
fn field_from_error<'a>(error: &'a dyn Any, field: Field, fallback: &'a str) -> &'a str {
    let value = as_source(error).and_then(|source| match field {
        Field::Code => source.code(),
        Field::Message => source.message(),
    });
    resolve(value, fallback)
}

/// Extract the machine-readable code from a caught value.
///
/// Falls back to [`codes::UNKNOWN_CODE`] when the value does not carry
/// one.
#[must_use]
pub fn code_from_error(error: &dyn Any) -> &str {
    field_from_error(error, Field::Code, codes::UNKNOWN_CODE)
}

/// Extract the human-readable message from a caught value.
///
/// Falls back to [`codes::UNKNOWN_MESSAGE`] when the value does not
/// carry one.
#[must_use]
pub fn msg_from_error(error: &dyn Any) -> &str {
    field_from_error(error, Field::Message, codes::UNKNOWN_MESSAGE)
}

/// Optional overrides for the fallbacks of an [`Extractor`].
///
/// Unset fields resolve to the global sentinels in [`codes`].
#[derive(Debug, Clone, Default)]
pub struct ExtractorConfig {
    /// Replacement for [`codes::UNKNOWN_CODE`]
    pub not_found_code: Option<String>,
    /// Replacement for [`codes::UNKNOWN_MESSAGE`]
    pub not_found_msg:  Option<String>,
}

/// Field extraction with configurable fallbacks.
///
/// The zero-configuration entry points [`code_from_error`] and
/// [`msg_from_error`] always fall back to the global sentinels; an
/// `Extractor` carries its own pair instead, fixed at construction
/// time.
#[derive(Debug, Clone)]
pub struct Extractor {
    not_found_code: String,
    not_found_msg:  String,
}

impl Extractor {
    /// Build an extractor from optional fallback overrides.
    #[must_use]
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            not_found_code: config
                .not_found_code
                .unwrap_or_else(|| codes::UNKNOWN_CODE.into()),
            not_found_msg:  config
                .not_found_msg
                .unwrap_or_else(|| codes::UNKNOWN_MESSAGE.into()),
        }
    }

    /// Extract the machine-readable code from a caught value, falling
    /// back to this extractor's code default.
    #[must_use]
    pub fn code_from_error<'a>(&'a self, error: &'a dyn Any) -> &'a str {
        field_from_error(error, Field::Code, &self.not_found_code)
    }

    /// Extract the human-readable message from a caught value, falling
    /// back to this extractor's message default.
    #[must_use]
    pub fn msg_from_error<'a>(&'a self, error: &'a dyn Any) -> &'a str {
        field_from_error(error, Field::Message, &self.not_found_msg)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_present_values() {
        assert_eq!(resolve(Some("present"), "fallback"), "present");
        assert_eq!(resolve(Some(""), "fallback"), "fallback");
        assert_eq!(resolve(None, "fallback"), "fallback");
    }

    #[test]
    fn known_payloads_yield_their_fields() {
        let error = Error::with_code("E42", "disk on fire");
        assert_eq!(code_from_error(&error), "E42");
        assert_eq!(msg_from_error(&error), "disk on fire");
    }

    #[test]
    fn wrapped_payloads_are_unwrapped() {
        let wrapped = Some(Error::with_code("inner", "wrapped payload"));
        assert_eq!(code_from_error(&wrapped), "inner");
        assert_eq!(msg_from_error(&wrapped), "wrapped payload");

        assert_eq!(code_from_error(&None::<Error>), codes::UNKNOWN_CODE);
    }

    #[test]
    fn shapeless_values_fall_back() {
        assert_eq!(code_from_error(&()), codes::UNKNOWN_CODE);
        assert_eq!(msg_from_error(&7u32), codes::UNKNOWN_MESSAGE);
    }
}
