// Zeturn - zeturn-error
// Module: Zeturn Error Verification
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Formal verification for the error payload type using Kani.
//!
//! This module contains proofs that verify core properties of the
//! payload constructors and the extraction path. These proofs only run
//! with `cargo kani`.

use crate::{Error, codes, extract};

/// Verify that construction always yields a populated code and a pinned
/// visibility flag.
#[kani::proof]
fn verify_error_creation_safety() {
    let error = Error::new("probe");
    assert!(!error.code.is_empty());
    assert!(!error.show);

    let normalized = Error::with_code("", "probe");
    assert_eq!(normalized.code, codes::NO_ERROR_CODE);

    let visible = Error::user_facing("probe_code", "probe");
    assert!(visible.show);
}

/// Verify that extraction resolves shapeless input to the sentinels
/// without panicking.
#[kani::proof]
fn verify_error_propagation() {
    assert_eq!(extract::code_from_error(&()), codes::UNKNOWN_CODE);
    assert_eq!(extract::msg_from_error(&0u8), codes::UNKNOWN_MESSAGE);

    let error = Error::with_code("present", "present message");
    assert_eq!(extract::code_from_error(&error), "present");
}
