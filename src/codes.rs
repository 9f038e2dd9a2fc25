// Zeturn - zeturn-error
// Module: Zeturn Error Codes
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Sentinel defaults for Zeturn error fields.
//!
//! Every failure payload is guaranteed to carry a code, and every
//! extraction resolves to a string. These constants are what the
//! guarantees fall back to.

/// Code attached to failures constructed without an explicit one
pub const NO_ERROR_CODE: &str = "no_error_code";
/// Code reported when a caught value carries no usable code
pub const UNKNOWN_CODE: &str = "zeturn_unknown";
/// Message reported when a caught value carries no usable message
pub const UNKNOWN_MESSAGE: &str = "zeturn: unknown";
