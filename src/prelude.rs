// Zeturn - zeturn-error
// Module: Zeturn Error Prelude
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for zeturn-error
//!
//! This module provides a unified set of imports for both std and
//! `no_std` environments. It re-exports commonly used types and traits
//! to simplify imports in individual modules and downstream crates.

// Core imports for both std and no_std environments
pub use core::{
    any::Any,
    fmt,
    fmt::{Debug, Display},
};

// Binary std/no_std choice for owned strings
#[cfg(feature = "std")]
pub use std::{
    format,
    string::{String, ToString},
};

#[cfg(not(feature = "std"))]
pub use alloc::{
    format,
    string::{String, ToString},
};

// Re-export error types from this crate
pub use crate::{
    Error,
    ErrorSource,
    Result,
    codes,
    extract::{Extractor, ExtractorConfig, code_from_error, msg_from_error},
};
// Re-export failure shorthands
pub use crate::helpers::{coded_err, err, user_err};
