// Zeturn - zeturn-error
// Module: Zeturn Error Types
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Unified error payload for Zeturn operations.
//!
//! This module provides the failure record carried on the error side of
//! [`crate::Result`], the constructors that normalize it, and the
//! accessor trait used to read its fields back out of values of unknown
//! shape.

use core::fmt;

use crate::codes;
use crate::prelude::String;

/// Base trait for values that may expose Zeturn error fields
pub trait ErrorSource {
    /// Get the machine-readable error code, if one is present
    fn code(&self) -> Option<&str>;

    /// Get the human-readable message, if one is present
    fn message(&self) -> Option<&str>;

    /// Whether the message is intended to be surfaced to end users
    fn is_user_facing(&self) -> bool {
        false
    }
}

/// Zeturn `Error` type
///
/// This is the failure payload for Zeturn operations. After
/// construction `code` is never empty and `show` is always set, so
/// consumers can read both without existence checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// Machine-readable identifier; never empty after construction
    pub code: String,
    /// Human-readable description
    pub msg:  String,
    /// Whether `msg` is safe to surface to an end user
    pub show: bool,
}

impl Error {
    /// Create a new error carrying only a message.
    ///
    /// The code is set to [`codes::NO_ERROR_CODE`] and the message is
    /// kept internal (`show` is `false`).
    #[must_use]
    pub fn new(msg: impl Into<String>) -> Self {
        Self::with_code("", msg)
    }

    /// Create an error with an explicit machine-readable code.
    ///
    /// An empty code is replaced by [`codes::NO_ERROR_CODE`]; the
    /// message passes through unchanged and `show` starts out `false`.
    #[must_use]
    pub fn with_code(code: impl Into<String>, msg: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            code: if code.is_empty() {
                codes::NO_ERROR_CODE.into()
            } else {
                code
            },
            msg:  msg.into(),
            show: false,
        }
    }

    /// Create an error whose message is safe to show to end users
    #[must_use]
    pub fn user_facing(code: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::with_code(code, msg).shown()
    }

    /// Mark the message as safe to surface to an end user
    #[must_use]
    pub fn shown(mut self) -> Self {
        self.show = true;
        self
    }

    /// Check if the message is intended for end users
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        self.show
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.msg)
    }
}

impl ErrorSource for Error {
    fn code(&self) -> Option<&str> {
        Some(&self.code)
    }

    fn message(&self) -> Option<&str> {
        Some(&self.msg)
    }

    fn is_user_facing(&self) -> bool {
        self.show
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Self::new(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Self::new(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
