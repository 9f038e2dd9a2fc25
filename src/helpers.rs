// Zeturn - zeturn-error
// Module: Zeturn Error Helpers
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Shorthands for building failed results.
//!
//! Callers are expected to construct failure values explicitly at the
//! point of failure; these helpers collapse the
//! `Err(Error::...)` spelling into one call.

use crate::Result;
use crate::errors::Error;
use crate::prelude::String;

/// Build a failed result carrying only a message.
///
/// The payload gets the default code and stays internal.
pub fn err<T>(msg: impl Into<String>) -> Result<T> {
    Err(Error::new(msg))
}

/// Build a failed result with an explicit machine-readable code.
pub fn coded_err<T>(code: impl Into<String>, msg: impl Into<String>) -> Result<T> {
    Err(Error::with_code(code, msg))
}

/// Build a failed result whose message may be surfaced to end users.
pub fn user_err<T>(code: impl Into<String>, msg: impl Into<String>) -> Result<T> {
    Err(Error::user_facing(code, msg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;

    #[test]
    fn shorthands_agree_with_constructors() {
        let bare: Result<()> = err("boom");
        assert_eq!(bare, Err(Error::new("boom")));

        let coded: Result<()> = coded_err("E1", "bad");
        assert_eq!(coded, Err(Error::with_code("E1", "bad")));
    }

    #[test]
    fn user_err_normalizes_and_shows() {
        let visible: Result<()> = user_err("", "shown to users");
        assert!(visible.is_err());
        if let Err(error) = visible {
            assert_eq!(error.code, codes::NO_ERROR_CODE);
            assert!(error.show);
        }
    }
}
