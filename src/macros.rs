// Zeturn - zeturn-error
// Module: Zeturn Error Macros
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Early-return macros for failure construction.
//!
//! These cover the same construction surface as [`crate::Error`]: a
//! bare message gets the default code, an explicit code passes through,
//! and empty codes are normalized either way.

/// Return early with a failed result.
///
/// Accepts a message alone, or a machine-readable code followed by a
/// message.
///
/// # Examples
///
/// ```
/// use zeturn_error::{Result, bail};
///
/// fn guarded(flag: bool) -> Result<()> {
///     if !flag {
///         bail!("precondition_failed", "flag was not set");
///     }
///     Ok(())
/// }
///
/// assert!(guarded(false).is_err());
/// assert!(guarded(true).is_ok());
/// ```
#[macro_export]
macro_rules! bail {
    ($code:expr, $msg:expr) => {
        return Err($crate::Error::with_code($code, $msg))
    };
    ($msg:expr) => {
        return Err($crate::Error::new($msg))
    };
}

/// Return early with a failed result when a condition does not hold.
///
/// # Examples
///
/// ```
/// use zeturn_error::{Result, ensure};
///
/// fn take(available: u32, wanted: u32) -> Result<u32> {
///     ensure!(wanted <= available, "over_capacity", "not enough left");
///     Ok(available - wanted)
/// }
///
/// assert_eq!(take(10, 4), Ok(6));
/// assert!(take(4, 10).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $code:expr, $msg:expr) => {
        if !$cond {
            $crate::bail!($code, $msg);
        }
    };
    ($cond:expr, $msg:expr) => {
        if !$cond {
            $crate::bail!($msg);
        }
    };
}
