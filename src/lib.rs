// Zeturn - zeturn-error
// Module: Zeturn Error Handling
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Zeturn error handling library
//!
//! This library provides the error payload type shared across Zeturn,
//! a `Result` alias built on it, and utilities for pulling a code and
//! a message out of caught values of unknown shape.
//!
//! # Error Payloads
//!
//! A failure carries three fields:
//!
//! - `code`: machine-readable identifier. Constructors that receive no
//!   code (or an empty one) substitute [`codes::NO_ERROR_CODE`], so the
//!   field can always be read without an existence check.
//! - `msg`: human-readable description, always supplied by the caller.
//! - `show`: whether `msg` is safe to surface to an end user. Defaults
//!   to `false`.
//!
//! # Usage
//!
//! The library provides both the payload type and shorthand
//! constructors for failed results:
//!
//! ```
//! use zeturn_error::{Error, Result};
//!
//! fn parse_port(raw: &str) -> Result<u16> {
//!     raw.parse()
//!         .map_err(|_| Error::with_code("bad_port", "port is not a number"))
//! }
//!
//! assert!(parse_port("8080").is_ok());
//! let error = parse_port("eighty").unwrap_err();
//! assert_eq!(error.code, "bad_port");
//! assert!(!error.show);
//! ```
//!
//! Caught values of unknown shape — panic payloads, boxed errors from
//! foreign code — can be inspected without ever panicking:
//!
//! ```
//! use zeturn_error::{code_from_error, msg_from_error, Error};
//!
//! let error = Error::with_code("upstream_timeout", "upstream did not answer");
//! assert_eq!(code_from_error(&error), "upstream_timeout");
//! assert_eq!(msg_from_error(&()), "zeturn: unknown");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![allow(clippy::cargo)]
#![warn(clippy::pedantic)]
#![warn(clippy::missing_panics_doc)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

// Standard library support
#[cfg(feature = "std")]
extern crate std;

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Sentinel defaults for error codes and messages
pub mod codes;
/// Error payload type and access traits
pub mod errors;

// Modules
pub mod extract;
pub mod helpers;
pub mod prelude;

// Macros for early-return error construction
#[macro_use]
pub mod macros;

// Include verification module conditionally
#[cfg(kani)]
pub mod verify;

// Re-export key types
pub use errors::{Error, ErrorSource};
pub use extract::{Extractor, ExtractorConfig, code_from_error, msg_from_error};
// Re-export failure shorthands
pub use helpers::*;

/// A specialized `Result` type for Zeturn operations.
///
/// This type alias uses [`Error`] as the default error type; the
/// parameter is kept open so callers can substitute their own failure
/// payload while keeping the same success/failure discriminant.
pub type Result<T, E = Error> = core::result::Result<T, E>;
