//! Infrastructure Layer: Integer Scanning
//!
//! Provides the streaming scanner that extracts a leading integer literal
//! from a text buffer: an optional sign followed by the maximal run of
//! valid base-`b` digit characters, with the unconsumed remainder handed
//! back to the caller.
//!
//! ## Overview
//!
//! The `infrastructure_integer_scanning` crate is part of the
//! infrastructure layer in the CLEAN architecture conversion of the Elixir
//! integer utilities. Finding no valid digit is a normal outcome of the
//! scan, reported as a value, never as an error; only a base outside the
//! supported window is an error.
//!
//! ## Architecture
//!
//! This crate is based on `Integer.parse/2` from the Elixir standard
//! library. It depends on the Entities layer for the arbitrary precision
//! integer type.
//!
//! ## See Also
//!
//! - [`entities_numeric`](../../entities/entities_numeric/index.html): BigNumber type
//! - [`infrastructure_digit_encoding`](../infrastructure_digit_encoding/index.html): Digit sequence codec

pub mod integer_scan;

pub use integer_scan::{scan_integer, ScanError, ScanResult, MAX_BASE, MIN_BASE};
