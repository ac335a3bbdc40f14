//! Entities Layer: Numeric
//!
//! Provides the fundamental numeric value type for the integer utilities:
//! - Arbitrary precision integer operations
//!
//! Based on the integer part of the Elixir standard library's numeric support.

pub mod big;

pub use big::BigNumber;
