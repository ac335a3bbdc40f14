//! Infrastructure Layer: Digit Encoding
//!
//! Provides positional digit encoding and decoding for arbitrary precision
//! integers. This crate implements the codec between an integer and the
//! ordered sequence of its base-`b` digits.
//!
//! ## Overview
//!
//! The `infrastructure_digit_encoding` crate is part of the infrastructure
//! layer in the CLEAN architecture conversion of the Elixir integer
//! utilities. It provides the `digits`/`undigits` pair: decomposition of an
//! integer into its positional digits in any radix from 2 upward, and the
//! exact inverse reconstruction.
//!
//! ## Codecs
//!
//! - **[`digit_codec`](digit_codec/index.html)**: Codec between integers
//!   and most-significant-first digit sequences. Negative inputs yield
//!   digit sequences where every digit carries the negative sign.
//!
//! ## Architecture
//!
//! This crate is based on `Integer.digits/2` and `Integer.undigits/2` from
//! the Elixir standard library. It depends on the Entities layer for the
//! arbitrary precision integer type.
//!
//! ## See Also
//!
//! - [`entities_numeric`](../../entities/entities_numeric/index.html): BigNumber type
//! - [`infrastructure_integer_scanning`](../infrastructure_integer_scanning/index.html): Textual integer scanning

pub mod digit_codec;

pub use digit_codec::DigitCodec;

// Re-export error types for convenience
pub use digit_codec::{DecodeError, EncodeError};
