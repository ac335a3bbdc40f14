//! API Facades Layer
//!
//! Provides the flat integer API external callers expect: the operation
//! set of Elixir's Integer module presented as one namespace, under the
//! same external names.
//!
//! All facades call underlying Rust modules from inner layers.

pub mod integer_facades;

// Re-export main facade types
pub use integer_facades::*;
