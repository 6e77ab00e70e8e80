//! Unified error types for deckgen.
//!
//! This module provides a unified error type that encompasses errors from the
//! content model, the slide writer and deck serialization.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
