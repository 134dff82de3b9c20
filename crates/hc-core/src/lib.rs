//! # hc-core
//!
//! Core types and error definitions for holcal.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – the error hierarchy, the `ensure!`
//! convenience macro, and a handful of primitive type aliases.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used for pixel geometry (tooltip placement).
pub type Real = f64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
