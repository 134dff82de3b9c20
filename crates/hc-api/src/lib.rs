//! # hc-api
//!
//! The remote holiday data source (Nager.Date v3 client), the
//! `HolidaySource` abstraction over it, and the `CalendarSession` that
//! owns the shared year/country/index state.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Nager.Date v3 HTTP client and wire DTOs.
pub mod client;

/// Session state: current year, country, and holiday index.
pub mod session;

/// The `HolidaySource` capability and the `Country` domain type.
pub mod source;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use client::NagerClient;
pub use session::{CalendarSession, LoadOutcome, DEFAULT_COUNTRY};
pub use source::{Country, HolidaySource};
