//! # hc-holidays
//!
//! Turns flat holiday records into a date-keyed index: the public-subset
//! normalizer, the per-country carry-over (substitute holiday) rules, and
//! the `HolidayIndex` builder.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Date-keyed holiday index and its builder.
pub mod index;

/// Holiday record and entry types.
pub mod model;

/// Public-subset filtering and entry derivation.
pub mod normalize;

/// Carry-over rule trait and per-country implementations.
pub mod rules;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use index::{build_holiday_index, HolidayIndex};
pub use model::{DatedEntry, HolidayEntry, HolidayRecord, HOLIDAY_COLOR};
pub use normalize::normalize;
pub use rules::{rule_for, BulgarianCarryOver, CarryOverRule, NoCarryOver};
