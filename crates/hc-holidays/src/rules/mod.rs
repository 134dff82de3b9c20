//! Carry-over rule trait and per-country implementations.
//!
//! A carry-over rule synthesizes substitute holiday entries for a country
//! whose law moves weekend holidays to the following working day. Rules
//! never mutate, replace, or reorder the entries they are given; they
//! only produce extras to append.

mod bulgaria;

pub use bulgaria::BulgarianCarryOver;

use crate::model::DatedEntry;

/// A country-specific substitute-holiday policy.
pub trait CarryOverRule: std::fmt::Debug + Send + Sync {
    /// Human-readable rule name (e.g. `"Bulgaria (Sunday → Monday)"`).
    fn name(&self) -> &str;

    /// Given the accepted (normalized) entries for a year, return the
    /// substitute entries to append. Pure; the input is never modified.
    fn substitutes(&self, accepted: &[DatedEntry]) -> Vec<DatedEntry>;
}

/// The identity rule: no substitutes, ever.
///
/// Applied to every country without a designated carry-over policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCarryOver;

impl CarryOverRule for NoCarryOver {
    fn name(&self) -> &str {
        "None"
    }

    fn substitutes(&self, _accepted: &[DatedEntry]) -> Vec<DatedEntry> {
        Vec::new()
    }
}

/// Look up the carry-over rule for a country code.
///
/// Unknown codes map to [`NoCarryOver`]; the table is the single place
/// to extend when another country's policy is added.
pub fn rule_for(country_code: &str) -> &'static dyn CarryOverRule {
    match country_code {
        "BG" => &BulgarianCarryOver,
        _ => &NoCarryOver,
    }
}
