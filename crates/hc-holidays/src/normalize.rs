//! Public-subset filtering and entry derivation.

use crate::model::{DatedEntry, HolidayEntry, HolidayRecord, HOLIDAY_COLOR};

/// Category tag marking a nationwide public holiday.
pub const PUBLIC_TYPE: &str = "Public";

/// Filter `records` down to the public subset and derive a display entry
/// for each, preserving input order.
///
/// Records whose `types` do not contain [`PUBLIC_TYPE`] are dropped. The
/// entry title prefers the localized name and falls back to the global
/// name when the localized one is empty. Pure transformation; the input
/// is never mutated.
pub fn normalize(records: &[HolidayRecord]) -> Vec<DatedEntry> {
    records
        .iter()
        .filter(|r| r.types.iter().any(|t| t == PUBLIC_TYPE))
        .map(|r| DatedEntry {
            date: r.date,
            entry: HolidayEntry {
                title: if r.local_name.is_empty() {
                    r.name.clone()
                } else {
                    r.local_name.clone()
                },
                global_name: r.name.clone(),
                color: HOLIDAY_COLOR.to_string(),
                types: r.types.clone(),
            },
        })
        .collect()
}
