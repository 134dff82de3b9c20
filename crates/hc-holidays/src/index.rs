//! Date-keyed holiday index and its builder.

use std::collections::HashMap;

use crate::model::{DatedEntry, HolidayEntry, HolidayRecord};
use crate::normalize::normalize;
use crate::rules::rule_for;

/// A mapping from date key (`YYYY-MM-DD`) to the holidays on that date.
///
/// Per-date lists keep insertion order: original holidays come before
/// synthesized substitutes, which is also the order a tooltip displays
/// them in. Rebuilt wholesale on every year/country change; never
/// mutated incrementally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HolidayIndex {
    by_key: HashMap<String, Vec<HolidayEntry>>,
    entry_count: usize,
}

impl HolidayIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` to the list at `key`, creating the list on first
    /// occurrence.
    fn push(&mut self, key: String, entry: HolidayEntry) {
        self.by_key.entry(key).or_default().push(entry);
        self.entry_count += 1;
    }

    /// The entries on the given date, in insertion order, or `None` if
    /// the date holds no holidays.
    pub fn get(&self, key: &str) -> Option<&[HolidayEntry]> {
        self.by_key.get(key).map(Vec::as_slice)
    }

    /// Number of dates that hold at least one holiday.
    pub fn date_count(&self) -> usize {
        self.by_key.len()
    }

    /// Total number of entries across all dates.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// `true` if the index holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Iterate over `(date key, entries)` pairs in unspecified key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[HolidayEntry])> {
        self.by_key.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl FromIterator<DatedEntry> for HolidayIndex {
    fn from_iter<I: IntoIterator<Item = DatedEntry>>(iter: I) -> Self {
        let mut index = HolidayIndex::new();
        for dated in iter {
            index.push(dated.key(), dated.entry);
        }
        index
    }
}

/// Build the holiday index for one country-year worth of records.
///
/// Pipeline: normalize (public subset, display entries) → append the
/// country's carry-over substitutes → fold everything into the index in
/// order. An empty record list yields an empty index for any country.
pub fn build_holiday_index(records: &[HolidayRecord], country_code: &str) -> HolidayIndex {
    let accepted = normalize(records);
    let extras = rule_for(country_code).substitutes(&accepted);
    accepted.into_iter().chain(extras).collect()
}
