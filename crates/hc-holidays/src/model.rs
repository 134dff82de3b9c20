//! Holiday record and entry types.

use hc_time::Date;

/// The single highlight colour applied to every holiday entry.
///
/// A bright coral-red for maximum visibility. Using one fixed colour for
/// all entries (rather than a per-category palette) is a deliberate
/// simplification.
pub const HOLIDAY_COLOR: &str = "#e05555";

/// A raw holiday record as delivered by the external data source.
///
/// Immutable input; one record per (date, holiday) occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRecord {
    /// The date the holiday falls on.
    pub date: Date,
    /// Localized holiday name (may be empty).
    pub local_name: String,
    /// English / global holiday name.
    pub name: String,
    /// Category tags (e.g. `"Public"`, `"Bank"`, `"School"`).
    pub types: Vec<String>,
}

/// A display-ready holiday entry derived from a [`HolidayRecord`].
///
/// Multiple entries may share a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayEntry {
    /// Display title: the localized name, falling back to the global one.
    pub title: String,
    /// The global (English) name.
    pub global_name: String,
    /// Highlight colour, currently always [`HOLIDAY_COLOR`].
    pub color: String,
    /// Category tags, in source order.
    pub types: Vec<String>,
}

/// A [`HolidayEntry`] tagged with the date it belongs to.
///
/// This is the unit the carry-over rules and the index builder operate
/// on; the date key is derived from `date` on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedEntry {
    /// The date the entry belongs to.
    pub date: Date,
    /// The display entry.
    pub entry: HolidayEntry,
}

impl DatedEntry {
    /// The canonical `YYYY-MM-DD` key of this entry's date.
    pub fn key(&self) -> String {
        self.date.key()
    }
}
