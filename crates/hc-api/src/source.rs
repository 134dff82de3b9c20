//! The `HolidaySource` capability and the `Country` domain type.

use hc_core::errors::Result;
use hc_holidays::HolidayRecord;

/// A country the holiday source can answer for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code (e.g. `"BG"`).
    pub code: String,
    /// Human-readable country name.
    pub display_name: String,
}

/// A provider of raw holiday records.
///
/// The production implementation is [`crate::NagerClient`]; tests swap
/// in an in-memory source. Failures surface as
/// [`hc_core::Error::Transport`] with an HTTP-status-like code.
pub trait HolidaySource {
    /// Fetch the public-holiday records for one country and year.
    fn fetch_holidays(&self, year: u16, country_code: &str) -> Result<Vec<HolidayRecord>>;

    /// Fetch the list of countries the source can answer for.
    fn fetch_countries(&self) -> Result<Vec<Country>>;
}
