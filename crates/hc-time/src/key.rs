//! Canonical `YYYY-MM-DD` date-key codec.
//!
//! Date keys are the map index used everywhere a holiday is attached to a
//! date: the holiday index, the month-grid cells, and the wire format of
//! the remote holiday source all speak this shape.

use hc_core::errors::{Error, Result};

/// Encode `(year, month_index, day)` as a canonical `YYYY-MM-DD` key.
///
/// `month_index` is zero-based (0 = January), matching the month-grid
/// convention; the emitted key carries the 1-based month, zero-padded.
pub fn encode(year: u16, month_index: u8, day: u8) -> String {
    format!("{year:04}-{:02}-{day:02}", month_index as u16 + 1)
}

/// Decode a `YYYY-MM-DD` key into `(year, month, day)` with a 1-based
/// month.
///
/// Fails with [`Error::Format`] unless the key is exactly three
/// dash-separated numeric groups. Calendar validity (leap years, days per
/// month) is *not* checked here; use [`crate::Date::from_key`] for that.
pub fn decode(key: &str) -> Result<(u16, u8, u8)> {
    let mut groups = key.split('-');
    let year = parse_group(key, groups.next())?;
    let month = narrow(key, parse_group(key, groups.next())?)?;
    let day = narrow(key, parse_group(key, groups.next())?)?;
    if groups.next().is_some() {
        return Err(Error::Format(format!(
            "{key:?} has more than three dash-separated groups"
        )));
    }
    Ok((year, month, day))
}

fn parse_group(key: &str, group: Option<&str>) -> Result<u16> {
    let group = group.ok_or_else(|| {
        Error::Format(format!("{key:?} has fewer than three dash-separated groups"))
    })?;
    if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Format(format!(
            "{key:?} contains non-numeric group {group:?}"
        )));
    }
    group
        .parse::<u16>()
        .map_err(|_| Error::Format(format!("{key:?} contains oversized group {group:?}")))
}

fn narrow(key: &str, value: u16) -> Result<u8> {
    u8::try_from(value)
        .map_err(|_| Error::Format(format!("{key:?} contains oversized group {value:?}")))
}
