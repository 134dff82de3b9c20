//! Bulgarian carry-over rule.

use hc_time::Weekday;

use crate::model::{DatedEntry, HolidayEntry};
use crate::rules::CarryOverRule;

/// Marker appended to the localized title of a substitute entry.
const TITLE_SUFFIX: &str = " (преместен)";

/// Marker appended to the global name of a substitute entry.
const GLOBAL_SUFFIX: &str = " (carry-over)";

/// Category tag carried by every substitute entry.
const SUBSTITUTE_TYPE: &str = "Bank";

/// Bulgarian substitute-holiday policy: a public holiday falling on a
/// Sunday grants the following Monday as a substitute non-working day.
///
/// A substitute is only synthesized when no *original* holiday already
/// occupies that Monday. The occupancy check deliberately consults the
/// original accepted list alone, never substitutes synthesized earlier
/// in the same pass; two holidays sharing one Sunday therefore each
/// produce their own Monday entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct BulgarianCarryOver;

impl CarryOverRule for BulgarianCarryOver {
    fn name(&self) -> &str {
        "Bulgaria (Sunday → Monday)"
    }

    fn substitutes(&self, accepted: &[DatedEntry]) -> Vec<DatedEntry> {
        let mut extras = Vec::new();
        for dated in accepted {
            if dated.date.weekday() != Weekday::Sunday {
                continue;
            }
            let Ok(monday) = dated.date.add_days(1) else {
                continue;
            };
            let already_holiday = accepted.iter().any(|other| other.date == monday);
            if already_holiday {
                continue;
            }
            extras.push(DatedEntry {
                date: monday,
                entry: HolidayEntry {
                    title: format!("{}{TITLE_SUFFIX}", dated.entry.title),
                    global_name: format!("{}{GLOBAL_SUFFIX}", dated.entry.global_name),
                    color: dated.entry.color.clone(),
                    types: vec![SUBSTITUTE_TYPE.to_string()],
                },
            });
        }
        extras
    }
}
