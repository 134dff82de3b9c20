//! Month-grid generation and holiday overlay.
//!
//! A month grid is a fixed 6×7 layout: leading blanks align day 1 to its
//! weekday column (Monday first), one cell per calendar day, trailing
//! blanks pad to exactly 42 cells so every month renders at the same
//! height. Grid generation never consults holiday data; overlaying the
//! holiday index onto cells is a separate, caller-driven step.

use hc_core::errors::Result;
use hc_core::ensure;
use hc_holidays::{HolidayEntry, HolidayIndex};
use hc_time::{days_in_month, key, Date};

/// Cells per month grid: 6 rows of 7 weekday columns.
pub const CELLS_PER_MONTH: usize = 42;

const DAYS_PER_WEEK: u8 = 7;

/// One cell of a month grid.
///
/// Padding cells carry `None` for `day` and `date_key` and `false` for
/// both flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    /// Day of the month (1-based), or `None` for a padding cell.
    pub day: Option<u8>,
    /// Canonical date key of the cell, or `None` for a padding cell.
    pub date_key: Option<String>,
    /// Whether the cell's date equals the injected "today" reference.
    pub is_today: bool,
    /// Whether the cell sits in a Saturday or Sunday column.
    pub is_weekend: bool,
}

impl DayCell {
    fn padding() -> Self {
        DayCell {
            day: None,
            date_key: None,
            is_today: false,
            is_weekend: false,
        }
    }
}

/// A fixed 42-cell grid for one month of a year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    /// Zero-based month index (0 = January … 11 = December).
    pub month_index: u8,
    /// Exactly [`CELLS_PER_MONTH`] cells in row-major order.
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Pair each cell with its holidays from `index`.
    ///
    /// Padding cells and holiday-free days yield an empty slice. This is
    /// the merge step the grid generator itself deliberately skips.
    pub fn overlay<'a>(
        &'a self,
        index: &'a HolidayIndex,
    ) -> impl Iterator<Item = (&'a DayCell, &'a [HolidayEntry])> {
        self.cells.iter().map(move |cell| {
            let entries = cell
                .date_key
                .as_deref()
                .and_then(|k| index.get(k))
                .unwrap_or(&[]);
            (cell, entries)
        })
    }
}

/// Build the grid for one month.
///
/// `month_index` is zero-based; `today` is the injected reference date
/// the `is_today` flag compares against (the generator never reads the
/// system clock).
pub fn build_month_grid(year: u16, month_index: u8, today: Date) -> Result<MonthGrid> {
    ensure!(
        month_index < 12,
        "month index {month_index} out of range [0, 12)"
    );
    let month = month_index + 1;
    // Weekday column of day 1, re-based so Monday = 0
    let first_day = Date::from_ymd(year, month, 1)?.weekday().monday_index();
    let day_count = days_in_month(year, month);
    let today_key = today.key();

    let mut cells = Vec::with_capacity(CELLS_PER_MONTH);
    for _ in 0..first_day {
        cells.push(DayCell::padding());
    }
    for day in 1..=day_count {
        let date_key = key::encode(year, month_index, day);
        let column = (first_day + day - 1) % DAYS_PER_WEEK;
        cells.push(DayCell {
            is_today: date_key == today_key,
            is_weekend: column == 5 || column == 6,
            day: Some(day),
            date_key: Some(date_key),
        });
    }
    while cells.len() < CELLS_PER_MONTH {
        cells.push(DayCell::padding());
    }

    Ok(MonthGrid { month_index, cells })
}

/// Build all 12 month grids for a year.
pub fn build_year_grid(year: u16, today: Date) -> Result<Vec<MonthGrid>> {
    (0..12)
        .map(|month_index| build_month_grid(year, month_index, today))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> Date {
        Date::from_ymd(2024, 5, 6).unwrap()
    }

    #[test]
    fn twelve_months_of_42_cells() {
        let grids = build_year_grid(2024, today()).unwrap();
        assert_eq!(grids.len(), 12);
        for (i, grid) in grids.iter().enumerate() {
            assert_eq!(grid.month_index as usize, i);
            assert_eq!(grid.cells.len(), CELLS_PER_MONTH);
        }
    }

    #[test]
    fn day_cell_counts_match_month_lengths() {
        for (year, expected_feb) in [(2024u16, 29usize), (2023, 28), (2100, 28), (2000, 29)] {
            let grids = build_year_grid(year, today()).unwrap();
            let feb_days = grids[1].cells.iter().filter(|c| c.day.is_some()).count();
            assert_eq!(feb_days, expected_feb, "february of {year}");
            let jan_days = grids[0].cells.iter().filter(|c| c.day.is_some()).count();
            assert_eq!(jan_days, 31);
        }
    }

    #[test]
    fn leading_padding_aligns_first_weekday() {
        // May 1, 2024 is a Wednesday → two leading padding cells
        let grid = build_month_grid(2024, 4, today()).unwrap();
        assert_eq!(grid.cells[0].day, None);
        assert_eq!(grid.cells[1].day, None);
        assert_eq!(grid.cells[2].day, Some(1));
        // January 1, 2024 is a Monday → no leading padding
        let jan = build_month_grid(2024, 0, today()).unwrap();
        assert_eq!(jan.cells[0].day, Some(1));
    }

    #[test]
    fn weekend_columns_repeat_every_seven_days() {
        let grid = build_month_grid(2024, 0, today()).unwrap();
        let days: Vec<&DayCell> = grid.cells.iter().filter(|c| c.day.is_some()).collect();
        // Jan 2024 starts on Monday: Sat/Sun are days 6,7,13,14,…
        for window in days.chunks(7) {
            if window.len() == 7 {
                let weekend: Vec<bool> = window.iter().map(|c| c.is_weekend).collect();
                assert_eq!(
                    weekend,
                    [false, false, false, false, false, true, true]
                );
            }
        }
    }

    #[test]
    fn today_flag_follows_injected_reference() {
        let grid = build_month_grid(2024, 4, today()).unwrap();
        let marked: Vec<&DayCell> = grid.cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].date_key.as_deref(), Some("2024-05-06"));

        // A reference date outside the month marks nothing
        let other = Date::from_ymd(2025, 1, 1).unwrap();
        let grid = build_month_grid(2024, 4, other).unwrap();
        assert!(grid.cells.iter().all(|c| !c.is_today));
    }

    #[test]
    fn date_keys_are_canonical() {
        let grid = build_month_grid(2024, 4, today()).unwrap();
        assert_eq!(grid.cells[2].date_key.as_deref(), Some("2024-05-01"));
        let last = grid.cells.iter().rev().find(|c| c.day.is_some()).unwrap();
        assert_eq!(last.date_key.as_deref(), Some("2024-05-31"));
    }

    #[test]
    fn month_index_out_of_range() {
        assert!(build_month_grid(2024, 12, today()).is_err());
    }

    #[test]
    fn overlay_pairs_cells_with_entries() {
        use hc_holidays::{build_holiday_index, HolidayRecord};

        let records = vec![HolidayRecord {
            date: Date::from_ymd(2024, 5, 5).unwrap(),
            local_name: String::new(),
            name: "X".to_string(),
            types: vec!["Public".to_string()],
        }];
        let index = build_holiday_index(&records, "BG");
        let grid = build_month_grid(2024, 4, today()).unwrap();

        let with_holidays: Vec<(&DayCell, &[HolidayEntry])> = grid
            .overlay(&index)
            .filter(|(_, entries)| !entries.is_empty())
            .collect();
        // the original Sunday plus the carried-over Monday
        assert_eq!(with_holidays.len(), 2);
        assert_eq!(with_holidays[0].0.date_key.as_deref(), Some("2024-05-05"));
        assert_eq!(with_holidays[1].0.date_key.as_deref(), Some("2024-05-06"));
        assert_eq!(with_holidays[1].1[0].title, "X (преместен)");
    }
}
