//! Session state: current year, country, and holiday index.

use hc_core::errors::Result;
use hc_grid::{build_year_grid, MonthGrid};
use hc_holidays::{build_holiday_index, HolidayIndex};
use hc_time::Date;

use crate::source::{Country, HolidaySource};

/// Country selected when a session starts.
pub const DEFAULT_COUNTRY: &str = "BG";

/// What a load trigger did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The index was rebuilt from freshly fetched records.
    Loaded,
    /// A load was already in flight; the trigger was ignored and no
    /// state changed.
    Suppressed,
}

/// The single owner of the calendar's shared mutable state.
///
/// One session holds the current year, the current country code, the
/// current [`HolidayIndex`], and the injected `today` reference used for
/// the grid's `is_today` flag. All mutation happens through `&mut self`
/// on one control flow; a load in progress suppresses new triggers
/// rather than interleaving, and the index is swapped atomically — a
/// failed load keeps the last-known-good index.
#[derive(Debug)]
pub struct CalendarSession<S: HolidaySource> {
    source: S,
    year: u16,
    country: String,
    today: Date,
    index: HolidayIndex,
    fetching: bool,
}

impl<S: HolidaySource> CalendarSession<S> {
    /// Create a session with an empty index.
    ///
    /// The year defaults to `today`'s year and the country to
    /// [`DEFAULT_COUNTRY`]; no fetch happens until a trigger or an
    /// explicit [`load_holidays`](Self::load_holidays) call.
    pub fn new(source: S, today: Date) -> Self {
        CalendarSession {
            source,
            year: today.year(),
            country: DEFAULT_COUNTRY.to_string(),
            today,
            index: HolidayIndex::new(),
            fetching: false,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The currently displayed year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// The currently selected country code.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// The current holiday index (last successful load, possibly empty).
    pub fn index(&self) -> &HolidayIndex {
        &self.index
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.fetching
    }

    /// One-line summary of the current state, e.g.
    /// `"12 holidays for BG in 2024"`.
    pub fn status_line(&self) -> String {
        format!(
            "{} holidays for {} in {}",
            self.index.entry_count(),
            self.country,
            self.year
        )
    }

    // ── Triggers ──────────────────────────────────────────────────────────────

    /// Switch country and reload. Suppressed while a load is in flight.
    pub fn set_country(&mut self, code: &str) -> Result<LoadOutcome> {
        if self.fetching {
            return Ok(LoadOutcome::Suppressed);
        }
        self.country = code.to_string();
        self.load_holidays()
    }

    /// Step to the previous year and reload. Suppressed while a load is
    /// in flight.
    pub fn prev_year(&mut self) -> Result<LoadOutcome> {
        if self.fetching {
            return Ok(LoadOutcome::Suppressed);
        }
        self.year -= 1;
        self.load_holidays()
    }

    /// Step to the next year and reload. Suppressed while a load is in
    /// flight.
    pub fn next_year(&mut self) -> Result<LoadOutcome> {
        if self.fetching {
            return Ok(LoadOutcome::Suppressed);
        }
        self.year += 1;
        self.load_holidays()
    }

    // ── Loading ───────────────────────────────────────────────────────────────

    /// Fetch records for the current year/country and rebuild the index.
    ///
    /// The rebuild is atomic from the caller's perspective: the new index
    /// replaces the old one only after a successful fetch. On a transport
    /// error the previous index is retained and the error is returned;
    /// no retries are attempted here. The in-flight flag is cleared on
    /// both success and failure.
    pub fn load_holidays(&mut self) -> Result<LoadOutcome> {
        if self.fetching {
            return Ok(LoadOutcome::Suppressed);
        }
        self.fetching = true;
        let fetched = self.source.fetch_holidays(self.year, &self.country);
        self.fetching = false;

        let records = fetched?;
        self.index = build_holiday_index(&records, &self.country);
        Ok(LoadOutcome::Loaded)
    }

    /// Fetch the country list from the source (pass-through).
    pub fn fetch_countries(&self) -> Result<Vec<Country>> {
        self.source.fetch_countries()
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    /// Build the 12 month grids for the current year.
    ///
    /// Independent of holiday state; callers overlay [`Self::index`]
    /// onto the cells via [`MonthGrid::overlay`].
    pub fn year_grid(&self) -> Result<Vec<MonthGrid>> {
        build_year_grid(self.year, self.today)
    }
}
