//! End-to-end flow: raw records → holiday index → year grid → overlay,
//! plus session behavior against an in-memory source.

use holcal::api::{CalendarSession, Country, HolidaySource, LoadOutcome};
use holcal::core::errors::{Error, Result};
use holcal::grid::{build_year_grid, CELLS_PER_MONTH};
use holcal::holidays::{build_holiday_index, HolidayRecord};
use holcal::time::Date;

fn record(key: &str, local: &str, name: &str, types: &[&str]) -> HolidayRecord {
    HolidayRecord {
        date: Date::from_key(key).unwrap(),
        local_name: local.to_string(),
        name: name.to_string(),
        types: types.iter().map(|t| t.to_string()).collect(),
    }
}

/// A plausible slice of the Bulgarian 2024 feed.
fn bulgaria_2024() -> Vec<HolidayRecord> {
    vec![
        record("2024-01-01", "Нова година", "New Year's Day", &["Public"]),
        record("2024-03-03", "Ден на Освобождението", "Liberation Day", &["Public"]),
        record("2024-05-05", "Великден", "Easter Sunday", &["Public"]),
        record("2024-05-06", "Гергьовден", "Saint George's Day", &["Public"]),
        record("2024-05-24", "Ден на писмеността", "Culture Day", &["Public"]),
        record("2024-09-22", "Ден на Независимостта", "Independence Day", &["Public"]),
        record("2024-12-25", "Коледа", "Christmas Day", &["Public", "Bank"]),
        record("2024-06-01", "Ден на детето", "Children's Day", &["Observance"]),
    ]
}

#[test]
fn index_applies_filter_and_carry_over() {
    let index = build_holiday_index(&bulgaria_2024(), "BG");

    // The observance-only record is filtered out
    assert!(index.get("2024-06-01").is_none());

    // 2024-03-03 is a Sunday but 2024-03-04 is free → substitute
    let mar4 = index.get("2024-03-04").expect("carry-over for Mar 3");
    assert_eq!(mar4[0].title, "Ден на Освобождението (преместен)");
    assert_eq!(mar4[0].global_name, "Liberation Day (carry-over)");
    assert_eq!(mar4[0].types, vec!["Bank".to_string()]);

    // 2024-05-05 is a Sunday, but 2024-05-06 already holds an original
    // holiday → no substitute, and the original Monday entry is alone
    let may6 = index.get("2024-05-06").unwrap();
    assert_eq!(may6.len(), 1);
    assert_eq!(may6[0].title, "Гергьовден");

    // 2024-09-22 is a Sunday with a free Monday
    assert!(index.get("2024-09-23").is_some());
}

#[test]
fn lone_sunday_holiday_gains_monday_substitute() {
    // Country BG, one record on Sunday 2024-05-05, Monday free.
    let index = build_holiday_index(&[record("2024-05-05", "", "X", &["Public"])], "BG");
    assert_eq!(index.get("2024-05-05").unwrap()[0].title, "X");
    let monday = index.get("2024-05-06").unwrap();
    assert_eq!(monday.len(), 1);
    assert_eq!(monday[0].title, "X (преместен)");
}

#[test]
fn year_grid_overlay_marks_holiday_cells() {
    let index = build_holiday_index(&bulgaria_2024(), "BG");
    let today = Date::from_ymd(2024, 5, 6).unwrap();
    let grids = build_year_grid(2024, today).unwrap();
    assert_eq!(grids.len(), 12);
    assert!(grids.iter().all(|g| g.cells.len() == CELLS_PER_MONTH));

    let march = &grids[2];
    let holiday_keys: Vec<&str> = march
        .overlay(&index)
        .filter(|(_, entries)| !entries.is_empty())
        .filter_map(|(cell, _)| cell.date_key.as_deref())
        .collect();
    assert_eq!(holiday_keys, vec!["2024-03-03", "2024-03-04"]);
}

// ── Session against an in-memory source ───────────────────────────────────────

struct MemorySource {
    fail_year: Option<u16>,
}

impl HolidaySource for MemorySource {
    fn fetch_holidays(&self, year: u16, _code: &str) -> Result<Vec<HolidayRecord>> {
        if self.fail_year == Some(year) {
            return Err(Error::Transport {
                status: 500,
                message: "boom".into(),
            });
        }
        match year {
            2024 => Ok(bulgaria_2024()),
            _ => Ok(vec![]),
        }
    }

    fn fetch_countries(&self) -> Result<Vec<Country>> {
        Ok(vec![Country {
            code: "BG".into(),
            display_name: "Bulgaria".into(),
        }])
    }
}

#[test]
fn session_round_trip() {
    let today = Date::from_ymd(2024, 5, 6).unwrap();
    let mut session = CalendarSession::new(MemorySource { fail_year: None }, today);
    assert_eq!(session.load_holidays().unwrap(), LoadOutcome::Loaded);
    // 7 public originals + 2 substitutes (Mar 3 and Sep 22 Sundays)
    assert_eq!(session.index().entry_count(), 9);
    assert_eq!(session.status_line(), "9 holidays for BG in 2024");

    let countries = session.fetch_countries().unwrap();
    assert_eq!(countries[0].code, "BG");
}

#[test]
fn failed_year_step_keeps_previous_index() {
    let today = Date::from_ymd(2024, 5, 6).unwrap();
    let mut session = CalendarSession::new(MemorySource { fail_year: Some(2025) }, today);
    session.load_holidays().unwrap();
    let before = session.index().entry_count();
    assert!(before > 0);

    // The year advances, the fetch fails, the index survives
    let err = session.next_year().unwrap_err();
    assert!(matches!(err, Error::Transport { status: 500, .. }));
    assert_eq!(session.year(), 2025);
    assert_eq!(session.index().entry_count(), before);

    // Stepping back succeeds and rebuilds
    session.prev_year().unwrap();
    assert_eq!(session.index().entry_count(), before);
}
