//! # holcal
//!
//! A public-holiday calendar engine: turns flat holiday records fetched
//! from a remote source into a date-keyed index (with country-specific
//! substitute-holiday rules) and derives fixed-layout 42-cell month
//! grids for any year.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `hc-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use holcal::grid::build_year_grid;
//! use holcal::time::Date;
//!
//! let today = Date::from_ymd(2024, 5, 6).unwrap();
//! let grids = build_year_grid(2024, today).unwrap();
//! assert_eq!(grids.len(), 12);
//! assert!(grids.iter().all(|g| g.cells.len() == 42));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use hc_core as core;

/// Date, weekday, and date-key codec types.
pub use hc_time as time;

/// Holiday normalization, carry-over rules, and the date-keyed index.
pub use hc_holidays as holidays;

/// Month-grid generation and tooltip placement.
pub use hc_grid as grid;

/// Remote holiday source and calendar session.
pub use hc_api as api;
