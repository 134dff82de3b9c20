//! # hc-grid
//!
//! Fixed-layout calendar month grids (42 cells, Monday-first weeks) and
//! the viewport-clamping tooltip placement function.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Month-grid generation and holiday overlay.
pub mod grid;

/// Tooltip placement within a viewport.
pub mod tooltip;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use grid::{build_month_grid, build_year_grid, DayCell, MonthGrid, CELLS_PER_MONTH};
pub use tooltip::{place_tooltip, Extent, Point, TOOLTIP_OFFSET};
