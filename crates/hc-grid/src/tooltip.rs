//! Tooltip placement within a viewport.
//!
//! Given the pointer position and the measured size of a floating panel,
//! compute a position that keeps the panel's bounding box inside the
//! viewport: offset from the anchor by default, flipped to the opposite
//! side of the anchor on any axis where the default would overflow.

use hc_core::Real;

/// Gap in pixels between the anchor point and the panel.
pub const TOOLTIP_OFFSET: Real = 12.0;

/// A point in viewport coordinates (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: Real,
    /// Vertical coordinate.
    pub y: Real,
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Width in pixels.
    pub width: Real,
    /// Height in pixels.
    pub height: Real,
}

/// Compute the top-left position for a floating panel near `anchor`.
///
/// Each axis is handled independently: the default position is
/// `anchor + TOOLTIP_OFFSET`; when that would push the panel past the
/// right (or bottom) viewport edge, the panel flips to
/// `anchor - size - TOOLTIP_OFFSET` on that axis. Pure function, no
/// state.
pub fn place_tooltip(anchor: Point, panel: Extent, viewport: Extent) -> Point {
    let mut x = anchor.x + TOOLTIP_OFFSET;
    let mut y = anchor.y + TOOLTIP_OFFSET;
    if x + panel.width > viewport.width {
        x = anchor.x - panel.width - TOOLTIP_OFFSET;
    }
    if y + panel.height > viewport.height {
        y = anchor.y - panel.height - TOOLTIP_OFFSET;
    }
    Point { x, y }
}
