// SPDX-License-Identifier: MPL-2.0
//! Mask and tooltip placement math for the step-tour overlay.

use super::GeometryBox;
use iced::{Point, Size};

/// Which side of the highlighted element the tooltip card sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    Top,
    Left,
    Right,
    #[default]
    Bottom,
}

/// Computes the four opaque panels that together punch a transparent hole
/// exactly over `target` within `viewport`.
///
/// Panel order is left, top, right, bottom. The left/right panels span the
/// full viewport height; the top/bottom panels only span the target's
/// width, matching the hole's column.
pub fn mask_panels(target: GeometryBox, viewport: Size) -> [GeometryBox; 4] {
    let left = GeometryBox::new(0.0, 0.0, target.left, viewport.height);
    let top = GeometryBox::new(target.left, 0.0, target.width, target.top);
    let right = GeometryBox::new(
        target.right(),
        0.0,
        viewport.width - target.right(),
        viewport.height,
    );
    let bottom = GeometryBox::new(
        target.left,
        target.bottom(),
        target.width,
        viewport.height - target.bottom(),
    );

    [left, top, right, bottom]
}

/// Positions a tooltip card of the given size next to `target`, offset by
/// `gap` pixels on the requested side and centered along the perpendicular
/// axis.
pub fn place_tooltip(target: GeometryBox, tooltip: Size, side: Side, gap: f32) -> Point {
    match side {
        Side::Bottom => Point::new(
            target.left + target.width / 2.0 - tooltip.width / 2.0,
            target.bottom() + gap,
        ),
        Side::Top => Point::new(
            target.left + target.width / 2.0 - tooltip.width / 2.0,
            target.top - tooltip.height - gap,
        ),
        Side::Left => Point::new(
            target.left - tooltip.width - gap,
            target.top + target.height / 2.0 - tooltip.height / 2.0,
        ),
        Side::Right => Point::new(
            target.right() + gap,
            target.top + target.height / 2.0 - tooltip.height / 2.0,
        ),
    }
}

/// Approximate glyph advance used to size the tooltip card without asking
/// the text shaper.
const APPROX_CHAR_WIDTH: f32 = 7.0;
const CARD_PADDING: f32 = 16.0;
const LINE_HEIGHT: f32 = 18.0;
/// Base card height: one text line plus the advance/skip control row.
const BASE_HEIGHT: f32 = 60.0;

pub const TOOLTIP_MIN_WIDTH: f32 = 150.0;
pub const TOOLTIP_MAX_WIDTH: f32 = 200.0;

/// Estimates the rendered size of a tooltip card for `label`.
///
/// The width grows with the label and is clamped to 150-200 px; labels
/// wider than the card wrap and add line height. An estimate is enough
/// here since the card centers on the target rather than abutting other
/// chrome.
pub fn estimate_tooltip_size(label: &str) -> Size {
    let text_width = label.chars().count() as f32 * APPROX_CHAR_WIDTH;
    let width = (text_width + CARD_PADDING).clamp(TOOLTIP_MIN_WIDTH, TOOLTIP_MAX_WIDTH);

    let usable = width - CARD_PADDING;
    let lines = if text_width <= usable {
        1.0
    } else {
        (text_width / usable).ceil()
    };

    Size::new(width, BASE_HEIGHT + (lines - 1.0) * LINE_HEIGHT)
}
