// SPDX-License-Identifier: MPL-2.0
//! Constraint clamping for moving and resizing boxes.
//!
//! Each clamp overwrites only the dimensions its edge checks own: a
//! position clamp touches `left`/`top`, a size clamp touches
//! `width`/`height`. Edges that have not crossed a boundary are left
//! untouched, so a box already within bounds passes through unchanged.

use super::{GeometryBox, Insets};
use iced::Size;

/// Optional upper bounds applied when resizing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeLimits {
    pub max_width: Option<f32>,
    pub max_height: Option<f32>,
}

/// Clamps a moving box so it stays within the container's padding box.
///
/// Edge check order is left, top, bottom, right. The checks clamp disjoint
/// values except when the box is larger than the container; there the later
/// bottom/right checks win. That outcome is an edge case, not a guaranteed
/// contract.
pub fn clamp_position(moving: GeometryBox, container: Size, insets: Insets) -> GeometryBox {
    let mut adjusted = moving;

    if adjusted.left <= insets.left {
        adjusted.left = insets.left;
    }
    if adjusted.top <= insets.top {
        adjusted.top = insets.top;
    }
    if adjusted.bottom() >= container.height - insets.bottom {
        adjusted.top = container.height - adjusted.height - insets.bottom;
    }
    if adjusted.right() >= container.width - insets.right {
        adjusted.left = container.width - adjusted.width - insets.right;
    }

    adjusted
}

/// Clamps a resizing box so its right/bottom edges stay within the
/// boundary's padding box, then caps to the optional maximum dimensions.
///
/// Edge check order is right then bottom. Only `width` and `height` are
/// overwritten; the box position is never touched here.
pub fn clamp_size(
    resizing: GeometryBox,
    boundary: Size,
    insets: Insets,
    limits: SizeLimits,
) -> GeometryBox {
    let mut adjusted = resizing;

    if adjusted.right() >= boundary.width - insets.right {
        adjusted.width = boundary.width - adjusted.left - insets.right;
    }
    if adjusted.bottom() >= boundary.height - insets.bottom {
        adjusted.height = boundary.height - adjusted.top - insets.bottom;
    }

    if let Some(max_width) = limits.max_width {
        adjusted.width = adjusted.width.min(max_width);
    }
    if let Some(max_height) = limits.max_height {
        adjusted.height = adjusted.height.min(max_height);
    }

    adjusted
}
