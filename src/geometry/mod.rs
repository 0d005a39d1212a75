// SPDX-License-Identifier: MPL-2.0
//! Geometry primitives shared by every behavior.
//!
//! A [`GeometryBox`] is a read-only snapshot of an element's rendered
//! position and size, taken on demand and never cached across gestures.
//! [`Insets`] describe a container's padding box, read at clamp time.

pub mod clamp;
pub mod placement;

use iced::{Point, Rectangle, Size};

/// Snapshot of an element's layout box, in pixels, relative to its
/// positioning container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeometryBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl GeometryBox {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge (`left + width`).
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Bottom edge (`top + height`).
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Top-left corner as a point.
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The same box translated by the given deltas.
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            ..*self
        }
    }

    /// Whether the box encloses any area at all. A zero-area box is the
    /// signature of an element the host has not laid out yet.
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Whether a point falls inside the box.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }
}

impl From<Rectangle> for GeometryBox {
    fn from(rect: Rectangle) -> Self {
        Self {
            left: rect.x,
            top: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

impl From<GeometryBox> for Rectangle {
    fn from(geometry: GeometryBox) -> Self {
        Rectangle {
            x: geometry.left,
            y: geometry.top,
            width: geometry.width,
            height: geometry.height,
        }
    }
}

/// Padding of a container's content box, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f32,
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Insets {
    pub fn new(top: f32, left: f32, right: f32, bottom: f32) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    /// Uniform padding on all four edges.
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Best-effort parse of four CSS-style pixel strings (`"12px"`), for
    /// hosts whose padding values arrive as text (the config file takes
    /// the same strings for its pixel fields). Unparsable values degrade
    /// to `0.0`; callers should not rely on clamp precision in that case.
    pub fn from_px_strings(top: &str, left: &str, right: &str, bottom: &str) -> Self {
        Self {
            top: parse_px(top),
            left: parse_px(left),
            right: parse_px(right),
            bottom: parse_px(bottom),
        }
    }
}

/// Extracts the leading run of ASCII digits from a pixel string.
///
/// `"12px"` parses to `12.0`, `"12.5px"` to `12.0` (the fraction is
/// dropped), anything without leading digits to `0.0`.
pub fn parse_px(value: &str) -> f32 {
    let digits: String = value
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0.0)
}
