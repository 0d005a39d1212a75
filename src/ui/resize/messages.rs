// SPDX-License-Identifier: MPL-2.0
//! Resize message/event types re-exported by the facade.

use super::Handle;
use crate::geometry::GeometryBox;
use iced::{Point, Size};

/// Messages emitted by the handle rods and the capture layer. All cursor
/// positions are in viewport coordinates, the frame the capture layer
/// lives in.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Pointer pressed on one of the handle rods. `element` is the
    /// element's box in viewport coordinates at press time.
    HandlePressed {
        handle: Handle,
        cursor: Point,
        element: GeometryBox,
    },
    /// Pointer moved over the active capture layer.
    CaptureMoved { cursor: Point, viewport: Size },
    /// Pointer released over the capture layer.
    CaptureReleased,
    /// Pointer left the capture layer.
    CaptureLeft,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    None,
    /// The element was resized.
    Resized { element: GeometryBox },
    /// The gesture tore down; the handle's idle visual state is restored.
    GestureEnded,
}
