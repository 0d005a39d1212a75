// SPDX-License-Identifier: MPL-2.0
//! Drag message/event types re-exported by the facade.

use crate::geometry::GeometryBox;
use iced::{Point, Size};

/// Messages emitted by the grab region and the capture layer.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Pointer pressed inside the grab region. `cursor` is relative to the
    /// element's own box.
    GrabPressed { cursor: Point },
    /// Pointer moved over the active capture layer. `cursor` is relative
    /// to the container; `container` is the layer's live size.
    CaptureMoved { cursor: Point, container: Size },
    /// Pointer released over the capture layer.
    CaptureReleased,
    /// Pointer left the capture layer.
    CaptureLeft,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    None,
    /// The element moved to a new position.
    Moved { element: GeometryBox },
    /// The gesture tore down; the capture layer is gone.
    GestureEnded,
}
