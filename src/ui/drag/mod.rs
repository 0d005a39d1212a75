// SPDX-License-Identifier: MPL-2.0
//! Drag-to-move behavior.
//!
//! Moves an element inside its container by pointer delta, following the
//! "state down, messages up" pattern: the parent embeds [`State`], feeds
//! it [`Message`]s from the view layers, and reads the element's current
//! box back for layout. On press a transparent capture layer is stacked
//! over the container; it owns the pointer until release or exit.

mod messages;
mod overlay;
pub mod view;

pub use messages::{Event, Message};

use crate::diagnostics::{BehaviorWarning, DiagnosticsHandle};
use crate::geometry::clamp::clamp_position;
use crate::geometry::{GeometryBox, Insets};
use crate::gesture::{CaptureState, GestureMode};
use iced::Point;

/// Drag configuration. The positioning container itself is structural in
/// Iced (it is whatever the view wraps); the config carries the
/// container-dependent knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragConfig {
    /// Padding box of the container, honored when clamping.
    pub container_padding: Insets,
    /// Keep the element inside the container's padding box.
    pub clamp_to_container: bool,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            container_padding: Insets::default(),
            clamp_to_container: true,
        }
    }
}

/// Local state for one drag attachment.
#[derive(Debug, Clone)]
pub struct State {
    config: DragConfig,
    element: GeometryBox,
    capture: CaptureState,
    diagnostics: Option<DiagnosticsHandle>,
}

impl State {
    /// Attaches the behavior to an element at its current box.
    pub fn attach(element: GeometryBox, config: DragConfig) -> Self {
        Self {
            config,
            element,
            capture: CaptureState::default(),
            diagnostics: None,
        }
    }

    /// Reapplies a (possibly changed) configuration. Same semantics as
    /// attaching: the config is recomputed, the element box is kept.
    pub fn update_config(&mut self, config: DragConfig) {
        self.config = config;
    }

    pub fn with_diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(handle);
        self
    }

    /// The element's current box, for layout.
    pub fn element(&self) -> GeometryBox {
        self.element
    }

    /// Replaces the element's box, e.g. after the parent resized it.
    pub fn set_element(&mut self, element: GeometryBox) {
        self.element = element;
    }

    /// Whether a gesture (and therefore the capture layer) is active.
    pub fn is_dragging(&self) -> bool {
        self.capture.is_active()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::GrabPressed { cursor } => {
                // Press position relative to the container, like the
                // element box itself.
                let origin = Point::new(self.element.left + cursor.x, self.element.top + cursor.y);
                if !self
                    .capture
                    .begin(GestureMode::Move, origin, self.element)
                {
                    self.warn(BehaviorWarning::GestureAlreadyActive);
                }
                Event::None
            }
            Message::CaptureMoved { cursor, container } => {
                let Some(moved) = self.capture.motion(cursor) else {
                    return Event::None;
                };

                self.element = if self.config.clamp_to_container {
                    clamp_position(moved, container, self.config.container_padding)
                } else {
                    moved
                };
                Event::Moved {
                    element: self.element,
                }
            }
            Message::CaptureReleased | Message::CaptureLeft => {
                if self.capture.finish() {
                    Event::GestureEnded
                } else {
                    Event::None
                }
            }
        }
    }

    fn warn(&self, warning: BehaviorWarning) {
        if let Some(handle) = &self.diagnostics {
            handle.warn(warning);
        }
    }
}
