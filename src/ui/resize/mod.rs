// SPDX-License-Identifier: MPL-2.0
//! Edge/corner resize behavior.
//!
//! Attaches up to three handles to an element: a right rod (width), a
//! bottom rod (height), and an invisible corner grip (both, each along
//! its own pointer axis). A press on a handle stacks a transparent
//! capture layer over the viewport; the layer owns the pointer until
//! release or exit, and the pressed handle keeps an active visual state
//! for the gesture's lifetime.

mod messages;
mod overlay;
pub mod view;

pub use messages::{Event, Message};

use crate::config::defaults::{DEFAULT_GRIP_SIZE, DEFAULT_ROD_THICKNESS};
use crate::diagnostics::{BehaviorWarning, DiagnosticsHandle};
use crate::geometry::clamp::{clamp_size, SizeLimits};
use crate::geometry::{GeometryBox, Insets};
use crate::gesture::{CaptureState, GestureMode};

/// One resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Right,
    Bottom,
    Diagonal,
}

impl Handle {
    /// Which dimensions this handle's gesture mutates.
    pub fn mode(self) -> GestureMode {
        match self {
            Handle::Right => GestureMode::Width,
            Handle::Bottom => GestureMode::Height,
            Handle::Diagonal => GestureMode::Diagonal,
        }
    }
}

/// Which handles are attached. Defaults to all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleSet {
    pub right: bool,
    pub bottom: bool,
    pub diagonal: bool,
}

impl Default for HandleSet {
    fn default() -> Self {
        Self {
            right: true,
            bottom: true,
            diagonal: true,
        }
    }
}

impl HandleSet {
    pub fn none() -> Self {
        Self {
            right: false,
            bottom: false,
            diagonal: false,
        }
    }

    pub fn contains(&self, handle: Handle) -> bool {
        match handle {
            Handle::Right => self.right,
            Handle::Bottom => self.bottom,
            Handle::Diagonal => self.diagonal,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.right || self.bottom || self.diagonal)
    }
}

/// Resize configuration. The boundary surface is structural (the capture
/// layer fills the viewport, the default boundary); the config carries
/// the boundary-dependent knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeConfig {
    pub handles: HandleSet,
    /// Visually hint the right/bottom rods.
    pub show_overlay_handles: bool,
    /// Keep the element's right/bottom edges inside the boundary.
    pub clamp_to_boundary: bool,
    /// Padding box of the boundary, honored when clamping.
    pub boundary_padding: Insets,
    /// Optional upper bounds on the element's size.
    pub limits: SizeLimits,
    /// Thickness of the right/bottom rods, in pixels.
    pub rod_thickness: f32,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            handles: HandleSet::default(),
            show_overlay_handles: true,
            clamp_to_boundary: true,
            boundary_padding: Insets::default(),
            limits: SizeLimits::default(),
            rod_thickness: DEFAULT_ROD_THICKNESS,
        }
    }
}

/// Local state for one resize attachment.
#[derive(Debug, Clone)]
pub struct State {
    config: ResizeConfig,
    element: GeometryBox,
    capture: CaptureState,
    active_handle: Option<Handle>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl State {
    /// Attaches the behavior to an element at its current box.
    pub fn attach(element: GeometryBox, config: ResizeConfig) -> Self {
        let state = Self {
            config,
            element,
            capture: CaptureState::default(),
            active_handle: None,
            diagnostics: None,
        };
        state.validate();
        state
    }

    /// Reapplies a (possibly changed) configuration.
    pub fn update_config(&mut self, config: ResizeConfig) {
        self.config = config;
        self.validate();
    }

    pub fn with_diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(handle);
        self.validate();
        self
    }

    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    /// The element's current box, for layout.
    pub fn element(&self) -> GeometryBox {
        self.element
    }

    /// Replaces the element's box, e.g. after the parent moved it.
    pub fn set_element(&mut self, element: GeometryBox) {
        self.element = element;
    }

    /// Handle whose gesture is in progress, if any.
    pub fn active_handle(&self) -> Option<Handle> {
        self.active_handle
    }

    pub fn is_resizing(&self) -> bool {
        self.capture.is_active()
    }

    pub fn rod_thickness(&self) -> f32 {
        self.config.rod_thickness
    }

    pub fn grip_size(&self) -> f32 {
        DEFAULT_GRIP_SIZE
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::HandlePressed {
                handle,
                cursor,
                element,
            } => {
                if !self.config.handles.contains(handle) {
                    return Event::None;
                }
                // The gesture runs in viewport coordinates; `element` is
                // the box the rods canvas measured at press time.
                if self.capture.begin(handle.mode(), cursor, element) {
                    self.active_handle = Some(handle);
                } else {
                    self.warn(BehaviorWarning::GestureAlreadyActive);
                }
                Event::None
            }
            Message::CaptureMoved { cursor, viewport } => {
                let Some(resized) = self.capture.motion(cursor) else {
                    return Event::None;
                };

                let resized = if self.config.clamp_to_boundary {
                    clamp_size(
                        resized,
                        viewport,
                        self.config.boundary_padding,
                        self.config.limits,
                    )
                } else {
                    let mut capped = resized;
                    if let Some(max_width) = self.config.limits.max_width {
                        capped.width = capped.width.min(max_width);
                    }
                    if let Some(max_height) = self.config.limits.max_height {
                        capped.height = capped.height.min(max_height);
                    }
                    capped
                };

                // Only the size crosses back into the element's own frame.
                self.element.width = resized.width;
                self.element.height = resized.height;
                Event::Resized {
                    element: self.element,
                }
            }
            Message::CaptureReleased | Message::CaptureLeft => {
                if self.capture.finish() {
                    self.active_handle = None;
                    Event::GestureEnded
                } else {
                    Event::None
                }
            }
        }
    }

    fn validate(&self) {
        if self.config.handles.is_empty() {
            self.warn(BehaviorWarning::NoResizeHandles);
        }
    }

    fn warn(&self, warning: BehaviorWarning) {
        if let Some(handle) = &self.diagnostics {
            handle.warn(warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Point, Size};

    const VIEWPORT: Size = Size::new(800.0, 600.0);

    fn attached(config: ResizeConfig) -> State {
        State::attach(GeometryBox::new(100.0, 80.0, 200.0, 150.0), config)
    }

    fn press(handle: Handle, cursor: Point) -> Message {
        Message::HandlePressed {
            handle,
            cursor,
            // Demo frame: container at the viewport origin.
            element: GeometryBox::new(100.0, 80.0, 200.0, 150.0),
        }
    }

    fn moved(cursor: Point) -> Message {
        Message::CaptureMoved {
            cursor,
            viewport: VIEWPORT,
        }
    }

    #[test]
    fn width_mode_never_mutates_height() {
        let mut state = attached(ResizeConfig::default());
        state.update(press(Handle::Right, Point::new(300.0, 150.0)));
        assert_eq!(state.active_handle(), Some(Handle::Right));

        state.update(moved(Point::new(340.0, 400.0)));
        assert_eq!(state.element().width, 240.0);
        assert_eq!(state.element().height, 150.0);
    }

    #[test]
    fn height_mode_never_mutates_width() {
        let mut state = attached(ResizeConfig::default());
        state.update(press(Handle::Bottom, Point::new(200.0, 230.0)));

        state.update(moved(Point::new(600.0, 260.0)));
        assert_eq!(state.element().height, 180.0);
        assert_eq!(state.element().width, 200.0);
    }

    #[test]
    fn diagonal_mode_moves_each_axis_independently() {
        let mut state = attached(ResizeConfig::default());
        state.update(press(Handle::Diagonal, Point::new(300.0, 230.0)));

        state.update(moved(Point::new(330.0, 210.0)));
        assert_eq!(state.element().width, 230.0);
        assert_eq!(state.element().height, 130.0);
    }

    #[test]
    fn growth_is_clamped_to_the_boundary() {
        let mut state = attached(ResizeConfig {
            boundary_padding: Insets::uniform(10.0),
            ..ResizeConfig::default()
        });
        state.update(press(Handle::Diagonal, Point::new(300.0, 230.0)));

        state.update(moved(Point::new(2000.0, 2000.0)));
        // right edge = 800 - 10, bottom edge = 600 - 10, element at (100, 80)
        assert_eq!(state.element().width, 690.0);
        assert_eq!(state.element().height, 510.0);
    }

    #[test]
    fn maximum_dimensions_cap_growth() {
        let mut state = attached(ResizeConfig {
            limits: SizeLimits {
                max_width: Some(250.0),
                max_height: Some(160.0),
            },
            ..ResizeConfig::default()
        });
        state.update(press(Handle::Diagonal, Point::new(300.0, 230.0)));

        state.update(moved(Point::new(500.0, 500.0)));
        assert_eq!(state.element().width, 250.0);
        assert_eq!(state.element().height, 160.0);
    }

    #[test]
    fn teardown_restores_the_idle_handle_state() {
        let mut state = attached(ResizeConfig::default());
        state.update(press(Handle::Right, Point::new(300.0, 150.0)));
        assert!(state.is_resizing());

        let event = state.update(Message::CaptureLeft);
        assert!(matches!(event, Event::GestureEnded));
        assert!(state.active_handle().is_none());

        // Late release after teardown is a no-op.
        assert!(matches!(
            state.update(Message::CaptureReleased),
            Event::None
        ));
    }

    #[test]
    fn disabled_handles_are_ignored() {
        let mut state = attached(ResizeConfig {
            handles: HandleSet {
                right: true,
                bottom: false,
                diagonal: false,
            },
            ..ResizeConfig::default()
        });

        state.update(press(Handle::Bottom, Point::new(200.0, 230.0)));
        assert!(!state.is_resizing());
    }

    #[test]
    fn empty_handle_set_warns_at_attach_time() {
        let (handle, mut collector) = crate::diagnostics::channel(8);
        let _state = State::attach(
            GeometryBox::new(0.0, 0.0, 10.0, 10.0),
            ResizeConfig {
                handles: HandleSet::none(),
                ..ResizeConfig::default()
            },
        )
        .with_diagnostics(handle);

        collector.drain();
        assert_eq!(collector.len(), 1);
    }
}
