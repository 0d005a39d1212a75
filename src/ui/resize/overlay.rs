// SPDX-License-Identifier: MPL-2.0
//! Canvas programs for the resize behavior: the handle rods drawn over
//! the element and the full-viewport capture layer.

use super::{Handle, HandleSet, Message};
use crate::ui::theme;
use iced::mouse;
use iced::widget::canvas::{self, Frame};
use iced::widget::Action;
use iced::{Point, Rectangle, Size};

/// Handle rods stacked over the resizable element. Draws the enabled
/// rods and turns a press on one of them into the start of a gesture.
pub struct HandleRods {
    pub handles: HandleSet,
    /// Handle whose gesture is currently in progress, drawn highlighted.
    pub active: Option<Handle>,
    /// Whether the right/bottom rods are visually hinted. The corner grip
    /// stays invisible either way; it is only a hit-target.
    pub show_overlay_handles: bool,
    pub rod_thickness: f32,
    pub grip_size: f32,
}

impl HandleRods {
    fn right_rod(&self, bounds: Rectangle) -> Rectangle {
        Rectangle {
            x: bounds.x + bounds.width - self.rod_thickness,
            y: bounds.y,
            width: self.rod_thickness,
            height: bounds.height,
        }
    }

    fn bottom_rod(&self, bounds: Rectangle) -> Rectangle {
        Rectangle {
            x: bounds.x,
            y: bounds.y + bounds.height - self.rod_thickness,
            width: bounds.width,
            height: self.rod_thickness,
        }
    }

    fn corner_grip(&self, bounds: Rectangle) -> Rectangle {
        Rectangle {
            x: bounds.x + bounds.width - self.grip_size,
            y: bounds.y + bounds.height - self.grip_size,
            width: self.grip_size,
            height: self.grip_size,
        }
    }

    /// Handle under the cursor, if any. The corner grip wins over the
    /// rods where they overlap.
    fn hit_test(&self, bounds: Rectangle, position: Point) -> Option<Handle> {
        if self.handles.diagonal && self.corner_grip(bounds).contains(position) {
            return Some(Handle::Diagonal);
        }
        if self.handles.right && self.right_rod(bounds).contains(position) {
            return Some(Handle::Right);
        }
        if self.handles.bottom && self.bottom_rod(bounds).contains(position) {
            return Some(Handle::Bottom);
        }
        None
    }
}

impl canvas::Program<Message> for HandleRods {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> Option<Action<Message>> {
        if let iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            let cursor_position = cursor.position()?;
            if !cursor.is_over(bounds) {
                return None;
            }
            if let Some(handle) = self.hit_test(bounds, cursor_position) {
                return Some(
                    Action::publish(Message::HandlePressed {
                        handle,
                        cursor: cursor_position,
                        element: bounds.into(),
                    })
                    .and_capture(),
                );
            }
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        if !self.show_overlay_handles {
            return Vec::new();
        }

        let mut frame = Frame::new(renderer, bounds.size());
        // Geometry is frame-local; rods sit on the element's own edges.
        let local = Rectangle {
            x: 0.0,
            y: 0.0,
            width: bounds.width,
            height: bounds.height,
        };

        let rod_color = |handle: Handle| {
            if self.active == Some(handle) {
                theme::handle_active_color()
            } else {
                theme::handle_idle_color()
            }
        };

        if self.handles.right {
            let rod = self.right_rod(local);
            frame.fill_rectangle(
                Point::new(rod.x, rod.y),
                Size::new(rod.width, rod.height),
                rod_color(Handle::Right),
            );
        }
        if self.handles.bottom {
            let rod = self.bottom_rod(local);
            frame.fill_rectangle(
                Point::new(rod.x, rod.y),
                Size::new(rod.width, rod.height),
                rod_color(Handle::Bottom),
            );
        }
        // The corner grip is deliberately not drawn.

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> mouse::Interaction {
        let hovered = cursor
            .position()
            .filter(|_| cursor.is_over(bounds))
            .and_then(|position| self.hit_test(bounds, position));

        match self.active.or(hovered) {
            Some(Handle::Right) => mouse::Interaction::ResizingHorizontally,
            Some(Handle::Bottom) => mouse::Interaction::ResizingVertically,
            Some(Handle::Diagonal) => mouse::Interaction::Crosshair,
            None => mouse::Interaction::default(),
        }
    }
}

/// Transparent layer covering the viewport for the duration of one resize
/// gesture.
pub struct CaptureLayer {
    pub active: Option<Handle>,
}

impl canvas::Program<Message> for CaptureLayer {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                Some(Action::publish(Message::CaptureLeft).and_capture())
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                match cursor.position_in(bounds) {
                    Some(cursor_position) => Some(
                        Action::publish(Message::CaptureMoved {
                            cursor: cursor_position,
                            viewport: bounds.size(),
                        })
                        .and_capture(),
                    ),
                    None => Some(Action::publish(Message::CaptureLeft).and_capture()),
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Some(Action::publish(Message::CaptureReleased).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        _renderer: &iced::Renderer,
        _theme: &iced::Theme,
        _bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        Vec::new()
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        _bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> mouse::Interaction {
        match self.active {
            Some(Handle::Right) => mouse::Interaction::ResizingHorizontally,
            Some(Handle::Bottom) => mouse::Interaction::ResizingVertically,
            _ => mouse::Interaction::Crosshair,
        }
    }
}
