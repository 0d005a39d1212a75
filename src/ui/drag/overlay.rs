// SPDX-License-Identifier: MPL-2.0
//! Canvas programs for the drag behavior: the grab region over the
//! element and the transparent capture layer over the container.

use super::Message;
use iced::mouse;
use iced::widget::canvas;
use iced::widget::Action;

/// Transparent hit region stacked over the draggable element. A press
/// here starts the gesture.
pub struct GrabRegion;

impl canvas::Program<Message> for GrabRegion {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> Option<Action<Message>> {
        if let iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            if let Some(cursor_position) = cursor.position_in(bounds) {
                return Some(
                    Action::publish(Message::GrabPressed {
                        cursor: cursor_position,
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
        _renderer: &iced::Renderer,
        _theme: &iced::Theme,
        _bounds: iced::Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        Vec::new()
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Transparent layer covering the whole container for the duration of one
/// gesture. A full-surface layer never loses the pointer mid-gesture the
/// way a small hit-target can.
pub struct CaptureLayer;

impl canvas::Program<Message> for CaptureLayer {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: iced::Rectangle,
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
                            container: bounds.size(),
                        })
                        .and_capture(),
                    ),
                    // Cursor escaped the layer: tear the gesture down.
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
        _bounds: iced::Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        Vec::new()
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        _bounds: iced::Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> mouse::Interaction {
        mouse::Interaction::Grabbing
    }
}
