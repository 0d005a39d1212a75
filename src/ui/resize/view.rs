// SPDX-License-Identifier: MPL-2.0
//! View helpers that assemble the resize behavior's widget layers.

use super::overlay::{CaptureLayer, HandleRods};
use super::{Message, State};
use iced::widget::Canvas;
use iced::{Element, Length};

/// Handle rods to stack over the resizable element.
pub fn handle_rods<'a>(state: &State) -> Element<'a, Message> {
    Canvas::new(HandleRods {
        handles: state.config().handles,
        active: state.active_handle(),
        show_overlay_handles: state.config().show_overlay_handles,
        rod_thickness: state.rod_thickness(),
        grip_size: state.grip_size(),
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// Transparent capture layer to stack over the viewport while a gesture
/// is active. Push it last so it owns the pointer.
pub fn capture_layer<'a>(state: &State) -> Element<'a, Message> {
    Canvas::new(CaptureLayer {
        active: state.active_handle(),
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
