// SPDX-License-Identifier: MPL-2.0
//! View helpers that assemble the drag behavior's widget layers.

use super::overlay::{CaptureLayer, GrabRegion};
use super::{Message, State};
use iced::widget::{container, Canvas};
use iced::{Element, Length, Padding};

/// Transparent grab region to stack over the draggable element.
pub fn grab_region<'a>() -> Element<'a, Message> {
    Canvas::new(GrabRegion)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Transparent capture layer to stack over the container while a gesture
/// is active. Push it last so it owns the pointer.
pub fn capture_layer<'a>() -> Element<'a, Message> {
    Canvas::new(CaptureLayer)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Positions `content` inside the container at the element's current
/// offset, sized to the element's box.
pub fn positioned<'a, M: 'a>(state: &State, content: Element<'a, M>) -> Element<'a, M> {
    let element = state.element();

    let sized = container(content)
        .width(Length::Fixed(element.width))
        .height(Length::Fixed(element.height));

    container(sized)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: element.top.max(0.0),
            right: 0.0,
            bottom: 0.0,
            left: element.left.max(0.0),
        })
        .into()
}
