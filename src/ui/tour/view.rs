// SPDX-License-Identifier: MPL-2.0
//! View helpers that assemble the tour overlay's widget layers.

use super::overlay::MaskRenderer;
use super::{Message, StepLayout};
use crate::ui::design_tokens::spacing;
use iced::widget::{button, column, container, row, text, Canvas, Space};
use iced::{Element, Length, Padding};

/// Dimming mask with the highlight hole, stacked over the whole viewport.
pub fn mask<'a>(layout: &StepLayout, mask_opacity: f32) -> Element<'a, Message> {
    Canvas::new(MaskRenderer {
        layout: layout.clone(),
        mask_opacity,
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// Tooltip card anchored next to the highlighted target, stacked over the
/// mask so its controls stay interactive.
pub fn tooltip_card<'a>(layout: &StepLayout) -> Element<'a, Message> {
    let card = container(
        column![
            text(layout.label.clone()).size(14),
            row![
                button(text("Skip all").size(13)).on_press(Message::SkipAll),
                Space::new().width(Length::Fill),
                button(text("Next").size(13)).on_press(Message::Advance),
            ],
        ]
        .spacing(spacing::XS),
    )
    .padding(spacing::XS)
    .width(Length::Fixed(layout.tooltip_size.width))
    .style(crate::ui::theme::tooltip_card_style);

    // Position by padding the full-viewport layer; the card never starts
    // off-screen on the negative side.
    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: layout.tooltip_origin.y.max(0.0),
            left: layout.tooltip_origin.x.max(0.0),
            right: 0.0,
            bottom: 0.0,
        })
        .into()
}
