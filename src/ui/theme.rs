// SPDX-License-Identifier: MPL-2.0
//! Shared color helpers and overlay styles for the behaviors.

use crate::ui::design_tokens::palette::{self, BLACK, WHITE};
use iced::widget::container;
use iced::{Color, Theme};

/// Color of the four tour mask panels at the given opacity.
pub fn tour_mask_color(opacity: f32) -> Color {
    Color { a: opacity, ..BLACK }
}

/// Color of the highlight ring around the active tour target.
pub fn tour_highlight_color() -> Color {
    palette::HIGHLIGHT_400
}

/// Fill color of a resize rod in its idle state.
pub fn handle_idle_color() -> Color {
    Color {
        a: 0.35,
        ..palette::GRAY_400
    }
}

/// Fill color of a resize rod while its gesture is in progress.
pub fn handle_active_color() -> Color {
    palette::PRIMARY_500
}

/// Style for the tooltip card container.
pub fn tooltip_card_style(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(palette::GRAY_900),
        background: Some(iced::Background::Color(WHITE)),
        border: iced::Border {
            color: palette::GRAY_100,
            width: 1.0,
            radius: 5.0.into(),
        },
        ..Default::default()
    }
}

/// Style for the draggable demo card.
pub fn demo_card_style(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(WHITE),
        background: Some(iced::Background::Color(palette::PRIMARY_700)),
        border: iced::Border {
            color: palette::GRAY_900,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

/// Style for the demo drop zone the card moves inside.
pub fn drop_zone_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::GRAY_100)),
        border: iced::Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}
