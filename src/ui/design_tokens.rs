// SPDX-License-Identifier: MPL-2.0
//! Design system constants shared across the behaviors and the demo.

/// Color palette.
pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    /// Primary accent used for the tooltip controls and active handles.
    pub const PRIMARY_500: Color = Color::from_rgb(0.34, 0.4, 0.75);
    pub const PRIMARY_700: Color = Color::from_rgb(0.15, 0.4, 0.7);

    /// Highlight ring drawn around the active tour target.
    pub const HIGHLIGHT_400: Color = Color::from_rgb(0.3, 0.7, 0.99);
}

/// Spacing scale.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
}

/// Fixed behavior geometry. The tunable constants (rod thickness, mask
/// opacity, tooltip gap) live in [`crate::config::defaults`].
pub mod sizing {
    /// Width of the highlight ring around the active tour target.
    pub const HIGHLIGHT_RING_WIDTH: f32 = 2.0;
}
