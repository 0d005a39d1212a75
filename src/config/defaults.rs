// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the appearance configuration.
//!
//! Single source of truth for the tunable visual constants of the
//! behaviors. The fixed layout constants (tooltip width bounds, handle
//! hit sizes) live with the code that owns them.

/// Opacity of the four tour mask panels.
pub const DEFAULT_MASK_OPACITY: f32 = 0.2;

/// Lowest useful mask opacity; below this the hole is invisible anyway.
pub const MIN_MASK_OPACITY: f32 = 0.0;

/// Highest allowed mask opacity.
pub const MAX_MASK_OPACITY: f32 = 0.9;

/// Thickness of the right/bottom resize rods, in pixels.
pub const DEFAULT_ROD_THICKNESS: f32 = 4.0;

/// Side length of the square corner grip, in pixels.
pub const DEFAULT_GRIP_SIZE: f32 = 12.0;

/// Gap between a highlighted element and its tooltip card, in pixels.
pub const DEFAULT_TOOLTIP_GAP: f32 = 10.0;
