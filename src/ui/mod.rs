// SPDX-License-Identifier: MPL-2.0
//! User interface behaviors and shared styling.
//!
//! Each behavior follows the Elm-style "state down, messages up" pattern:
//! the parent embeds the behavior's `State`, feeds it `Message`s produced
//! by the behavior's view layers, and reacts to the `Event`s it returns.
//!
//! # Behaviors
//!
//! - [`drag`] - Drag-to-move an element inside its container
//! - [`resize`] - Edge/corner resize with right, bottom, and diagonal handles
//! - [`tour`] - Guided step tour with a dimming mask and tooltip cards
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Colors and styling helpers

pub mod design_tokens;
pub mod drag;
pub mod resize;
pub mod theme;
pub mod tour;
