// SPDX-License-Identifier: MPL-2.0
//! `iced_behaviors` is a set of attachable interaction behaviors for the
//! Iced GUI framework: drag-to-move, edge/corner resize, and a guided
//! step-tour overlay.
//!
//! Behaviors are plain state machines fed by canvas-layer messages, so
//! the parent application stays in charge of layout and persistence.

#![doc(html_root_url = "https://docs.rs/iced_behaviors/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod ui;

#[cfg(test)]
mod test_utils;
