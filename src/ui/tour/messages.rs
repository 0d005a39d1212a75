// SPDX-License-Identifier: MPL-2.0
//! Tour message/event types re-exported by the facade.

/// Messages emitted by the overlay layers and the tooltip card's
/// controls.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// The advance control was pressed.
    Advance,
    /// The skip-all control was pressed.
    SkipAll,
    /// A press landed on the mask; swallowed so the page underneath
    /// stays inert while the tour runs.
    MaskPressed,
}

/// Events propagated to the parent application, which owns the step
/// state.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    None,
    /// Move to the next step.
    Advance,
    /// Abandon the whole tour.
    SkipAll,
}
