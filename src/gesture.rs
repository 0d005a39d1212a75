// SPDX-License-Identifier: MPL-2.0
//! Capture-gesture state machine shared by the drag and resize behaviors.
//!
//! A gesture runs `Idle -> Active -> Idle`. The start snapshot is taken
//! once when the gesture begins and stays immutable until teardown; every
//! pointer motion recomputes the element box from that snapshot plus the
//! pointer delta, so intermediate motions never accumulate error.
//!
//! `begin` refuses to start while a gesture is active and `finish` is
//! idempotent, which keeps teardown exclusive even when the host delivers
//! release/leave events in surprising orders.

use crate::geometry::GeometryBox;
use iced::Point;

/// Which dimensions a pointer delta applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureMode {
    /// Move `left`/`top` (drag).
    Move,
    /// Grow/shrink `width` only (right rod).
    Width,
    /// Grow/shrink `height` only (bottom rod).
    Height,
    /// Grow/shrink both, each along its own pointer axis (corner grip).
    Diagonal,
}

/// Snapshot captured at gesture start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureStart {
    /// Pointer position at press time.
    pub origin: Point,
    /// Element box at press time.
    pub start: GeometryBox,
}

/// State machine owning one gesture at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    Active {
        start: GestureStart,
        mode: GestureMode,
    },
}

impl CaptureState {
    pub fn is_active(&self) -> bool {
        matches!(self, CaptureState::Active { .. })
    }

    /// Mode of the gesture in progress, if any.
    pub fn mode(&self) -> Option<GestureMode> {
        match self {
            CaptureState::Active { mode, .. } => Some(*mode),
            CaptureState::Idle => None,
        }
    }

    /// Starts a gesture. Returns `false` without touching the state when a
    /// gesture is already active; a new gesture may not start until the
    /// previous one has torn down.
    pub fn begin(&mut self, mode: GestureMode, origin: Point, start: GeometryBox) -> bool {
        if self.is_active() {
            return false;
        }

        *self = CaptureState::Active {
            start: GestureStart { origin, start },
            mode,
        };
        true
    }

    /// Recomputes the element box for the current pointer position.
    ///
    /// Returns `None` when no gesture is active. Dimensions outside the
    /// gesture's mode are returned untouched.
    pub fn motion(&self, pointer: Point) -> Option<GeometryBox> {
        let CaptureState::Active { start, mode } = self else {
            return None;
        };

        let delta_x = pointer.x - start.origin.x;
        let delta_y = pointer.y - start.origin.y;

        let mut updated = start.start;
        match mode {
            GestureMode::Move => {
                updated.left = start.start.left + delta_x;
                updated.top = start.start.top + delta_y;
            }
            GestureMode::Width => {
                updated.width = start.start.width + delta_x;
            }
            GestureMode::Height => {
                updated.height = start.start.height + delta_y;
            }
            GestureMode::Diagonal => {
                updated.width = start.start.width + delta_x;
                updated.height = start.start.height + delta_y;
            }
        }

        Some(updated)
    }

    /// Tears the gesture down. Returns `true` only for the call that
    /// actually performed the teardown.
    pub fn finish(&mut self) -> bool {
        if self.is_active() {
            *self = CaptureState::Idle;
            true
        } else {
            false
        }
    }
}
