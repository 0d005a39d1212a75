// SPDX-License-Identifier: MPL-2.0
//! Non-blocking warning collection for the behavior surface.
//!
//! Behaviors never fail during normal operation; the degraded paths
//! ("skip and continue") report what happened through a cheap clonable
//! handle instead. Events travel over a bounded channel so a behavior can
//! warn from inside an update without ever blocking, and are dropped when
//! the channel is full.

use std::collections::VecDeque;

use crossbeam_channel::{bounded, Receiver, Sender};

/// Default capacity for both the channel and the retained ring buffer.
pub const DEFAULT_CAPACITY: usize = 64;

/// Degraded-path events a behavior can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BehaviorWarning {
    /// A tour step targeted an element the host has not laid out yet.
    TourTargetNotLaidOut { step_index: u32 },
    /// A gesture press arrived while another gesture was still active.
    GestureAlreadyActive,
    /// A resize configuration requested no handles at all.
    NoResizeHandles,
}

impl BehaviorWarning {
    pub fn message(&self) -> String {
        match self {
            BehaviorWarning::TourTargetNotLaidOut { step_index } => format!(
                "tour step {} targets an element without layout; skipping overlay",
                step_index
            ),
            BehaviorWarning::GestureAlreadyActive => {
                "gesture press ignored: a capture gesture is already active".to_string()
            }
            BehaviorWarning::NoResizeHandles => {
                "resize behavior attached with an empty handle list".to_string()
            }
        }
    }
}

/// Handle for reporting warnings. Cheap to clone.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    event_tx: Sender<BehaviorWarning>,
}

impl DiagnosticsHandle {
    /// Reports a warning. Non-blocking; the event is dropped when the
    /// channel is full.
    pub fn warn(&self, warning: BehaviorWarning) {
        let _ = self.event_tx.try_send(warning);
    }
}

/// Drains reported warnings into a fixed-capacity ring buffer.
#[derive(Debug)]
pub struct WarningCollector {
    event_rx: Receiver<BehaviorWarning>,
    buffer: VecDeque<BehaviorWarning>,
    capacity: usize,
}

impl WarningCollector {
    /// Pulls every pending event off the channel, evicting the oldest
    /// retained entries when over capacity. Returns how many events were
    /// pulled, so callers can tell a fresh warning from a retained one.
    pub fn drain(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            if self.buffer.len() == self.capacity {
                self.buffer.pop_front();
            }
            self.buffer.push_back(event);
            drained += 1;
        }
        drained
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Retained warnings, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &BehaviorWarning> {
        self.buffer.iter()
    }
}

/// Creates a connected handle/collector pair.
pub fn channel(capacity: usize) -> (DiagnosticsHandle, WarningCollector) {
    let (event_tx, event_rx) = bounded(capacity);
    (
        DiagnosticsHandle { event_tx },
        WarningCollector {
            event_rx,
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        },
    )
}
