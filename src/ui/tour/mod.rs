// SPDX-License-Identifier: MPL-2.0
//! Guided step-tour overlay.
//!
//! Dims everything except one highlighted element and anchors a tooltip
//! card next to it. Each step owns its overlay layout in an explicit
//! registry keyed by step index, so applying a step is idempotent and
//! deactivating one removes exactly the nodes it created.

mod messages;
mod overlay;
pub mod view;

pub use messages::{Event, Message};

use crate::diagnostics::{BehaviorWarning, DiagnosticsHandle};
use crate::geometry::placement::{estimate_tooltip_size, mask_panels, place_tooltip, Side};
use crate::geometry::GeometryBox;
use iced::{Point, Size};
use std::collections::BTreeMap;

/// Per-step configuration, reapplied whenever the step's inputs change.
#[derive(Debug, Clone, PartialEq)]
pub struct StepConfig {
    /// Whether the tour as a whole is running.
    pub is_active: bool,
    /// Index this step occupies in the tour.
    pub step_index: u32,
    /// Index the tour is currently showing.
    pub active_step_index: u32,
    /// Text shown on the tooltip card.
    pub label: String,
    /// Side of the target the card sits on.
    pub side: Side,
}

impl StepConfig {
    /// A step shows its overlay only while the tour is on it.
    pub fn is_current(&self) -> bool {
        self.is_active && self.step_index == self.active_step_index
    }
}

/// Overlay layout computed for one shown step: the four mask panels, the
/// highlighted target, and the placed tooltip card.
#[derive(Debug, Clone, PartialEq)]
pub struct StepLayout {
    pub target: GeometryBox,
    pub panels: [GeometryBox; 4],
    pub tooltip_origin: Point,
    pub tooltip_size: Size,
    pub label: String,
    pub side: Side,
}

/// Tour overlay state. One instance serves every step; the registry holds
/// the layout of each step currently shown (at most one in practice).
#[derive(Debug, Clone, Default)]
pub struct State {
    registry: BTreeMap<u32, StepLayout>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(handle);
        self
    }

    /// Applies a step's configuration against the target's measured box.
    ///
    /// When the step is current and the target has been laid out, the
    /// overlay layout is (re)computed and registered under the step's
    /// index; reapplying identical inputs converges to the same layout.
    /// Otherwise any layout registered for the step is removed. A current
    /// step whose target is missing or has no area is skipped with a
    /// diagnostic instead of dimming the whole viewport.
    pub fn apply(
        &mut self,
        target: Option<GeometryBox>,
        viewport: Size,
        config: &StepConfig,
        gap: f32,
    ) {
        if !config.is_current() {
            self.registry.remove(&config.step_index);
            return;
        }

        let Some(target) = target.filter(|target| target.has_area()) else {
            self.warn(BehaviorWarning::TourTargetNotLaidOut {
                step_index: config.step_index,
            });
            self.registry.remove(&config.step_index);
            return;
        };

        let tooltip_size = estimate_tooltip_size(&config.label);
        let layout = StepLayout {
            target,
            panels: mask_panels(target, viewport),
            tooltip_origin: place_tooltip(target, tooltip_size, config.side, gap),
            tooltip_size,
            label: config.label.clone(),
            side: config.side,
        };
        self.registry.insert(config.step_index, layout);
    }

    /// Layout of the step currently shown, if any.
    pub fn shown(&self) -> Option<&StepLayout> {
        self.registry.values().next()
    }

    /// Number of overlay nodes currently owned: four mask panels plus the
    /// tooltip card per shown step.
    pub fn node_count(&self) -> usize {
        self.registry.len() * 5
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Advance => Event::Advance,
            Message::SkipAll => Event::SkipAll,
            Message::MaskPressed => Event::None,
        }
    }

    fn warn(&self, warning: BehaviorWarning) {
        if let Some(handle) = &self.diagnostics {
            handle.warn(warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(800.0, 600.0);

    fn step(index: u32, active: u32) -> StepConfig {
        StepConfig {
            is_active: true,
            step_index: index,
            active_step_index: active,
            label: "Drag the card".to_owned(),
            side: Side::Bottom,
        }
    }

    #[test]
    fn current_step_registers_four_panels_and_a_card() {
        let mut state = State::new();
        state.apply(
            Some(GeometryBox::new(50.0, 100.0, 200.0, 40.0)),
            VIEWPORT,
            &step(0, 0),
            10.0,
        );

        assert_eq!(state.node_count(), 5);
        let layout = state.shown().unwrap();
        assert_eq!(layout.panels[0], GeometryBox::new(0.0, 0.0, 50.0, 600.0));
        assert_eq!(layout.tooltip_origin, Point::new(75.0, 150.0));
    }

    #[test]
    fn reapplying_the_same_step_is_idempotent() {
        let mut state = State::new();
        let config = step(0, 0);
        let target = Some(GeometryBox::new(50.0, 100.0, 200.0, 40.0));

        state.apply(target, VIEWPORT, &config, 10.0);
        let first = state.shown().cloned();
        state.apply(target, VIEWPORT, &config, 10.0);

        assert_eq!(state.node_count(), 5);
        assert_eq!(state.shown().cloned(), first);
    }

    #[test]
    fn advancing_removes_exactly_the_old_layout() {
        let mut state = State::new();
        let target = Some(GeometryBox::new(50.0, 100.0, 200.0, 40.0));
        state.apply(target, VIEWPORT, &step(0, 0), 10.0);

        // The tour moved on to step 1; step 0 reapplies and cleans up.
        state.apply(target, VIEWPORT, &step(0, 1), 10.0);
        assert_eq!(state.node_count(), 0);

        state.apply(
            Some(GeometryBox::new(300.0, 200.0, 80.0, 80.0)),
            VIEWPORT,
            &step(1, 1),
            10.0,
        );
        assert_eq!(state.node_count(), 5);
        assert_eq!(
            state.shown().unwrap().target,
            GeometryBox::new(300.0, 200.0, 80.0, 80.0)
        );
    }

    #[test]
    fn deactivating_the_tour_clears_the_overlay() {
        let mut state = State::new();
        let target = Some(GeometryBox::new(50.0, 100.0, 200.0, 40.0));
        state.apply(target, VIEWPORT, &step(0, 0), 10.0);

        let mut config = step(0, 0);
        config.is_active = false;
        state.apply(target, VIEWPORT, &config, 10.0);

        assert_eq!(state.node_count(), 0);
        assert!(state.shown().is_none());
    }

    #[test]
    fn unlaid_out_target_is_skipped_with_a_warning() {
        let (handle, mut collector) = crate::diagnostics::channel(8);
        let mut state = State::new().with_diagnostics(handle);

        state.apply(None, VIEWPORT, &step(2, 2), 10.0);
        assert_eq!(state.node_count(), 0);

        // Zero-area targets count as not laid out.
        state.apply(
            Some(GeometryBox::new(10.0, 10.0, 0.0, 40.0)),
            VIEWPORT,
            &step(2, 2),
            10.0,
        );
        assert_eq!(state.node_count(), 0);

        collector.drain();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn tooltip_events_pass_through_to_the_parent() {
        let mut state = State::new();
        assert!(matches!(state.update(Message::Advance), Event::Advance));
        assert!(matches!(state.update(Message::SkipAll), Event::SkipAll));
        assert!(matches!(state.update(Message::MaskPressed), Event::None));
    }
}
