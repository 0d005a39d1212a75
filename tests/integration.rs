// SPDX-License-Identifier: MPL-2.0
//! End-to-end message sequences through the behavior facades, plus config
//! persistence.

use iced::{Point, Size};
use iced_behaviors::config::{self, Config};
use iced_behaviors::geometry::clamp::SizeLimits;
use iced_behaviors::geometry::placement::Side;
use iced_behaviors::geometry::{GeometryBox, Insets};
use iced_behaviors::ui::{drag, resize, tour};
use tempfile::tempdir;

const CONTAINER: Size = Size::new(640.0, 480.0);
const VIEWPORT: Size = Size::new(800.0, 600.0);

#[test]
fn drag_gesture_full_sequence() {
    let mut state = drag::State::attach(
        GeometryBox::new(100.0, 100.0, 120.0, 90.0),
        drag::DragConfig {
            container_padding: Insets::uniform(10.0),
            clamp_to_container: true,
        },
    );

    // 1. Press on the grab region, 20 px into the element.
    state.update(drag::Message::GrabPressed {
        cursor: Point::new(20.0, 20.0),
    });
    assert!(state.is_dragging());

    // 2. A run of moves; each one repositions from the press snapshot.
    for step in 1..=5 {
        let cursor = Point::new(120.0 + 10.0 * step as f32, 120.0);
        let event = state.update(drag::Message::CaptureMoved {
            cursor,
            container: CONTAINER,
        });
        assert!(matches!(event, drag::Event::Moved { .. }));
    }
    assert_eq!(state.element().left, 150.0);
    assert_eq!(state.element().top, 100.0);

    // 3. A wild move clamps to the padding box without ending the gesture.
    state.update(drag::Message::CaptureMoved {
        cursor: Point::new(10_000.0, 10_000.0),
        container: CONTAINER,
    });
    assert_eq!(state.element().right(), CONTAINER.width - 10.0);
    assert_eq!(state.element().bottom(), CONTAINER.height - 10.0);
    assert!(state.is_dragging());

    // 4. Release tears down; stray trailing events are no-ops.
    assert!(matches!(
        state.update(drag::Message::CaptureReleased),
        drag::Event::GestureEnded
    ));
    assert!(matches!(
        state.update(drag::Message::CaptureLeft),
        drag::Event::None
    ));
    assert!(!state.is_dragging());
}

#[test]
fn resize_gesture_full_sequence() {
    let mut state = resize::State::attach(
        GeometryBox::new(200.0, 150.0, 160.0, 120.0),
        resize::ResizeConfig {
            limits: SizeLimits {
                max_width: Some(400.0),
                max_height: None,
            },
            ..resize::ResizeConfig::default()
        },
    );

    state.update(resize::Message::HandlePressed {
        handle: resize::Handle::Diagonal,
        cursor: Point::new(360.0, 270.0),
        element: GeometryBox::new(200.0, 150.0, 160.0, 120.0),
    });
    assert_eq!(state.active_handle(), Some(resize::Handle::Diagonal));

    // Grow past the max width: width caps at 400, height keeps tracking.
    let event = state.update(resize::Message::CaptureMoved {
        cursor: Point::new(700.0, 350.0),
        viewport: VIEWPORT,
    });
    match event {
        resize::Event::Resized { element } => {
            assert_eq!(element.width, 400.0);
            assert_eq!(element.height, 200.0);
        }
        other => panic!("expected Resized, got {other:?}"),
    }

    // Shrinking again works within the same gesture.
    state.update(resize::Message::CaptureMoved {
        cursor: Point::new(400.0, 300.0),
        viewport: VIEWPORT,
    });
    assert_eq!(state.element().width, 200.0);
    assert_eq!(state.element().height, 150.0);

    assert!(matches!(
        state.update(resize::Message::CaptureLeft),
        resize::Event::GestureEnded
    ));
    assert!(state.active_handle().is_none());
}

#[test]
fn tour_walks_steps_and_cleans_up_behind_itself() {
    let mut state = tour::State::new();
    let targets = [
        GeometryBox::new(50.0, 100.0, 200.0, 40.0),
        GeometryBox::new(300.0, 200.0, 80.0, 80.0),
    ];

    let config = |index: u32, active: u32| tour::StepConfig {
        is_active: true,
        step_index: index,
        active_step_index: active,
        label: format!("Step {index}"),
        side: Side::Bottom,
    };

    // Step 0 shown.
    state.apply(Some(targets[0]), VIEWPORT, &config(0, 0), 10.0);
    state.apply(Some(targets[1]), VIEWPORT, &config(1, 0), 10.0);
    assert_eq!(state.node_count(), 5);
    assert_eq!(state.shown().unwrap().target, targets[0]);

    // Advance: step 0 cleans up, step 1 takes over.
    state.apply(Some(targets[0]), VIEWPORT, &config(0, 1), 10.0);
    state.apply(Some(targets[1]), VIEWPORT, &config(1, 1), 10.0);
    assert_eq!(state.node_count(), 5);
    assert_eq!(state.shown().unwrap().target, targets[1]);

    // Skip all: nothing remains.
    let mut ended = config(0, 1);
    ended.is_active = false;
    state.apply(Some(targets[0]), VIEWPORT, &ended, 10.0);
    let mut ended = config(1, 1);
    ended.is_active = false;
    state.apply(Some(targets[1]), VIEWPORT, &ended, 10.0);
    assert_eq!(state.node_count(), 0);
}

#[test]
fn config_round_trips_and_feeds_the_behaviors() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("behaviors.toml");

    let config = Config {
        mask_opacity: Some(0.4),
        rod_thickness: Some(6.0),
        tooltip_gap: Some(20.0),
    };
    config::save_to_path(&config, &path).expect("failed to save config");
    let loaded = config::load_from_path(&path).expect("failed to load config");

    assert_eq!(loaded.mask_opacity(), 0.4);
    assert_eq!(loaded.rod_thickness(), 6.0);

    // The loaded gap flows into tooltip placement.
    let mut state = tour::State::new();
    state.apply(
        Some(GeometryBox::new(50.0, 100.0, 200.0, 40.0)),
        VIEWPORT,
        &tour::StepConfig {
            is_active: true,
            step_index: 0,
            active_step_index: 0,
            label: "Configured gap".to_owned(),
            side: Side::Bottom,
        },
        loaded.tooltip_gap(),
    );
    assert_eq!(state.shown().unwrap().tooltip_origin.y, 160.0);

    dir.close().expect("failed to close temporary directory");
}
