// SPDX-License-Identifier: MPL-2.0
//! Demo application wiring the three behaviors together.
//!
//! A card lives inside a drop zone under a small toolbar: it can be
//! dragged by its body, resized by its right/bottom rods and corner grip,
//! and a three-step tour walks through all of it. The app owns every
//! behavior's `State`, routes their messages, and keeps the card's box in
//! sync between the drag and resize attachments.

use crate::config::{self, Config};
use crate::diagnostics::{self, WarningCollector, DEFAULT_CAPACITY};
use crate::geometry::placement::Side;
use crate::geometry::{GeometryBox, Insets};
use crate::ui::design_tokens::spacing;
use crate::ui::theme;
use crate::ui::{drag, resize, tour};
use iced::widget::{button, column, container, row, text, Space, Stack};
use iced::{window, Element, Length, Size, Task, Theme};
use std::path::PathBuf;

pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;
const TOOLBAR_HEIGHT: f32 = 48.0;
const STATUS_HEIGHT: f32 = 28.0;
const ZONE_PADDING: f32 = 8.0;
const STEP_COUNT: u32 = 3;

fn initial_card() -> GeometryBox {
    GeometryBox::new(24.0, 24.0, 220.0, 140.0)
}

/// Where the toolbar's tour button renders; the toolbar layout is fixed,
/// so the box is known without measuring.
fn tour_button_box() -> GeometryBox {
    GeometryBox::new(WINDOW_WIDTH - 128.0, 8.0, 112.0, 32.0)
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional path to a `behaviors.toml` loaded instead of the default
    /// location.
    pub config_path: Option<PathBuf>,
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// behavior messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Drag(drag::Message),
    Resize(resize::Message),
    Tour(tour::Message),
    StartTour,
}

/// Root application state bridging the behaviors and persisted
/// preferences.
pub struct App {
    config: Config,
    drag: drag::State,
    resize: resize::State,
    tour: tour::State,
    collector: WarningCollector,
    tour_running: bool,
    active_step: u32,
    status: Option<String>,
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match &flags.config_path {
            Some(path) => config::load_from_path(path).unwrap_or_default(),
            None => config::load().unwrap_or_default(),
        };
        let (handle, collector) = diagnostics::channel(DEFAULT_CAPACITY);

        let card = initial_card();
        let drag = drag::State::attach(
            card,
            drag::DragConfig {
                container_padding: Insets::uniform(ZONE_PADDING),
                clamp_to_container: true,
            },
        )
        .with_diagnostics(handle.clone());
        let resize = resize::State::attach(
            card.offset(0.0, TOOLBAR_HEIGHT),
            resize::ResizeConfig {
                boundary_padding: Insets::uniform(ZONE_PADDING),
                rod_thickness: config.rod_thickness(),
                ..resize::ResizeConfig::default()
            },
        )
        .with_diagnostics(handle.clone());
        let tour = tour::State::new().with_diagnostics(handle);

        let mut app = App {
            config,
            drag,
            resize,
            tour,
            collector,
            tour_running: false,
            active_step: 0,
            status: None,
        };
        app.sync_tour();
        (app, Task::none())
    }

    fn title(&self) -> String {
        "Iced Behaviors Demo".to_owned()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    /// The card's box in viewport coordinates; the drop zone sits directly
    /// under the toolbar at the viewport's left edge.
    fn card_in_viewport(&self) -> GeometryBox {
        self.drag.element().offset(0.0, TOOLBAR_HEIGHT)
    }

    fn step_configs(&self) -> [tour::StepConfig; 3] {
        let make = |step_index: u32, label: &str, side: Side| tour::StepConfig {
            is_active: self.tour_running,
            step_index,
            active_step_index: self.active_step,
            label: label.to_owned(),
            side,
        };

        [
            make(0, "Drag the card anywhere inside the drop zone", Side::Bottom),
            make(1, "Pull the rods or this corner to resize the card", Side::Right),
            make(2, "Restart the tour from here any time", Side::Bottom),
        ]
    }

    fn step_target(&self, step_index: u32) -> Option<GeometryBox> {
        let card = self.card_in_viewport();
        match step_index {
            0 => Some(card),
            1 => Some(GeometryBox::new(
                card.right() - 24.0,
                card.bottom() - 24.0,
                48.0,
                48.0,
            )),
            2 => Some(tour_button_box()),
            _ => None,
        }
    }

    /// Reapplies every step against the current layout. Steps that are not
    /// current clean their overlay up; the current one recomputes it.
    fn sync_tour(&mut self) {
        let viewport = Size::new(WINDOW_WIDTH, WINDOW_HEIGHT);
        let gap = self.config.tooltip_gap();
        for step in self.step_configs() {
            let target = self.step_target(step.step_index);
            self.tour.apply(target, viewport, &step, gap);
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Drag(message) => {
                if let drag::Event::Moved { .. } = self.drag.update(message) {
                    self.resize.set_element(self.card_in_viewport());
                }
            }
            Message::Resize(message) => {
                if let resize::Event::Resized { element } = self.resize.update(message) {
                    let mut card = self.drag.element();
                    card.width = element.width;
                    card.height = element.height;
                    self.drag.set_element(card);
                }
            }
            Message::Tour(message) => match self.tour.update(message) {
                tour::Event::Advance => {
                    if self.active_step + 1 >= STEP_COUNT {
                        self.tour_running = false;
                    } else {
                        self.active_step += 1;
                    }
                }
                tour::Event::SkipAll => self.tour_running = false,
                tour::Event::None => {}
            },
            Message::StartTour => {
                self.tour_running = true;
                self.active_step = 0;
            }
        }

        // Show the latest warning only for the update that produced it.
        if self.collector.drain() > 0 {
            self.status = self.collector.events().last().map(|w| w.message());
        } else {
            self.status = None;
        }
        self.sync_tour();
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let toolbar = container(
            row![
                text("Iced Behaviors").size(16),
                Space::new().width(Length::Fill),
                button(text("Start tour").size(14)).on_press(Message::StartTour),
            ]
            .align_y(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fixed(TOOLBAR_HEIGHT))
        .padding(spacing::XS);

        let card = Stack::new()
            .push(
                container(text("Drag me, resize me").size(14))
                    .style(theme::demo_card_style)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .padding(spacing::XS),
            )
            .push(drag::view::grab_region().map(Message::Drag))
            .push(resize::view::handle_rods(&self.resize).map(Message::Resize));

        let mut zone = Stack::new().push(
            container(drag::view::positioned(&self.drag, card.into()))
                .style(theme::drop_zone_style)
                .width(Length::Fill)
                .height(Length::Fill),
        );
        if self.drag.is_dragging() {
            // The capture layer spans the container so motion stays in
            // container coordinates.
            zone = zone.push(drag::view::capture_layer().map(Message::Drag));
        }

        let status = container(
            text(self.status.clone().unwrap_or_default()).size(12),
        )
        .width(Length::Fill)
        .height(Length::Fixed(STATUS_HEIGHT))
        .padding(spacing::XXS);

        let page = column![
            toolbar,
            container(zone).width(Length::Fill).height(Length::Fill),
            status,
        ];

        let mut layers = Stack::new().push(page);
        if self.resize.is_resizing() {
            layers = layers.push(resize::view::capture_layer(&self.resize).map(Message::Resize));
        }
        if let Some(layout) = self.tour.shown() {
            layers = layers.push(tour::view::mask(layout, self.config.mask_opacity()).map(Message::Tour));
            layers = layers.push(tour::view::tooltip_card(layout).map(Message::Tour));
        }

        layers.into()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            resizable: false,
            ..window::Settings::default()
        })
        .run()
}
