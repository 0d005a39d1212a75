// SPDX-License-Identifier: MPL-2.0
//! Canvas program for the tour's dimming mask and highlight ring.

use super::{Message, StepLayout};
use crate::ui::design_tokens;
use crate::ui::theme;
use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced::widget::Action;
use iced::{Point, Rectangle, Size};

/// Draws the four mask panels around the highlighted target and a thin
/// ring along the hole's edge. The panels also swallow pointer events so
/// the page underneath is inert while the tour runs.
pub struct MaskRenderer {
    pub layout: StepLayout,
    pub mask_opacity: f32,
}

impl canvas::Program<Message> for MaskRenderer {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        _bounds: Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> Option<Action<Message>> {
        // Swallow presses on the dimmed panels; the hole stays inert too,
        // matching a modal overlay. The tooltip card sits above this layer
        // and keeps its own controls interactive.
        if let iced::Event::Mouse(iced::mouse::Event::ButtonPressed(_)) = event {
            if cursor.position().is_some() {
                return Some(Action::publish(Message::MaskPressed).and_capture());
            }
        }
        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let mask = theme::tour_mask_color(self.mask_opacity);
        for panel in &self.layout.panels {
            if !panel.has_area() {
                continue;
            }
            frame.fill_rectangle(
                Point::new(panel.left, panel.top),
                Size::new(panel.width, panel.height),
                mask,
            );
        }

        let target = self.layout.target;
        let ring = Path::rectangle(
            Point::new(target.left, target.top),
            Size::new(target.width, target.height),
        );
        frame.stroke(
            &ring,
            Stroke::default()
                .with_color(theme::tour_highlight_color())
                .with_width(design_tokens::sizing::HIGHLIGHT_RING_WIDTH),
        );

        vec![frame.into_geometry()]
    }
}
