// SPDX-License-Identifier: MPL-2.0
//! Spinning ring shown while a request is outstanding.
//!
//! The loader holds no clock of its own. Its angle comes from the canvas
//! state, which advances it on every spinner frame, so the ring stops as
//! soon as the loading subscription is dropped.

use crate::ui::design_tokens::{opacity, sizing};
use iced::widget::canvas::{self, path, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, TAU};

const STROKE_WIDTH: f32 = 4.0;
/// Share of the circle covered by the moving arc.
const ARC_SWEEP: f32 = 0.75;

pub struct Loader {
    cache: Cache,
    angle: f32,
    color: Color,
}

impl Loader {
    #[must_use]
    pub fn new(color: Color, angle: f32) -> Self {
        Self {
            cache: Cache::default(),
            angle: angle.rem_euclid(TAU),
            color,
        }
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::ICON_XL))
            .height(Length::Fixed(sizing::ICON_XL))
            .into()
    }
}

impl<Message> canvas::Program<Message> for Loader {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame: &mut Frame| {
            let center = frame.center();
            let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

            frame.stroke(
                &Path::circle(center, radius),
                Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                    a: opacity::SPINNER_TRACK,
                    ..self.color
                }),
            );

            // Starts at twelve o'clock.
            let start = self.angle - FRAC_PI_2;
            let arc = Path::new(|builder| {
                builder.arc(path::Arc {
                    center,
                    radius,
                    start_angle: Radians(start),
                    end_angle: Radians(start + TAU * ARC_SWEEP),
                });
            });
            frame.stroke(
                &arc,
                Stroke::default()
                    .with_width(STROKE_WIDTH)
                    .with_color(self.color)
                    .with_line_cap(canvas::LineCap::Round),
            );
        });

        vec![geometry]
    }
}
