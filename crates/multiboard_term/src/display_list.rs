//! Recording painter rendered through the ratatui canvas.
//!
//! Game code draws into a [`DisplayList`] during the frame; at frame end
//! the list is replayed onto a Braille [`Canvas`] covering the terminal.

use multiboard::{Color, Painter, Point, Rect};
use ratatui::{
    Frame,
    style::{Color as TermColor, Style},
    symbols::Marker,
    text::Line as TextLine,
    widgets::canvas::{Canvas, Line as CanvasLine},
};
use unicode_width::UnicodeWidthStr;

use crate::input_state::{DOTS_PER_COLUMN, DOTS_PER_ROW};

/// One recorded primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Straight segment in surface coordinates.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke colour.
        color: Color,
    },
    /// Text whose top-left corner sits at `at`.
    Text {
        /// Anchor.
        at: Point,
        /// The string.
        text: String,
        /// Text colour.
        color: Color,
    },
}

/// Everything drawn during one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    background: Option<Color>,
    shapes: Vec<Shape>,
}

impl DisplayList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded shapes, in drawing order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Background colour of the last clear, if any.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Drops everything recorded so far.
    pub fn reset(&mut self) {
        self.background = None;
        self.shapes.clear();
    }

    fn line(&mut self, from: Point, to: Point, color: Color) {
        self.shapes.push(Shape::Line { from, to, color });
    }

    fn polyline_arc(
        &mut self,
        center: Point,
        radius: f32,
        start: f32,
        end: f32,
        segments: u32,
        color: Color,
    ) {
        let segments = segments.max(1);
        let step = (end - start) / segments as f32;
        let at = |angle: f32| {
            let rad = angle.to_radians();
            Point::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
        };
        for i in 0..segments {
            let a0 = start + step * i as f32;
            self.line(at(a0), at(a0 + step), color);
        }
    }

    /// Replays the list onto the whole frame.
    ///
    /// The surface is `2 x 4` dots per terminal cell with `y` growing
    /// downward; the canvas flips it.
    pub fn render(&self, frame: &mut Frame<'_>) {
        let area = frame.area();
        let width = f64::from(u32::from(area.width) * u32::from(DOTS_PER_COLUMN));
        let height = f64::from(u32::from(area.height) * u32::from(DOTS_PER_ROW));

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .background_color(self.background.map_or(TermColor::Reset, term_color))
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for shape in &self.shapes {
                    match shape {
                        Shape::Line { from, to, color } => ctx.draw(&CanvasLine::new(
                            f64::from(from.x),
                            height - f64::from(from.y),
                            f64::from(to.x),
                            height - f64::from(to.y),
                            term_color(*color),
                        )),
                        Shape::Text { at, text, color } => ctx.print(
                            f64::from(at.x),
                            height - f64::from(at.y),
                            TextLine::styled(text.clone(), Style::default().fg(term_color(*color))),
                        ),
                    }
                }
            });

        frame.render_widget(canvas, area);
    }
}

/// Terminal colour for a game colour.
pub fn term_color(color: Color) -> TermColor {
    match color {
        Color::DarkGray => TermColor::Black,
        Color::LightGray => TermColor::Gray,
        Color::Red => TermColor::Red,
        Color::Blue => TermColor::Blue,
        Color::Orange => TermColor::Rgb(255, 161, 0),
    }
}

impl Painter for DisplayList {
    fn clear(&mut self, color: Color) {
        self.reset();
        self.background = Some(color);
    }

    fn draw_line(&mut self, from: Point, to: Point, _thickness: f32, color: Color) {
        self.line(from, to, color);
    }

    fn draw_ring_arc(
        &mut self,
        center: Point,
        inner_radius: f32,
        outer_radius: f32,
        start_angle: f32,
        end_angle: f32,
        segments: u32,
        color: Color,
    ) {
        self.polyline_arc(center, outer_radius, start_angle, end_angle, segments, color);
        // Below one dot the inner edge collapses into the centre.
        if inner_radius >= 1.0 {
            self.polyline_arc(center, inner_radius, start_angle, end_angle, segments, color);
        }
    }

    fn draw_rectangle_outline(&mut self, rect: Rect, _thickness: f32, color: Color) {
        let top_left = Point::new(rect.x, rect.y);
        let top_right = Point::new(rect.right(), rect.y);
        let bottom_right = Point::new(rect.right(), rect.bottom());
        let bottom_left = Point::new(rect.x, rect.bottom());
        self.line(top_left, top_right, color);
        self.line(top_right, bottom_right, color);
        self.line(bottom_right, bottom_left, color);
        self.line(bottom_left, top_left, color);
    }

    /// Terminal text has one size; the width is the column count in dots.
    fn measure_text_width(&self, text: &str, _font_size: f32) -> f32 {
        (text.width() as f32) * DOTS_PER_COLUMN as f32
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, _font_size: f32, color: Color) {
        self.shapes.push(Shape::Text {
            at: Point::new(x, y),
            text: text.to_string(),
            color,
        });
    }
}
