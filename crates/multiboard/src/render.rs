//! Board drawing against an immediate-mode painter.
//!
//! The painter is the drawing half of the windowing collaborator. Nothing
//! here keeps state between frames; every frame redraws from
//! [`GameBoard`].

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};
use crate::{Cell, GameBoard, GameStatus, Player};

/// Named colours used by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Window background.
    DarkGray,
    /// Board outline and grid.
    LightGray,
    /// Player X.
    Red,
    /// Player O.
    Blue,
    /// End-of-game banner.
    Orange,
}

/// Colour assignment for each drawn element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Background cleared at the start of every frame.
    pub background: Color,
    /// Board outline and grid lines.
    pub border: Color,
    /// X marks.
    pub player_x: Color,
    /// O marks.
    pub player_o: Color,
    /// Win / game-over banner.
    pub banner: Color,
    /// Instruction hint.
    pub hint: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::DarkGray,
            border: Color::LightGray,
            player_x: Color::Red,
            player_o: Color::Blue,
            banner: Color::Orange,
            hint: Color::LightGray,
        }
    }
}

/// Line thickness of the outline, grid and marks.
pub const STROKE: f32 = 5.0;

/// Segments used to approximate the O ring.
pub const RING_SEGMENTS: u32 = 30;

/// Banner and hint font size as a fraction of the board height.
pub const FONT_RATIO: f32 = 0.1;

/// Drawing half of the windowing collaborator.
pub trait Painter {
    /// Fills the whole surface.
    fn clear(&mut self, color: Color);

    /// Straight line from `from` to `to`.
    fn draw_line(&mut self, from: Point, to: Point, thickness: f32, color: Color);

    /// Ring sector between `inner_radius` and `outer_radius`, angles in degrees.
    #[allow(clippy::too_many_arguments)]
    fn draw_ring_arc(
        &mut self,
        center: Point,
        inner_radius: f32,
        outer_radius: f32,
        start_angle: f32,
        end_angle: f32,
        segments: u32,
        color: Color,
    );

    /// Outline of `rect`.
    fn draw_rectangle_outline(&mut self, rect: Rect, thickness: f32, color: Color);

    /// Width `text` would take at `font_size`.
    fn measure_text_width(&self, text: &str, font_size: f32) -> f32;

    /// Text with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color);
}

/// Text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Align {
    /// Centre horizontally on the anchor.
    pub horizontal_center: bool,
    /// Centre vertically on the anchor.
    pub vertical_center: bool,
}

impl Align {
    /// Centred on both axes.
    pub const CENTER: Align = Align {
        horizontal_center: true,
        vertical_center: true,
    };
}

/// Draws `text` anchored at `anchor`.
pub fn draw_text_aligned<P: Painter + ?Sized>(
    painter: &mut P,
    text: &str,
    anchor: Point,
    align: Align,
    font_size: f32,
    color: Color,
) {
    let x = if align.horizontal_center {
        anchor.x - painter.measure_text_width(text, font_size) / 2.0
    } else {
        anchor.x
    };
    let y = if align.vertical_center {
        anchor.y - font_size / 2.0
    } else {
        anchor.y
    };
    painter.draw_text(text, x, y, font_size, color);
}

/// Draws one board: outline, grid, marks and, once finished, the banner.
pub fn draw_board<P: Painter + ?Sized>(painter: &mut P, board: &GameBoard, palette: &Palette) {
    let rect = board.rect();

    painter.draw_rectangle_outline(rect, STROKE, palette.border);
    draw_grid(painter, rect, palette.border);

    for (pos, mark_rect) in board.geometry().mark_rects() {
        match board.state().board().get(pos) {
            Cell::Empty => {}
            Cell::Occupied(Player::X) => draw_x(painter, mark_rect, palette.player_x),
            Cell::Occupied(Player::O) => draw_o(painter, mark_rect, palette.player_o),
        }
    }

    if let GameStatus::Finished(outcome) = board.state().status() {
        draw_text_aligned(
            painter,
            &outcome.to_string(),
            rect.center(),
            Align::CENTER,
            rect.height * FONT_RATIO,
            palette.banner,
        );
    }
}

/// Draws the "new game" hint just above the board.
pub fn draw_hint<P: Painter + ?Sized>(painter: &mut P, board: &GameBoard, palette: &Palette) {
    let rect = board.rect();
    let font_size = rect.height * FONT_RATIO;
    draw_text_aligned(
        painter,
        "<Space> - New game",
        Point::new(rect.center().x, rect.y - font_size),
        Align {
            horizontal_center: true,
            vertical_center: false,
        },
        font_size,
        palette.hint,
    );
}

fn draw_grid<P: Painter + ?Sized>(painter: &mut P, rect: Rect, color: Color) {
    for i in 1..=2 {
        let x = rect.x + rect.width / 3.0 * i as f32;
        painter.draw_line(Point::new(x, rect.y), Point::new(x, rect.bottom()), STROKE, color);

        let y = rect.y + rect.height / 3.0 * i as f32;
        painter.draw_line(Point::new(rect.x, y), Point::new(rect.right(), y), STROKE, color);
    }
}

fn draw_x<P: Painter + ?Sized>(painter: &mut P, rect: Rect, color: Color) {
    painter.draw_line(
        Point::new(rect.x, rect.y),
        Point::new(rect.right(), rect.bottom()),
        STROKE,
        color,
    );
    painter.draw_line(
        Point::new(rect.right(), rect.y),
        Point::new(rect.x, rect.bottom()),
        STROKE,
        color,
    );
}

fn draw_o<P: Painter + ?Sized>(painter: &mut P, rect: Rect, color: Color) {
    let outer = rect.width.min(rect.height) / 2.0;
    let inner = (outer - STROKE).max(0.0);
    painter.draw_ring_arc(rect.center(), inner, outer, 0.0, 360.0, RING_SEGMENTS, color);
}
