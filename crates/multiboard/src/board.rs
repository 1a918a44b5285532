//! One playable board: game state plus on-screen geometry.

use crate::BoardState;
use crate::action::{Placement, TurnRejected};
use crate::geometry::{Point, Rect};
use crate::layout::BoardGeometry;

/// A board placed on the drawing surface.
///
/// Geometry only changes through [`resize`](Self::resize),
/// [`reposition_to`](Self::reposition_to) and [`zoom_by`](Self::zoom_by),
/// each of which recomputes every hit region. The game state survives all
/// three.
#[derive(Debug, Clone, PartialEq)]
pub struct GameBoard {
    state: BoardState,
    geometry: BoardGeometry,
}

impl GameBoard {
    /// Creates a fresh game occupying `rect`.
    pub fn new(rect: Rect) -> Self {
        Self {
            state: BoardState::new(),
            geometry: BoardGeometry::compute(rect),
        }
    }

    /// Returns the game state.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Returns the current geometry.
    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    /// Bounding rectangle of the board.
    pub fn rect(&self) -> Rect {
        *self.geometry.rect()
    }

    /// Moves and resizes the board to `rect`.
    pub fn resize(&mut self, rect: Rect) {
        self.geometry = BoardGeometry::compute(rect);
    }

    /// Moves the board's top-left corner to `origin`, keeping its size.
    pub fn reposition_to(&mut self, origin: Point) {
        self.resize(self.rect().moved_to(origin));
    }

    /// Grows (positive `steps`) or shrinks the board by `steps * step_size`
    /// in both dimensions, anchored at the top-left corner.
    pub fn zoom_by(&mut self, steps: f32, step_size: f32) {
        let rect = self.rect();
        let delta = steps * step_size;
        self.resize(Rect::new(
            rect.x,
            rect.y,
            (rect.width + delta).max(0.0),
            (rect.height + delta).max(0.0),
        ));
    }

    /// Cell index under `(px, py)`, if any.
    pub fn hit_test(&self, px: f32, py: f32) -> Option<usize> {
        self.geometry.hit_test(px, py)
    }

    /// Plays the cell identified by a hit region's tag.
    pub fn handle_click(&mut self, tag: usize) -> Result<Placement, TurnRejected> {
        self.state.apply_turn(tag)
    }

    /// Starts a new game on this board.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Player};

    #[test]
    fn test_resize_keeps_state() {
        let mut board = GameBoard::new(Rect::new(0.0, 0.0, 300.0, 300.0));
        board.handle_click(4).unwrap();
        board.resize(Rect::new(10.0, 10.0, 90.0, 90.0));
        assert_eq!(board.state().cells()[4], Cell::Occupied(Player::X));
        assert_eq!(board.hit_test(55.0, 55.0), Some(4));
        assert_eq!(board.hit_test(250.0, 250.0), None);
    }

    #[test]
    fn test_reposition_moves_regions() {
        let mut board = GameBoard::new(Rect::new(0.0, 0.0, 90.0, 90.0));
        board.reposition_to(Point::new(100.0, 200.0));
        assert_eq!(board.rect(), Rect::new(100.0, 200.0, 90.0, 90.0));
        assert_eq!(board.hit_test(10.0, 10.0), None);
        assert_eq!(board.hit_test(101.0, 201.0), Some(0));
    }

    #[test]
    fn test_zoom_grows_and_clamps() {
        let mut board = GameBoard::new(Rect::new(0.0, 0.0, 90.0, 90.0));
        board.zoom_by(1.0, 30.0);
        assert_eq!(board.rect(), Rect::new(0.0, 0.0, 120.0, 120.0));
        assert_eq!(board.hit_test(119.0, 119.0), Some(8));
        board.zoom_by(-10.0, 30.0);
        assert_eq!(board.rect().width, 0.0);
        assert_eq!(board.rect().height, 0.0);
    }
}
