//! Layout math: cells within a board, boards within the viewport.
//!
//! Both computations are pure. Board geometry is derived from its bounding
//! rectangle and replaced wholesale whenever that rectangle changes.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

use crate::Position;
use crate::geometry::{HitRegion, Point, Rect, TaggedHitRegion};

/// Fraction of a cell reserved as margin around the drawn mark.
pub const CELL_BORDER_RATIO: f32 = 0.1;

/// Fraction of a board's width used as spacing on each side of it.
pub const BOARD_SPACING_RATIO: f32 = 0.05;

/// Cell geometry derived from a board's bounding rectangle.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct BoardGeometry {
    /// Bounding rectangle of the whole board.
    rect: Rect,
    /// Width and height of one cell.
    cell_size: Point,
    /// Margin kept between a cell's edge and its mark.
    cell_border: Point,
    /// One region per cell, tags 0-8 row-major.
    regions: [TaggedHitRegion; 9],
}

impl BoardGeometry {
    /// Computes the nine cell regions tiling `rect`.
    pub fn compute(rect: Rect) -> Self {
        let cell_size = Point::new(rect.width / 3.0, rect.height / 3.0);
        let cell_border = Point::new(
            cell_size.x * CELL_BORDER_RATIO,
            cell_size.y * CELL_BORDER_RATIO,
        );

        let regions = std::array::from_fn(|tag| {
            let col = (tag % 3) as f32;
            let row = (tag / 3) as f32;
            let cell = Rect::new(
                rect.x + cell_size.x * col,
                rect.y + cell_size.y * row,
                cell_size.x,
                cell_size.y,
            );
            TaggedHitRegion::new(HitRegion::new(cell), tag)
        });

        Self {
            rect,
            cell_size,
            cell_border,
            regions,
        }
    }

    /// The first region containing `(px, py)`.
    ///
    /// Neighbouring cells share an edge; a point on it reports the lower tag.
    pub fn hit_test(&self, px: f32, py: f32) -> Option<usize> {
        self.regions
            .iter()
            .find(|region| region.contains(px, py))
            .map(|region| *region.tag())
    }

    /// Area inside cell `pos` where its mark is drawn.
    pub fn mark_rect(&self, pos: Position) -> Rect {
        self.regions[pos.to_index()]
            .rect()
            .inset(self.cell_border.x, self.cell_border.y)
    }

    /// Mark rectangles for every cell, row-major.
    pub fn mark_rects(&self) -> impl Iterator<Item = (Position, Rect)> + '_ {
        Position::iter().map(|pos| (pos, self.mark_rect(pos)))
    }
}

/// How boards share the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Stretch boards to fill the whole viewport.
    Fill,
    /// Square grid sized by the shorter viewport side, centred on the longer.
    #[default]
    FitSquare,
}

/// Splits a viewport into `columns` x `rows` board rectangles, row-major.
///
/// Board sizes use integer division of the viewport size, then every
/// rectangle is inset by [`BOARD_SPACING_RATIO`] of the board width on all
/// sides.
#[instrument(level = "debug")]
pub fn multi_board_layout(
    columns: u32,
    rows: u32,
    viewport_width: u32,
    viewport_height: u32,
    mode: LayoutMode,
) -> Vec<Rect> {
    if columns == 0 || rows == 0 {
        return Vec::new();
    }

    let (board_width, board_height, offset_x, offset_y) = match mode {
        LayoutMode::Fill => (viewport_width / columns, viewport_height / rows, 0, 0),
        LayoutMode::FitSquare => {
            let side = viewport_width.min(viewport_height);
            (
                side / columns,
                side / rows,
                (viewport_width - side) / 2,
                (viewport_height - side) / 2,
            )
        }
    };

    let board_width = board_width as f32;
    let board_height = board_height as f32;
    let spacing = board_width * BOARD_SPACING_RATIO;
    let origin = Point::new(offset_x as f32 + spacing, offset_y as f32 + spacing);

    (0..rows)
        .flat_map(|row| (0..columns).map(move |col| (row, col)))
        .map(|(row, col)| {
            Rect::new(
                origin.x + board_width * col as f32,
                origin.y + board_height * row as f32,
                board_width - spacing * 2.0,
                board_height - spacing * 2.0,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    fn approx_rect(a: Rect, b: Rect) -> bool {
        approx(a.x, b.x)
            && approx(a.y, b.y)
            && approx(a.width, b.width)
            && approx(a.height, b.height)
    }

    #[test]
    fn test_regions_tile_row_major() {
        let geometry = BoardGeometry::compute(Rect::new(30.0, 60.0, 300.0, 150.0));
        for (tag, region) in geometry.regions().iter().enumerate() {
            assert_eq!(*region.tag(), tag);
            let expected = Rect::new(
                30.0 + 100.0 * (tag % 3) as f32,
                60.0 + 50.0 * (tag / 3) as f32,
                100.0,
                50.0,
            );
            assert!(approx_rect(*region.rect(), expected), "tag {tag}");
        }
    }

    #[test]
    fn test_compute_is_deterministic() {
        let rect = Rect::new(8.3, 8.3, 149.4, 149.4);
        assert_eq!(BoardGeometry::compute(rect), BoardGeometry::compute(rect));
    }

    #[test]
    fn test_mark_rect_inset_by_cell_border() {
        let geometry = BoardGeometry::compute(Rect::new(0.0, 0.0, 300.0, 300.0));
        let mark = geometry.mark_rect(Position::Center);
        assert!(approx_rect(mark, Rect::new(110.0, 110.0, 80.0, 80.0)));
    }

    #[test]
    fn test_shared_edge_reports_lower_tag() {
        let geometry = BoardGeometry::compute(Rect::new(0.0, 0.0, 300.0, 300.0));
        assert_eq!(geometry.hit_test(100.0, 50.0), Some(0));
        assert_eq!(geometry.hit_test(150.0, 150.0), Some(4));
    }

    #[test]
    fn test_fit_square_on_square_viewport() {
        let rects = multi_board_layout(3, 3, 300, 300, LayoutMode::FitSquare);
        assert_eq!(rects.len(), 9);
        assert!(approx_rect(rects[0], Rect::new(5.0, 5.0, 90.0, 90.0)));
        assert!(approx_rect(rects[1], Rect::new(105.0, 5.0, 90.0, 90.0)));
        assert!(approx_rect(rects[8], Rect::new(205.0, 205.0, 90.0, 90.0)));
    }

    #[test]
    fn test_fit_square_centres_on_wide_viewport() {
        let rects = multi_board_layout(3, 3, 400, 300, LayoutMode::FitSquare);
        assert!(approx_rect(rects[0], Rect::new(55.0, 5.0, 90.0, 90.0)));
        assert!(approx_rect(rects[2], Rect::new(255.0, 5.0, 90.0, 90.0)));
    }

    #[test]
    fn test_fit_square_centres_on_tall_viewport() {
        let rects = multi_board_layout(3, 3, 300, 500, LayoutMode::FitSquare);
        assert!(approx_rect(rects[0], Rect::new(5.0, 105.0, 90.0, 90.0)));
    }

    #[test]
    fn test_fit_square_truncates_board_size() {
        let rects = multi_board_layout(3, 3, 500, 500, LayoutMode::FitSquare);
        // 500 / 3 = 166, spacing 8.3
        assert!(approx_rect(rects[0], Rect::new(8.3, 8.3, 149.4, 149.4)));
        assert!(approx(rects[4].x, 8.3 + 166.0));
    }

    #[test]
    fn test_fill_stretches() {
        let rects = multi_board_layout(2, 1, 400, 100, LayoutMode::Fill);
        assert_eq!(rects.len(), 2);
        // spacing = 200 * 0.05 = 10, taken from the width for both axes
        assert!(approx_rect(rects[0], Rect::new(10.0, 10.0, 180.0, 80.0)));
        assert!(approx_rect(rects[1], Rect::new(210.0, 10.0, 180.0, 80.0)));
    }

    #[test]
    fn test_empty_grid() {
        assert!(multi_board_layout(0, 3, 300, 300, LayoutMode::Fill).is_empty());
        assert!(multi_board_layout(3, 0, 300, 300, LayoutMode::FitSquare).is_empty());
    }
}
