//! Multiboard - several independent tic-tac-toe boards on one surface.
//!
//! This crate holds everything that does not touch a terminal or window:
//!
//! - **Engine**: [`BoardState`] applies turns, detects wins and draws, resets
//! - **Geometry**: [`HitRegion`] / [`TaggedHitRegion`] hit testing
//! - **Layout**: [`BoardGeometry`] for cells, [`multi_board_layout`] for boards
//! - **Input**: [`InputRouter`] maps pointer and keys onto boards
//! - **Render**: [`draw_board`] against any [`Painter`]
//!
//! # Example
//!
//! ```
//! use multiboard::{BoardState, Player};
//!
//! let mut state = BoardState::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     state.apply_turn(cell).unwrap();
//! }
//! assert_eq!(state.winner(), Some(Player::X));
//! assert!(state.apply_turn(8).is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod geometry;
pub mod invariants;
mod input;
mod layout;
mod phases;
mod position;
pub mod render;
pub mod rules;
mod state;
mod types;

pub use action::{Placement, TurnRejected};
pub use board::GameBoard;
pub use geometry::{HitRegion, Point, Rect, TaggedHitRegion};
pub use input::{DEFAULT_RESET_KEYS, InputRouter, InputSource, Key, MouseButton, Routed};
pub use layout::{
    BOARD_SPACING_RATIO, BoardGeometry, CELL_BORDER_RATIO, LayoutMode, multi_board_layout,
};
pub use phases::{GameStatus, Outcome};
pub use position::Position;
pub use render::{Color, Painter, Palette, draw_board, draw_hint};
pub use state::BoardState;
pub use types::{Board, Cell, Player};
