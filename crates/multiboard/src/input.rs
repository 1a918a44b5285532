//! Per-frame input routing from pointer and keyboard to boards.

use serde::{Deserialize, Serialize};

use crate::GameBoard;
use crate::action::{Placement, TurnRejected};
use crate::geometry::Point;

/// Mouse buttons the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left button: play a cell.
    Primary,
    /// Right button: reset the board under the pointer while held.
    Secondary,
}

/// A key press taken from the input queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A printable character, lowercased.
    Char(char),
    /// Space bar.
    Space,
    /// Enter / return.
    Enter,
    /// Escape.
    Escape,
    /// Anything else.
    Other,
}

/// Input side of the windowing collaborator, queried once per frame.
pub trait InputSource {
    /// Pointer position in surface coordinates.
    fn pointer_position(&self) -> Point;

    /// True while `button` is held (level-triggered).
    fn is_button_down(&self, button: MouseButton) -> bool;

    /// True if `button` went down during this frame (edge-triggered).
    fn is_button_pressed(&self, button: MouseButton) -> bool;

    /// Pops the next queued key press.
    fn next_key_press(&mut self) -> Option<Key>;
}

/// What the router did with a frame's input.
#[derive(Debug, Clone, PartialEq)]
pub enum Routed {
    /// A reset key reset every board.
    AllReset(Key),
    /// The secondary button reset one board.
    BoardReset {
        /// Board index.
        board: usize,
    },
    /// A click placed a mark.
    Placed {
        /// Board index.
        board: usize,
        /// The accepted turn.
        placement: Placement,
    },
    /// A click landed on a cell that could not be played.
    Rejected {
        /// Board index.
        board: usize,
        /// Clicked cell.
        cell: usize,
        /// Why the turn was refused.
        reason: TurnRejected,
    },
}

/// Keys that start a new game on every board: `n`, `r` and space.
pub const DEFAULT_RESET_KEYS: [Key; 3] = [Key::Char('n'), Key::Char('r'), Key::Space];

/// Maps pointer and key input onto board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRouter {
    reset_keys: Vec<Key>,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::with_reset_keys(DEFAULT_RESET_KEYS)
    }
}

impl InputRouter {
    /// Creates a router that resets all boards on any of `keys`.
    pub fn with_reset_keys(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            reset_keys: keys.into_iter().collect(),
        }
    }

    /// Processes one frame of input.
    ///
    /// The key queue is drained first. Then, per board, a held secondary
    /// button over any cell resets the board, and a primary press over a
    /// cell plays it. Only the first matching region of a board is used.
    pub fn route<I: InputSource>(&self, input: &mut I, boards: &mut [GameBoard]) -> Vec<Routed> {
        let mut routed = Vec::new();

        while let Some(key) = input.next_key_press() {
            if self.reset_keys.contains(&key) {
                boards.iter_mut().for_each(GameBoard::reset);
                routed.push(Routed::AllReset(key));
            }
        }

        let pointer = input.pointer_position();
        let secondary_down = input.is_button_down(MouseButton::Secondary);
        let primary_pressed = input.is_button_pressed(MouseButton::Primary);

        if !secondary_down && !primary_pressed {
            return routed;
        }

        for (idx, board) in boards.iter_mut().enumerate() {
            let Some(cell) = board.hit_test(pointer.x, pointer.y) else {
                continue;
            };

            if secondary_down {
                board.reset();
                routed.push(Routed::BoardReset { board: idx });
            }

            if primary_pressed {
                routed.push(match board.handle_click(cell) {
                    Ok(placement) => Routed::Placed {
                        board: idx,
                        placement,
                    },
                    Err(reason) => Routed::Rejected {
                        board: idx,
                        cell,
                        reason,
                    },
                });
            }
        }

        routed
    }
}
