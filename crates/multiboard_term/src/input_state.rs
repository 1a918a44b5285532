//! Frame-by-frame input state built from crossterm events.
//!
//! Terminal mouse reports arrive as discrete down/up/drag events, so the
//! level-triggered "is held" view and the edge-triggered "went down this
//! frame" view are both reconstructed here.

use std::collections::VecDeque;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton as TermButton, MouseEvent,
    MouseEventKind,
};
use multiboard::{InputSource, Key, MouseButton, Point};

/// Braille dots per terminal column.
pub const DOTS_PER_COLUMN: u16 = 2;

/// Braille dots per terminal row.
pub const DOTS_PER_ROW: u16 = 4;

/// Surface position of the centre of terminal cell `(column, row)`.
pub fn cell_center(column: u16, row: u16) -> Point {
    Point::new(
        (column as f32 + 0.5) * DOTS_PER_COLUMN as f32,
        (row as f32 + 0.5) * DOTS_PER_ROW as f32,
    )
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Buttons {
    primary: bool,
    secondary: bool,
}

impl Buttons {
    fn get(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Primary => self.primary,
            MouseButton::Secondary => self.secondary,
        }
    }

    fn set(&mut self, button: MouseButton, value: bool) {
        match button {
            MouseButton::Primary => self.primary = value,
            MouseButton::Secondary => self.secondary = value,
        }
    }
}

/// Pointer, button, key, wheel and close state for the current frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pointer: Point,
    held: Buttons,
    pressed: Buttons,
    keys: VecDeque<Key>,
    wheel: f32,
    close_requested: bool,
}

impl InputState {
    /// Creates an empty input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one terminal event into the state.
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.close_requested = true;
            return;
        }

        let mapped = match key.code {
            KeyCode::Esc => {
                self.close_requested = true;
                Key::Escape
            }
            KeyCode::Char(' ') => Key::Space,
            KeyCode::Char(c) => Key::Char(c.to_ascii_lowercase()),
            KeyCode::Enter => Key::Enter,
            _ => Key::Other,
        };
        self.keys.push_back(mapped);
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        self.pointer = cell_center(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(button) => {
                if let Some(button) = map_button(button) {
                    self.held.set(button, true);
                    self.pressed.set(button, true);
                }
            }
            MouseEventKind::Up(button) => {
                if let Some(button) = map_button(button) {
                    self.held.set(button, false);
                }
            }
            MouseEventKind::Drag(button) => {
                if let Some(button) = map_button(button) {
                    self.held.set(button, true);
                }
            }
            MouseEventKind::ScrollUp => self.wheel += 1.0,
            MouseEventKind::ScrollDown => self.wheel -= 1.0,
            _ => {}
        }
    }

    /// Clears everything that only lives for one frame: press edges,
    /// unread keys and wheel movement.
    pub fn end_frame(&mut self) {
        self.pressed = Buttons::default();
        self.keys.clear();
        self.wheel = 0.0;
    }

    /// Wheel steps this frame, positive away from the user.
    pub fn wheel(&self) -> f32 {
        self.wheel
    }

    /// True once Esc or Ctrl+C was pressed.
    pub fn close_requested(&self) -> bool {
        self.close_requested
    }
}

fn map_button(button: TermButton) -> Option<MouseButton> {
    match button {
        TermButton::Left => Some(MouseButton::Primary),
        TermButton::Right => Some(MouseButton::Secondary),
        _ => None,
    }
}

impl InputSource for InputState {
    fn pointer_position(&self) -> Point {
        self.pointer
    }

    fn is_button_down(&self, button: MouseButton) -> bool {
        self.held.get(button)
    }

    fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed.get(button)
    }

    fn next_key_press(&mut self) -> Option<Key> {
        self.keys.pop_front()
    }
}
