//! Drives the game with terminal events, without a terminal.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton as TermButton, MouseEvent, MouseEventKind,
};
use multiboard::{Cell, Player, Position, Routed};
use multiboard_term::{App, AppConfig, DisplayList, InputState, Shape, cell_center};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Terminal cell whose centre is the middle of `board`'s cell `tag`.
fn cell_of(app: &App, board: usize, tag: usize) -> (u16, u16) {
    let pos = Position::from_index(tag).unwrap();
    let target = app.boards()[board].geometry().mark_rect(pos).center();
    let column = (target.x / 2.0) as u16;
    let row = (target.y / 4.0) as u16;
    let center = cell_center(column, row);
    assert_eq!(app.boards()[board].hit_test(center.x, center.y), Some(tag));
    (column, row)
}

fn click(app: &mut App, board: usize, tag: usize) -> Vec<Routed> {
    let (column, row) = cell_of(app, board, tag);
    let mut input = InputState::new();
    input.handle_event(&mouse(MouseEventKind::Down(TermButton::Left), column, row));
    input.handle_event(&mouse(MouseEventKind::Up(TermButton::Left), column, row));
    app.update(&mut input)
}

fn app() -> App {
    App::new(AppConfig::default(), 300, 300)
}

#[test]
fn test_nine_boards_laid_out() {
    let app = app();
    assert_eq!(app.boards().len(), 9);
    assert!(app.boards().iter().all(|b| !b.state().is_over()));
}

#[test]
fn test_left_click_plays_a_cell() {
    let mut app = app();
    let routed = click(&mut app, 0, 4);
    assert!(matches!(routed.as_slice(), [Routed::Placed { board: 0, .. }]));
    assert_eq!(app.boards()[0].state().cells()[4], Cell::Occupied(Player::X));
    assert!(app.boards()[1..].iter().all(|b| b.state().cells()[4] == Cell::Empty));
}

#[test]
fn test_win_draws_banner() {
    let mut app = app();
    for tag in [0, 3, 1, 4, 2] {
        click(&mut app, 2, tag);
    }
    assert_eq!(app.boards()[2].state().winner(), Some(Player::X));

    let mut painter = DisplayList::new();
    app.draw(&mut painter);
    let banners: Vec<&str> = painter
        .shapes()
        .iter()
        .filter_map(|shape| match shape {
            Shape::Text { text, .. } => Some(text.as_str()),
            Shape::Line { .. } => None,
        })
        .collect();
    assert_eq!(banners, vec!["Player X Wins"]);
}

#[test]
fn test_right_drag_resets_board() {
    let mut app = app();
    click(&mut app, 4, 0);
    let (column, row) = cell_of(&app, 4, 8);

    let mut input = InputState::new();
    input.handle_event(&mouse(MouseEventKind::Drag(TermButton::Right), column, row));
    let routed = app.update(&mut input);

    assert_eq!(routed, vec![Routed::BoardReset { board: 4 }]);
    assert!(app.boards()[4].state().cells().iter().all(|c| *c == Cell::Empty));
}

#[test]
fn test_space_resets_everything() {
    let mut app = app();
    click(&mut app, 0, 0);
    click(&mut app, 8, 8);

    let mut input = InputState::new();
    input.handle_event(&Event::Key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)));
    app.update(&mut input);

    assert!(
        app.boards()
            .iter()
            .all(|b| b.state().cells().iter().all(|c| *c == Cell::Empty))
    );
}

#[test]
fn test_shrink_invalidates_old_click_position() {
    let mut app = app();
    let (column, row) = cell_of(&app, 0, 4);
    app.relayout(150, 150);

    let mut input = InputState::new();
    input.handle_event(&mouse(MouseEventKind::Down(TermButton::Left), column, row));
    assert!(app.update(&mut input).is_empty());
    assert!(
        app.boards()
            .iter()
            .all(|b| b.state().cells().iter().all(|c| *c == Cell::Empty))
    );
}

#[test]
fn test_relayout_keeps_marks() {
    let mut app = app();
    click(&mut app, 0, 4);
    app.relayout(600, 400);
    assert_eq!(app.boards()[0].state().cells()[4], Cell::Occupied(Player::X));
    assert_eq!(app.boards()[0].state().current_player(), Player::O);
}
