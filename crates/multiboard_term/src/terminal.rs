//! The terminal as a game window.
//!
//! Provides the window lifecycle, frame pacing, input polling and drawing
//! surface the game loop needs, on top of crossterm and ratatui.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info, instrument, warn};

use crate::display_list::DisplayList;
use crate::input_state::{DOTS_PER_COLUMN, DOTS_PER_ROW, InputState};

/// Terminal size in cells, seen as a drawing surface in dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    columns: u16,
    rows: u16,
    resized: bool,
    resizable: bool,
    min_size: (u32, u32),
}

impl Viewport {
    /// A resizable viewport of `columns x rows` cells with no minimum size.
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            resized: false,
            resizable: true,
            min_size: (0, 0),
        }
    }

    /// Takes a terminal resize. Returns false if the viewport is fixed.
    pub fn resize(&mut self, columns: u16, rows: u16) -> bool {
        if !self.resizable {
            warn!(columns, rows, "Ignoring resize of fixed-size window");
            return false;
        }
        debug!(columns, rows, "Terminal resized");
        self.columns = columns;
        self.rows = rows;
        self.resized = true;
        true
    }

    /// True if the size changed since the last [`end_frame`](Self::end_frame).
    pub fn is_resized(&self) -> bool {
        self.resized
    }

    /// Forgets the resize flag.
    pub fn end_frame(&mut self) {
        self.resized = false;
    }

    /// Surface width in dots, never below the minimum width.
    pub fn width(&self) -> u32 {
        (u32::from(self.columns) * u32::from(DOTS_PER_COLUMN)).max(self.min_size.0)
    }

    /// Surface height in dots, never below the minimum height.
    pub fn height(&self) -> u32 {
        (u32::from(self.rows) * u32::from(DOTS_PER_ROW)).max(self.min_size.1)
    }

    /// Whether resizes are taken.
    pub fn set_resizable(&mut self, resizable: bool) {
        self.resizable = resizable;
    }

    /// Smallest surface reported, in dots.
    pub fn set_min_size(&mut self, width: u32, height: u32) {
        self.min_size = (width, height);
    }
}

/// A terminal in raw mode with mouse capture, drawn one frame at a time.
pub struct TerminalWindow {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    input: InputState,
    display: DisplayList,
    viewport: Viewport,
    frame_budget: Duration,
    frame_deadline: Instant,
    open: bool,
}

impl TerminalWindow {
    /// Takes over the terminal: raw mode, alternate screen, mouse capture
    /// and `title`.
    ///
    /// If setup fails part way, the terminal is restored before the error
    /// is returned.
    #[instrument]
    pub fn create(title: &str) -> io::Result<Self> {
        enable_raw_mode()?;
        Self::open(title).inspect_err(|_| {
            if let Err(e) = restore_terminal(&mut io::stdout()) {
                warn!(error = %e, "Failed to restore terminal");
            }
        })
    }

    fn open(title: &str) -> io::Result<Self> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(title))?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        let (columns, rows) = crossterm::terminal::size()?;

        info!(columns, rows, "Window opened");

        Ok(Self {
            terminal,
            input: InputState::new(),
            display: DisplayList::new(),
            viewport: Viewport::new(columns, rows),
            frame_budget: frame_budget(60),
            frame_deadline: Instant::now(),
            open: true,
        })
    }

    /// Gives the terminal back to the shell. Safe to call more than once.
    pub fn close(&mut self) -> io::Result<()> {
        if !self.open {
            return Ok(());
        }
        self.open = false;

        restore_terminal(self.terminal.backend_mut())?;
        self.terminal.show_cursor()?;
        info!("Window closed");
        Ok(())
    }

    /// True once the user asked to quit.
    pub fn is_close_requested(&self) -> bool {
        self.input.close_requested()
    }

    /// True if the terminal size changed since the previous frame.
    pub fn is_resized(&self) -> bool {
        self.viewport.is_resized()
    }

    /// Surface width in dots, never below the minimum width.
    pub fn current_width(&self) -> u32 {
        self.viewport.width()
    }

    /// Surface height in dots, never below the minimum height.
    pub fn current_height(&self) -> u32 {
        self.viewport.height()
    }

    /// Whether terminal resizes are reported to the game.
    pub fn set_resizable(&mut self, resizable: bool) {
        self.viewport.set_resizable(resizable);
    }

    /// Smallest surface the game lays itself out for, in dots.
    pub fn set_min_size(&mut self, width: u32, height: u32) {
        self.viewport.set_min_size(width, height);
    }

    /// Frame pacing target.
    pub fn set_target_frame_rate(&mut self, fps: u32) {
        self.frame_budget = frame_budget(fps);
    }

    /// Waits for the rest of the frame budget while collecting input, then
    /// starts recording a new frame.
    pub fn begin_frame(&mut self) -> io::Result<()> {
        loop {
            let now = Instant::now();
            let timeout = self.frame_deadline.saturating_duration_since(now);
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Resize(columns, rows) => {
                    self.viewport.resize(columns, rows);
                }
                other => self.input.handle_event(&other),
            }
        }

        self.frame_deadline = Instant::now() + self.frame_budget;
        self.display.reset();
        Ok(())
    }

    /// Presents the recorded frame and clears per-frame input.
    pub fn end_frame(&mut self) -> io::Result<()> {
        let display = &self.display;
        self.terminal.draw(|frame| display.render(frame))?;
        self.input.end_frame();
        self.viewport.end_frame();
        Ok(())
    }

    /// Mutable input for routing (drains the key queue).
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// The frame's drawing surface.
    pub fn painter(&mut self) -> &mut DisplayList {
        &mut self.display
    }
}

impl Drop for TerminalWindow {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, DisableMouseCapture)
}

fn frame_budget(fps: u32) -> Duration {
    Duration::from_secs(1) / fps.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_budget() {
        assert_eq!(frame_budget(60), Duration::from_nanos(16_666_666));
        assert_eq!(frame_budget(0), Duration::from_secs(1));
    }

    #[test]
    fn test_restore_leaves_alternate_screen_and_mouse_capture() {
        let mut out = Vec::new();
        restore_terminal(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?1000l"));
    }

    #[test]
    fn test_viewport_size_in_dots() {
        let viewport = Viewport::new(80, 24);
        assert_eq!(viewport.width(), 160);
        assert_eq!(viewport.height(), 96);
        assert!(!viewport.is_resized());
    }

    #[test]
    fn test_viewport_clamps_to_min_size() {
        let mut viewport = Viewport::new(20, 10);
        viewport.set_min_size(60, 60);
        assert_eq!(viewport.width(), 60);
        assert_eq!(viewport.height(), 60);

        viewport.resize(100, 5);
        assert_eq!(viewport.width(), 200);
        assert_eq!(viewport.height(), 60);
    }

    #[test]
    fn test_viewport_resize_flag_lasts_one_frame() {
        let mut viewport = Viewport::new(80, 24);
        assert!(viewport.resize(100, 30));
        assert!(viewport.is_resized());
        assert_eq!(viewport.width(), 200);
        assert_eq!(viewport.height(), 120);

        viewport.end_frame();
        assert!(!viewport.is_resized());
        assert_eq!(viewport.width(), 200);
    }

    #[test]
    fn test_fixed_viewport_ignores_resize() {
        let mut viewport = Viewport::new(80, 24);
        viewport.set_resizable(false);
        assert!(!viewport.resize(100, 30));
        assert!(!viewport.is_resized());
        assert_eq!(viewport.width(), 160);
        assert_eq!(viewport.height(), 96);
    }
}
