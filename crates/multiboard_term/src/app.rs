//! The game: boards, routing and the frame loop.

use multiboard::{
    GameBoard, GameStatus, InputRouter, Painter, Palette, Routed, draw_board, draw_hint,
    multi_board_layout,
};
use tracing::{debug, info, instrument};

use crate::config::AppConfig;
use crate::input_state::InputState;
use crate::terminal::TerminalWindow;

/// All boards plus the settings that drive them.
#[derive(Debug, Clone)]
pub struct App {
    config: AppConfig,
    boards: Vec<GameBoard>,
    router: InputRouter,
    palette: Palette,
}

impl App {
    /// Lays out `config.columns x config.rows` fresh boards on a viewport
    /// of `width x height` dots.
    #[instrument(skip(config))]
    pub fn new(config: AppConfig, width: u32, height: u32) -> Self {
        let boards = multi_board_layout(
            *config.columns(),
            *config.rows(),
            width,
            height,
            *config.layout(),
        )
        .into_iter()
        .map(GameBoard::new)
        .collect();

        Self {
            config,
            boards,
            router: InputRouter::default(),
            palette: Palette::default(),
        }
    }

    /// The boards, row-major.
    pub fn boards(&self) -> &[GameBoard] {
        &self.boards
    }

    /// Recomputes every board's rectangle for a new viewport. Game state is
    /// kept.
    #[instrument(skip(self))]
    pub fn relayout(&mut self, width: u32, height: u32) {
        info!(width, height, "Window resized");
        let rects = multi_board_layout(
            *self.config.columns(),
            *self.config.rows(),
            width,
            height,
            *self.config.layout(),
        );
        for (board, rect) in self.boards.iter_mut().zip(rects) {
            board.resize(rect);
        }
    }

    /// Applies one frame of input to the boards.
    pub fn update(&mut self, input: &mut InputState) -> Vec<Routed> {
        let routed = self.router.route(input, &mut self.boards);
        routed.iter().for_each(log_routed);

        if *self.config.wheel_zoom() && input.wheel() != 0.0 {
            let steps = input.wheel();
            debug!(steps, "Wheel zoom");
            for board in &mut self.boards {
                board.zoom_by(steps, *self.config.zoom_step());
            }
        }

        routed
    }

    /// Draws the whole frame.
    pub fn draw<P: Painter + ?Sized>(&self, painter: &mut P) {
        painter.clear(self.palette.background);
        for board in &self.boards {
            if *self.config.show_hint() {
                draw_hint(painter, board, &self.palette);
            }
            draw_board(painter, board, &self.palette);
        }
    }
}

fn log_routed(routed: &Routed) {
    match routed {
        Routed::AllReset(key) => info!(?key, "New game on every board"),
        Routed::BoardReset { board } => debug!(board, "New game"),
        Routed::Placed { board, placement } => {
            debug!(
                board,
                cell = %placement.position,
                player = %placement.player,
                "Click on cell"
            );
            if let GameStatus::Finished(outcome) = placement.status {
                info!(board, %outcome, "Game finished");
            }
        }
        Routed::Rejected {
            board,
            cell,
            reason,
        } => debug!(board, cell, %reason, "Turn ignored"),
    }
}

/// Opens the terminal window and runs until the user closes it.
#[instrument(skip(config))]
pub fn run(config: AppConfig) -> anyhow::Result<()> {
    let mut window = TerminalWindow::create(config.title())?;
    window.set_resizable(*config.resizable());
    window.set_min_size(*config.min_width(), *config.min_height());
    window.set_target_frame_rate(*config.target_fps());

    let mut app = App::new(config, window.current_width(), window.current_height());
    info!(boards = app.boards().len(), "Game started");

    while !window.is_close_requested() {
        window.begin_frame()?;

        if window.is_resized() {
            app.relayout(window.current_width(), window.current_height());
        }

        app.update(window.input_mut());
        app.draw(window.painter());

        window.end_frame()?;
    }

    window.close()?;
    info!("Game closed");
    Ok(())
}
