//! Terminal front-end: one keyboard, one mouse, two players.

mod input;
mod ui;

pub use input::{Action, translate};
pub use ui::{BOARD_HEIGHT, BOARD_WIDTH, Theme, cell_at, cell_rect, draw};

use crate::controller::{Announcer, Controller, Renderer};
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use hotseat_tictactoe::{GameState, Position, new_game};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Latest frame handed over by the controller.
#[derive(Debug, Clone)]
pub struct BoardView {
    state: GameState,
    focus: Position,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            state: new_game(),
            focus: Position::Center,
        }
    }
}

impl Renderer for BoardView {
    fn render(&mut self, state: &GameState, focus: Position) {
        self.state = state.clone();
        self.focus = focus;
    }
}

/// Latest announcement, shown under the board.
#[derive(Debug, Clone, Default)]
pub struct StatusLine(String);

impl Announcer for StatusLine {
    fn announce(&mut self, message: &str) {
        info!(text = message, "Announcement");
        self.0 = message.to_string();
    }
}

/// Runs the game until the players quit.
#[instrument(skip(theme))]
pub fn run(theme: Theme) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let guard = TerminalGuard::new(io::stdout());
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = event_loop(&mut terminal, &theme);

    drop(terminal);
    drop(guard);
    info!("Terminal UI closed");
    res
}

/// Leaves raw mode, the alternate screen and mouse capture when dropped.
///
/// Created right after raw mode is enabled, so an error anywhere later in
/// setup or in the event loop still hands the shell back in a usable state.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn new(out: W) -> Self {
        Self { out }
    }

    fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, cursor::Show)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, theme: &Theme) -> Result<()> {
    let mut controller = Controller::new(BoardView::default(), StatusLine::default());
    controller.start();

    let mut board_area = Rect::default();
    loop {
        terminal.draw(|f| {
            let view = controller.renderer();
            board_area = draw(f, &view.state, view.focus, &controller.announcer().0, theme);
        })?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        match translate(&event::read()?, board_area) {
            Some(Action::Quit) => return Ok(()),
            Some(Action::Input(input)) => {
                if let Err(err) = controller.handle(input) {
                    debug!(error = %err, "Input rejected");
                }
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_restores_terminal_on_drop() {
        let mut out = Vec::new();
        drop(TerminalGuard::new(&mut out));

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"), "left alternate screen: {written:?}");
        assert!(written.contains("\x1b[?25h"), "showed cursor: {written:?}");
    }

    #[test]
    fn test_guard_restores_when_setup_fails_early() {
        fn setup(out: &mut Vec<u8>) -> Result<()> {
            let _guard = TerminalGuard::new(out);
            Err(io::Error::other("no terminal").into())
        }

        let mut out = Vec::new();
        assert!(setup(&mut out).is_err());
        assert!(String::from_utf8(out).unwrap().contains("\x1b[?1049l"));
    }
}
