//! Stateless UI rendering for the board.

use derive_getters::Getters;
use derive_new::new;
use hotseat_tictactoe::{GameState, Mark, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Width of one cell in terminal columns.
pub const CELL_WIDTH: u16 = 11;
/// Height of one cell in terminal rows.
pub const CELL_HEIGHT: u16 = 3;
/// Board width including the two separators.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Board height including the two separators.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Colors and hints for drawing marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct Theme {
    /// Color of X marks.
    x: Color,
    /// Color of O marks.
    o: Color,
    /// Show 1-9 in empty cells.
    show_cell_numbers: bool,
}

impl Theme {
    fn mark_style(&self, mark: Mark) -> Style {
        let color = match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}

/// Draws the whole screen and returns the board rectangle for hit-testing.
pub fn draw(
    frame: &mut Frame,
    state: &GameState,
    focus: Position,
    message: &str,
    theme: &Theme,
) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Announcement
            Constraint::Length(1),            // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Hotseat Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let board_area = center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT);
    draw_board(frame, board_area, state, focus, theme);

    let status = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("arrows/wasd move · enter/space place · 1-9 or click place · r restart · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    board_area
}

fn draw_board(frame: &mut Frame, board_area: Rect, state: &GameState, focus: Position, theme: &Theme) {
    let separator = Style::default().fg(Color::DarkGray);

    for line in 1..3u16 {
        let y = board_area.y + line * (CELL_HEIGHT + 1) - 1;
        let rule = Paragraph::new("─".repeat(board_area.width as usize)).style(separator);
        frame.render_widget(rule, Rect::new(board_area.x, y, board_area.width, 1));

        let x = board_area.x + line * (CELL_WIDTH + 1) - 1;
        for row in 0..3u16 {
            let y = board_area.y + row * (CELL_HEIGHT + 1);
            let bar = Paragraph::new(vec![Line::from("│"); CELL_HEIGHT as usize]).style(separator);
            frame.render_widget(bar, Rect::new(x, y, 1, CELL_HEIGHT));
        }
    }

    let winning = state.status().winning_line();
    for pos in Position::ALL {
        let on_winning_line = winning.is_some_and(|line| line.contains(pos));
        draw_cell(frame, cell_rect(board_area, pos), state, pos, pos == focus, on_winning_line, theme);
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    pos: Position,
    focused: bool,
    on_winning_line: bool,
    theme: &Theme,
) {
    let (symbol, mut style) = match state.board().get(pos) {
        Square::Empty if theme.show_cell_numbers => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(mark) => (mark.to_string(), theme.mark_style(mark)),
    };

    if on_winning_line {
        style = style.add_modifier(Modifier::REVERSED);
    }
    if focused {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
        Line::from(""),
    ];
    let cell = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(if focused { Style::default().bg(Color::White) } else { Style::default() });
    frame.render_widget(cell, area);
}

/// Screen rectangle of one cell inside the board rectangle.
pub fn cell_rect(board_area: Rect, pos: Position) -> Rect {
    let col = pos.col() as u16;
    let row = pos.row() as u16;
    Rect::new(
        board_area.x + col * (CELL_WIDTH + 1),
        board_area.y + row * (CELL_HEIGHT + 1),
        CELL_WIDTH,
        CELL_HEIGHT,
    )
}

/// Maps a terminal coordinate to the cell under it.
///
/// Separators and anything outside the board map to `None`.
pub fn cell_at(board_area: Rect, column: u16, row: u16) -> Option<Position> {
    Position::ALL.into_iter().find(|pos| {
        let rect = cell_rect(board_area, *pos);
        column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
    })
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
