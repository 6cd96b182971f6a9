//! Raw terminal events to controller inputs.

use super::ui::cell_at;
use crate::controller::Input;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use hotseat_tictactoe::Direction;
use ratatui::layout::Rect;

/// What the event loop should do with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward to the controller.
    Input(Input),
    /// Leave the application.
    Quit,
}

/// Decodes one terminal event. `board_area` is where the board was last drawn.
pub fn translate(event: &Event, board_area: Rect) -> Option<Action> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => cell_at(board_area, *column, *row).map(|pos| Action::Input(Input::Select(pos.to_index()))),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let input = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Char('r') => Input::Restart,
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => Input::Navigate(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => Input::Navigate(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => Input::Navigate(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => Input::Navigate(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Input::Activate,
        KeyCode::Char(c @ '1'..='9') => Input::Select(c as usize - '1' as usize),
        _ => return None,
    };
    Some(Action::Input(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::ui::{BOARD_HEIGHT, BOARD_WIDTH};
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn board() -> Rect {
        Rect::new(0, 0, BOARD_WIDTH, BOARD_HEIGHT)
    }

    #[test]
    fn test_digits_select_cells() {
        assert_eq!(
            translate(&key(KeyCode::Char('1')), board()),
            Some(Action::Input(Input::Select(0)))
        );
        assert_eq!(
            translate(&key(KeyCode::Char('9')), board()),
            Some(Action::Input(Input::Select(8)))
        );
        assert_eq!(translate(&key(KeyCode::Char('0')), board()), None);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            translate(&key(KeyCode::Left), board()),
            Some(Action::Input(Input::Navigate(Direction::Left)))
        );
        assert_eq!(
            translate(&key(KeyCode::Char('s')), board()),
            Some(Action::Input(Input::Navigate(Direction::Down)))
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(translate(&key(KeyCode::Char('q')), board()), Some(Action::Quit));
        assert_eq!(
            translate(&key(KeyCode::Char('r')), board()),
            Some(Action::Input(Input::Restart))
        );
        assert_eq!(
            translate(&key(KeyCode::Enter), board()),
            Some(Action::Input(Input::Activate))
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate(&release, board()), None);
    }

    #[test]
    fn test_click_selects_cell() {
        assert_eq!(
            translate(&click(13, 5), board()),
            Some(Action::Input(Input::Select(4)))
        );
        assert_eq!(translate(&click(11, 0), board()), None);
    }
}
