//! Input controller: turns player intents into engine calls.
//!
//! The controller owns the only [`GameState`] and the focused cell. After
//! every input it hands the full state to a [`Renderer`] and, when there is
//! something to say, a one-line message to an [`Announcer`]. Neither
//! callback can change the game.

use hotseat_tictactoe::{Direction, GameState, MoveError, Position, apply_move, new_game};
use tracing::{debug, instrument};

/// Receives the full state whenever it may have changed.
pub trait Renderer {
    /// Draws `state` with `focus` highlighted.
    fn render(&mut self, state: &GameState, focus: Position);
}

/// Receives human-readable announcements.
pub trait Announcer {
    /// Shows or speaks `message`.
    fn announce(&mut self, message: &str);
}

/// A player intent, already decoded from raw key or pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Focus the cell at this index and place a mark there.
    Select(usize),
    /// Place a mark at the focused cell.
    Activate,
    /// Move the focus one cell.
    Navigate(Direction),
    /// Start a new game, at any time.
    Restart,
}

/// Drives one game session.
#[derive(Debug)]
pub struct Controller<R, A> {
    state: GameState,
    focus: Position,
    renderer: R,
    announcer: A,
}

impl<R: Renderer, A: Announcer> Controller<R, A> {
    /// Creates a controller holding a fresh game. Call [`Self::start`] to
    /// publish the first frame.
    pub fn new(renderer: R, announcer: A) -> Self {
        Self {
            state: new_game(),
            focus: Position::Center,
            renderer,
            announcer,
        }
    }

    /// Renders and announces the initial state.
    pub fn start(&mut self) {
        self.publish();
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Focused cell.
    pub fn focus(&self) -> Position {
        self.focus
    }

    /// The render callback.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The announcement callback.
    pub fn announcer(&self) -> &A {
        &self.announcer
    }

    /// Handles one input.
    ///
    /// A rejected move is announced and returned; the game is unchanged.
    #[instrument(skip(self), fields(focus = %self.focus))]
    pub fn handle(&mut self, input: Input) -> Result<(), MoveError> {
        match input {
            Input::Select(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.focus = pos;
                }
                self.place(index)
            }
            Input::Activate => self.place(self.focus.to_index()),
            Input::Navigate(direction) => {
                self.focus = self.focus.step(direction);
                self.renderer.render(&self.state, self.focus);
                Ok(())
            }
            Input::Restart => {
                debug!("Restarting game");
                self.state = new_game();
                self.publish();
                Ok(())
            }
        }
    }

    fn place(&mut self, index: usize) -> Result<(), MoveError> {
        match apply_move(&self.state, index) {
            Ok(next) => {
                self.state = next;
                self.publish();
                Ok(())
            }
            Err(err) => {
                debug!(index, error = %err, "Move rejected");
                self.renderer.render(&self.state, self.focus);
                self.announcer.announce(&err.to_string());
                Err(err)
            }
        }
    }

    fn publish(&mut self) {
        self.renderer.render(&self.state, self.focus);
        self.announcer.announce(&self.state.summary());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotseat_tictactoe::{Mark, Status};

    #[derive(Debug, Default)]
    struct Frames(Vec<(GameState, Position)>);

    impl Renderer for Frames {
        fn render(&mut self, state: &GameState, focus: Position) {
            self.0.push((state.clone(), focus));
        }
    }

    #[derive(Debug, Default)]
    struct Messages(Vec<String>);

    impl Announcer for Messages {
        fn announce(&mut self, message: &str) {
            self.0.push(message.to_string());
        }
    }

    fn controller() -> Controller<Frames, Messages> {
        let mut c = Controller::new(Frames::default(), Messages::default());
        c.start();
        c
    }

    #[test]
    fn test_start_publishes_fresh_game() {
        let c = controller();
        assert_eq!(c.renderer().0.len(), 1);
        assert_eq!(c.announcer().0, vec!["Turn: X"]);
    }

    #[test]
    fn test_navigate_then_activate() {
        let mut c = controller();
        c.handle(Input::Navigate(Direction::Up)).unwrap();
        c.handle(Input::Navigate(Direction::Left)).unwrap();
        assert_eq!(c.focus(), Position::TopLeft);

        c.handle(Input::Activate).unwrap();
        assert_eq!(c.state().history(), &[Position::TopLeft]);
        assert_eq!(c.announcer().0.last().unwrap(), "Turn: O");
    }

    #[test]
    fn test_navigation_does_not_announce() {
        let mut c = controller();
        c.handle(Input::Navigate(Direction::Down)).unwrap();
        assert_eq!(c.announcer().0.len(), 1);
        assert_eq!(c.renderer().0.last().unwrap().1, Position::BottomCenter);
    }

    #[test]
    fn test_rejected_move_announces_error() {
        let mut c = controller();
        c.handle(Input::Select(4)).unwrap();
        let before = c.state().clone();

        assert_eq!(
            c.handle(Input::Select(4)),
            Err(MoveError::CellOccupied(Position::Center))
        );
        assert_eq!(c.state(), &before);
        assert_eq!(
            c.announcer().0.last().unwrap(),
            "That cell is already taken."
        );
    }

    #[test]
    fn test_invalid_index_keeps_focus() {
        let mut c = controller();
        assert_eq!(c.handle(Input::Select(11)), Err(MoveError::InvalidIndex(11)));
        assert_eq!(c.focus(), Position::Center);
    }

    #[test]
    fn test_win_then_restart() {
        let mut c = controller();
        for index in [0, 3, 1, 4, 2] {
            c.handle(Input::Select(index)).unwrap();
        }
        assert_eq!(c.state().status().winner(), Some(Mark::X));
        assert_eq!(c.announcer().0.last().unwrap(), "X wins!");
        assert_eq!(c.handle(Input::Select(8)), Err(MoveError::GameOver));

        c.handle(Input::Restart).unwrap();
        assert_eq!(*c.state().status(), Status::InProgress);
        assert!(c.state().history().is_empty());
        assert_eq!(c.announcer().0.last().unwrap(), "Turn: X");
    }

    #[test]
    fn test_restart_mid_game() {
        let mut c = controller();
        c.handle(Input::Select(0)).unwrap();
        c.handle(Input::Restart).unwrap();
        assert_eq!(c.state(), &new_game());
    }
}
