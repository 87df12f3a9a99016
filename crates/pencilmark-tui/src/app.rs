use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use pencilmark_core::{Board, Position};
use std::time::Duration;

/// Result of handling a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Quit,
    /// Run the animated solver (driven by the main loop, which owns stdout)
    Solve,
}

/// Styling of the transient status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

/// The main application state
pub struct App {
    /// The board shared between manual entry and the solver
    pub board: Board,
    /// Cursor position; the cursor is the board selection
    pub cursor: Position,
    /// Color theme
    pub theme: Theme,
    /// Pause between solver steps
    pub step_delay: Duration,
    /// Which cells were committed when the last solve started, for rendering
    /// pre-filled digits differently from solver-derived ones
    pub givens: Option<[[bool; 9]; 9]>,
    /// Transient message and its styling
    message: Option<(String, MessageKind)>,
    /// Ticks until the message disappears
    message_timer: u32,
}

impl App {
    pub fn new(theme: Theme, step_delay: Duration) -> Self {
        let mut board = Board::new();
        let cursor = Position::new(4, 4);
        board.select(cursor);
        Self {
            board,
            cursor,
            theme,
            step_delay,
            givens: None,
            message: None,
            message_timer: 0,
        }
    }

    /// The current message, if one is showing
    pub fn message(&self) -> Option<(&str, MessageKind)> {
        self.message.as_ref().map(|(text, kind)| (text.as_str(), *kind))
    }

    /// Show a temporary message
    pub fn show_message(&mut self, msg: &str, kind: MessageKind) {
        self.message = Some((msg.to_string(), kind));
        self.message_timer = 30; // ~3 seconds at 100ms poll
    }

    /// Update timers (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }
    }

    /// Record which cells are committed right now, for solve-time rendering
    pub fn capture_givens(&mut self) -> [[bool; 9]; 9] {
        let mut mask = [[false; 9]; 9];
        for pos in Position::all() {
            mask[pos.row][pos.col] = self.board.cell(pos).is_committed();
        }
        self.givens = Some(mask);
        mask
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,

            // Navigation
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),

            // Pencil in a guess
            KeyCode::Char(c @ '1'..='9') => {
                let digit = c.to_digit(10).unwrap() as u8;
                if self.board.cell(self.cursor).is_committed() {
                    self.show_message("Cell is already committed", MessageKind::Error);
                } else {
                    self.board.set_guess(self.cursor, digit);
                }
            }

            // Commit the guess under the cursor
            KeyCode::Enter => {
                let cell = self.board.cell(self.cursor);
                if cell.is_committed() {
                    self.show_message("Cell is already committed", MessageKind::Error);
                } else if cell.is_empty() {
                    self.show_message("Pencil a digit first (1-9)", MessageKind::Info);
                } else if self.board.commit(self.cursor) {
                    // A hand-committed digit is not solver-derived; stop
                    // rendering from the stale solve-time mask
                    self.givens = None;
                    self.show_message("Committed", MessageKind::Success);
                } else {
                    self.show_message(
                        "Conflicts with its row, column, or box",
                        MessageKind::Error,
                    );
                }
            }

            // Clear the cell under the cursor
            KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('0') => {
                self.board.clear_cell(self.cursor);
                self.givens = None;
            }

            // Reset the whole board
            KeyCode::Char('r') => {
                self.board.clear_all();
                self.givens = None;
                self.show_message("Board cleared", MessageKind::Info);
            }

            KeyCode::Char(' ') => return AppAction::Solve,

            _ => {}
        }

        AppAction::Continue
    }

    /// Handle a mouse event: left click selects the cell under the pointer
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = event.kind {
            if let Some(pos) = crate::render::cell_at(event.column, event.row) {
                self.cursor = pos;
                self.board.select(pos);
            }
        }
    }

    fn move_cursor(&mut self, row_delta: i32, col_delta: i32) {
        let new_row = (self.cursor.row as i32 + row_delta).clamp(0, 8) as usize;
        let new_col = (self.cursor.col as i32 + col_delta).clamp(0, 8) as usize;
        self.cursor = Position::new(new_row, new_col);
        self.board.select(self.cursor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use pencilmark_core::CellState;

    fn press(app: &mut App, code: KeyCode) -> AppAction {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn new_app() -> App {
        App::new(Theme::dark(), Duration::ZERO)
    }

    #[test]
    fn test_cursor_tracks_selection() {
        let mut app = new_app();
        assert_eq!(app.cursor, Position::new(4, 4));
        assert_eq!(app.board.selected(), Some(Position::new(4, 4)));

        press(&mut app, KeyCode::Up);
        assert_eq!(app.cursor, Position::new(3, 4));
        assert_eq!(app.board.selected(), Some(Position::new(3, 4)));

        // Clamped at the edge
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('h'));
        }
        assert_eq!(app.cursor, Position::new(3, 0));
    }

    #[test]
    fn test_guess_and_commit_keys() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.board.cell(app.cursor), CellState::Guessed(5));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.board.cell(app.cursor), CellState::Committed(5));
    }

    #[test]
    fn test_conflicting_commit_keeps_guess() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.board.cell(app.cursor), CellState::Guessed(5));
        assert_eq!(app.message().map(|(_, kind)| kind), Some(MessageKind::Error));
    }

    #[test]
    fn test_reset_key_clears_the_board() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('r'));
        for pos in Position::all() {
            assert_eq!(app.board.cell(pos), CellState::Empty);
        }
    }

    #[test]
    fn test_quit_and_solve_actions() {
        let mut app = new_app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), AppAction::Quit);
        assert_eq!(press(&mut app, KeyCode::Esc), AppAction::Quit);
        assert_eq!(press(&mut app, KeyCode::Char(' ')), AppAction::Solve);
    }

    #[test]
    fn test_manual_commit_invalidates_givens_mask() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('7'));
        press(&mut app, KeyCode::Enter);
        app.capture_givens();
        assert!(app.givens.is_some());

        // Committing by hand after a solve ran (or was cancelled) must not
        // leave the new digit styled as solver-derived
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);
        assert!(app.givens.is_none());
    }

    #[test]
    fn test_capture_givens() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('7'));
        press(&mut app, KeyCode::Enter);

        let mask = app.capture_givens();
        assert!(mask[4][4]);
        assert_eq!(
            mask.iter().flatten().filter(|&&given| given).count(),
            1
        );
    }
}
