use crate::app::{App, MessageKind};
use crate::theme::Theme;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use pencilmark_core::{Board, CellState, Position, SolveStep};
use std::io;

// Grid geometry: each cell is 3 chars wide plus a border column, so the
// board is 37x19 characters starting at (GRID_X, GRID_Y). The mouse handler
// relies on these constants to map clicks back to cells.
pub const GRID_X: u16 = 2;
pub const GRID_Y: u16 = 1;
pub const GRID_WIDTH: u16 = 37;
pub const GRID_HEIGHT: u16 = 19;

const THICK_LINE: &str = "+===+===+===+===+===+===+===+===+===+";
const THIN_LINE: &str = "+---+---+---+---+---+---+---+---+---+";

/// Render the normal (interactive) screen
pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    execute!(stdout, Hide, Clear(ClearType::All))?;

    render_grid(
        stdout,
        &app.board,
        &app.theme,
        Some(app.cursor),
        app.givens.as_ref(),
        None,
    )?;
    render_side_panel(stdout, app)?;
    render_message(stdout, app)?;

    execute!(stdout, Show)?;
    Ok(())
}

/// Render one animation frame during a solve
///
/// No full-screen clear: the grid is redrawn in place to avoid flicker at
/// high step rates.
pub fn render_solving(
    stdout: &mut io::Stdout,
    board: &Board,
    theme: &Theme,
    givens: &[[bool; 9]; 9],
    step: SolveStep,
) -> io::Result<()> {
    execute!(stdout, Hide)?;
    render_grid(stdout, board, theme, None, Some(givens), Some(step))?;

    let status_y = GRID_Y + GRID_HEIGHT + 1;
    execute!(
        stdout,
        MoveTo(GRID_X, status_y),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.info),
        Print("Solving... press Esc to cancel                    ")
    )?;
    Ok(())
}

/// Map a terminal coordinate to the cell under it, if any
pub fn cell_at(x: u16, y: u16) -> Option<Position> {
    if x <= GRID_X || y <= GRID_Y {
        return None;
    }
    let dx = x - GRID_X;
    let dy = y - GRID_Y;
    if dx >= GRID_WIDTH || dy >= GRID_HEIGHT {
        return None;
    }
    // Border rows and columns are not selectable
    if dx % 4 == 0 || dy % 2 == 0 {
        return None;
    }
    Some(Position::new((dy / 2) as usize, (dx / 4) as usize))
}

fn render_grid(
    stdout: &mut io::Stdout,
    board: &Board,
    theme: &Theme,
    cursor: Option<Position>,
    givens: Option<&[[bool; 9]; 9]>,
    step: Option<SolveStep>,
) -> io::Result<()> {
    execute!(stdout, SetBackgroundColor(theme.bg))?;

    // Border rows, thick at 3x3 boundaries
    for i in 0..=9u16 {
        let (color, line) = if i % 3 == 0 {
            (theme.box_border, THICK_LINE)
        } else {
            (theme.border, THIN_LINE)
        };
        execute!(
            stdout,
            MoveTo(GRID_X, GRID_Y + i * 2),
            SetForegroundColor(color),
            Print(line)
        )?;
    }

    for row in 0..9 {
        let cell_y = GRID_Y + 1 + row as u16 * 2;
        for col in 0..9 {
            let border_color = if col % 3 == 0 {
                theme.box_border
            } else {
                theme.border
            };
            execute!(
                stdout,
                MoveTo(GRID_X + col as u16 * 4, cell_y),
                SetBackgroundColor(theme.bg),
                SetForegroundColor(border_color),
                Print("|")
            )?;

            let pos = Position::new(row, col);
            let (text, fg) = cell_text(board.cell(pos), givens, pos, theme);
            let bg = cell_background(theme, pos, cursor, step, board.is_solving());
            execute!(
                stdout,
                SetBackgroundColor(bg),
                SetForegroundColor(fg),
                Print(text)
            )?;
        }
        execute!(
            stdout,
            MoveTo(GRID_X + GRID_WIDTH - 1, cell_y),
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.box_border),
            Print("|")
        )?;
    }

    Ok(())
}

fn cell_text(
    cell: CellState,
    givens: Option<&[[bool; 9]; 9]>,
    pos: Position,
    theme: &Theme,
) -> (String, Color) {
    match cell {
        CellState::Empty => ("   ".to_string(), theme.fg),
        CellState::Guessed(d) => (format!(" {} ", d), theme.guess),
        CellState::Committed(d) => {
            let fg = match givens {
                Some(mask) if !mask[pos.row][pos.col] => theme.solved,
                _ => theme.given,
            };
            (format!(" {} ", d), fg)
        }
    }
}

fn cell_background(
    theme: &Theme,
    pos: Position,
    cursor: Option<Position>,
    step: Option<SolveStep>,
    solving: bool,
) -> Color {
    if let Some(step) = step {
        if step.pos() == pos {
            return match step {
                SolveStep::Trial { .. } => theme.trial_bg,
                SolveStep::Retract { .. } => theme.retract_bg,
            };
        }
    }
    if !solving {
        if let Some(cur) = cursor {
            if cur == pos {
                return theme.selected_bg;
            }
            if cur.row == pos.row || cur.col == pos.col || cur.box_index() == pos.box_index() {
                return theme.highlight_bg;
            }
        }
    }
    theme.bg
}

fn render_side_panel(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let theme = &app.theme;
    let x = GRID_X + GRID_WIDTH + 3;

    execute!(
        stdout,
        MoveTo(x, GRID_Y),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.fg),
        Print("pencilmark")
    )?;
    execute!(
        stdout,
        MoveTo(x, GRID_Y + 2),
        SetForegroundColor(theme.info),
        Print(format!(
            "Cell ({}, {})   committed {}/81",
            app.cursor.row + 1,
            app.cursor.col + 1,
            app.board.committed_count()
        ))
    )?;

    let bindings: &[(&str, &str)] = &[
        ("arrows/hjkl", "move"),
        ("click", "select"),
        ("1-9", "pencil a digit"),
        ("Enter", "commit"),
        ("Del/0", "clear cell"),
        ("r", "reset board"),
        ("Space", "solve (animated)"),
        ("q/Esc", "quit"),
    ];
    for (i, (keys, what)) in bindings.iter().enumerate() {
        execute!(
            stdout,
            MoveTo(x, GRID_Y + 4 + i as u16),
            SetForegroundColor(theme.key),
            Print(format!("{:<12}", keys)),
            SetForegroundColor(theme.info),
            Print(*what)
        )?;
    }

    Ok(())
}

fn render_message(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let theme = &app.theme;
    let y = GRID_Y + GRID_HEIGHT + 1;
    execute!(
        stdout,
        MoveTo(GRID_X, y),
        SetBackgroundColor(theme.bg),
        Print(" ".repeat(60))
    )?;

    if let Some((text, kind)) = app.message() {
        let color = match kind {
            MessageKind::Info => theme.key,
            MessageKind::Success => theme.success,
            MessageKind::Error => theme.error,
        };
        execute!(
            stdout,
            MoveTo(GRID_X, y),
            SetForegroundColor(color),
            Print(text)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at_maps_interior_coordinates() {
        // First cell interior spans x 3..=5, y 2
        assert_eq!(cell_at(GRID_X + 1, GRID_Y + 1), Some(Position::new(0, 0)));
        assert_eq!(cell_at(GRID_X + 3, GRID_Y + 1), Some(Position::new(0, 0)));
        // Last cell
        assert_eq!(
            cell_at(GRID_X + 33, GRID_Y + 17),
            Some(Position::new(8, 8))
        );
        // Center
        assert_eq!(
            cell_at(GRID_X + 4 * 4 + 2, GRID_Y + 4 * 2 + 1),
            Some(Position::new(4, 4))
        );
    }

    #[test]
    fn test_cell_at_rejects_borders_and_outside() {
        // Corner and border lines
        assert_eq!(cell_at(GRID_X, GRID_Y), None);
        assert_eq!(cell_at(GRID_X + 4, GRID_Y + 1), None);
        assert_eq!(cell_at(GRID_X + 1, GRID_Y + 2), None);
        // Outside the grid
        assert_eq!(cell_at(GRID_X + GRID_WIDTH, GRID_Y + 1), None);
        assert_eq!(cell_at(GRID_X + 1, GRID_Y + GRID_HEIGHT), None);
        assert_eq!(cell_at(0, 0), None);
    }

    #[test]
    fn test_border_line_widths() {
        assert_eq!(THICK_LINE.len() as u16, GRID_WIDTH);
        assert_eq!(THIN_LINE.len() as u16, GRID_WIDTH);
    }
}
