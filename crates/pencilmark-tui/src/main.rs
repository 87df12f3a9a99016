mod app;
mod render;
mod theme;

use app::{App, AppAction, MessageKind};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pencilmark_core::{Control, SolveOutcome, Solver};
use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};
use theme::Theme;

#[derive(Debug, Parser)]
#[command(
    name = "pencilmark",
    version,
    about = "Interactive Sudoku board with an animated backtracking solver"
)]
struct Args {
    /// Pause after each solver step, in milliseconds
    #[arg(long, default_value_t = 30)]
    delay: u64,
    /// Color theme
    #[arg(long, value_enum, default_value_t = ThemeChoice::Dark)]
    theme: ThemeChoice,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeChoice {
    Dark,
    Light,
    HighContrast,
}

impl ThemeChoice {
    fn to_theme(self) -> Theme {
        match self {
            ThemeChoice::Dark => Theme::dark(),
            ThemeChoice::Light => Theme::light(),
            ThemeChoice::HighContrast => Theme::high_contrast(),
        }
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Run the app
    let result = run_app(&mut stdout, args);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(stdout: &mut io::Stdout, args: Args) -> io::Result<()> {
    let mut app = App::new(args.theme.to_theme(), Duration::from_millis(args.delay));
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    loop {
        render::render(stdout, &app)?;
        stdout.flush()?;

        // Handle input with a timeout so the message timer keeps ticking
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && key.code == KeyCode::Char('c')
                    {
                        break;
                    }
                    match app.handle_key(key) {
                        AppAction::Continue => {}
                        AppAction::Quit => break,
                        AppAction::Solve => {
                            if run_solver(stdout, &mut app)? {
                                break;
                            }
                        }
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

/// What the user asked for at a solver yield point
enum CancelRequest {
    None,
    /// Stop the search, keep the app running
    Stop,
    /// Stop the search and quit
    Quit,
}

/// Run the animated solve, yielding to render and cancellation checks after
/// every trial and retraction. Returns true if the user asked to quit.
fn run_solver(stdout: &mut io::Stdout, app: &mut App) -> io::Result<bool> {
    let givens = app.capture_givens();
    let theme = app.theme.clone();
    let delay = app.step_delay;
    app.board.set_solving(true);

    let mut quit = false;
    let mut io_error = None;

    let solver = Solver::new();
    let outcome = solver.solve_with(&mut app.board, &mut |board, step| {
        if let Err(e) = render::render_solving(stdout, board, &theme, &givens, step) {
            io_error = Some(e);
            return Control::Cancel;
        }
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        match poll_cancel() {
            Ok(CancelRequest::None) => Control::Continue,
            Ok(CancelRequest::Stop) => Control::Cancel,
            Ok(CancelRequest::Quit) => {
                quit = true;
                Control::Cancel
            }
            Err(e) => {
                io_error = Some(e);
                Control::Cancel
            }
        }
    });

    app.board.set_solving(false);
    if let Some(e) = io_error {
        return Err(e);
    }

    match outcome {
        SolveOutcome::Solved => app.show_message("Solved", MessageKind::Success),
        SolveOutcome::Unsolvable => app.show_message(
            "No completion exists from the current board",
            MessageKind::Error,
        ),
        SolveOutcome::Cancelled => app.show_message("Solve cancelled", MessageKind::Info),
    }

    Ok(quit)
}

/// Drain pending events at a yield point, looking for a cancellation
fn poll_cancel() -> io::Result<CancelRequest> {
    let mut request = CancelRequest::None;
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(CancelRequest::Quit);
            }
            if let KeyCode::Esc | KeyCode::Char('q') = key.code {
                request = CancelRequest::Stop;
            }
        }
    }
    Ok(request)
}
