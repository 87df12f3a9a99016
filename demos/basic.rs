//! Basic example of using the board and solver without a terminal UI

use pencilmark_core::{is_complete, Board, Control, Grid, Position, SolveStep, Solver};

fn print_grid(grid: &Grid) {
    for (i, row) in grid.iter().enumerate() {
        if i % 3 == 0 && i != 0 {
            println!("------+-------+------");
        }
        for (j, digit) in row.iter().enumerate() {
            if j % 3 == 0 && j != 0 {
                print!("| ");
            }
            if *digit == 0 {
                print!(". ");
            } else {
                print!("{} ", digit);
            }
        }
        println!();
    }
}

fn main() {
    // Enter a digit the way the interactive flow does: guess, then commit
    let mut board = Board::new();
    board.set_guess(Position::new(0, 0), 1);
    assert!(board.commit(Position::new(0, 0)));

    // A conflicting commit is rejected and the guess stays penciled in
    board.set_guess(Position::new(0, 1), 1);
    assert!(!board.commit(Position::new(0, 1)));
    board.clear_cell(Position::new(0, 1));

    println!("Starting board:");
    print_grid(&board.snapshot());

    // Solve, counting trials and retractions as the search runs
    let mut trials = 0u64;
    let mut retractions = 0u64;
    let solver = Solver::new();
    let outcome = solver.solve_with(&mut board, &mut |_, step| {
        match step {
            SolveStep::Trial { .. } => trials += 1,
            SolveStep::Retract { .. } => retractions += 1,
        }
        Control::Continue
    });

    println!("\nOutcome: {:?}", outcome);
    println!("Trials: {}, retractions: {}\n", trials, retractions);
    print_grid(&board.snapshot());

    assert!(is_complete(&board.snapshot()));
}
