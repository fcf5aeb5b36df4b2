use aligned_exclusion::strategy::{Strategy, StrategySolver};
use aligned_exclusion::Grid;
use std::io::{self, BufRead};

// Reads sudokus in line format from stdin and prints the aligned exclusions
// of degree 2 up to the degree given as the first argument (default 3).
fn main() {
    let max_degree = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(3);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("{}", err);
                return;
            }
        };
        let grid = match Grid::from_str_line(&line) {
            Ok(grid) => grid,
            Err(err) => {
                eprintln!("{}: {}", line, err);
                continue;
            }
        };

        println!("{}", grid);
        let mut solver = StrategySolver::from_grid(grid);
        for degree in 2..=max_degree {
            let strategy = match Strategy::aligned(degree) {
                Some(strategy) => strategy,
                None => break,
            };
            for deduction in solver.find_hints(strategy) {
                println!("    {}", deduction);
            }
        }
    }
}
