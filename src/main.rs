use std::{error::Error as _, path::PathBuf, process::ExitCode, time::Instant};

use boggle_solver::{Board, Dictionary, Grouped, Solver};
use clap::Parser;

/// Find every word hidden in a Boggle-style letter board
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board rows, one argument per row (`CAT SOD RUN`) or a single `/`-separated string (`CAT/SOD/RUN`)
    #[arg(required = true)]
    rows: Vec<String>,

    /// Path to the word list (one word per line)
    #[arg(short, long)]
    dict: PathBuf,

    /// Maximum number of cells in a word; defaults to the number of cells on the board
    #[arg(short, long)]
    max_len: Option<usize>,

    /// Search starting cells one at a time instead of in parallel
    #[arg(long)]
    sequential: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let debug_enabled = cli.debug || std::env::var("BOGGLE_DEBUG").is_ok();
    boggle_solver::log::init_logger(debug_enabled);

    if let Err(e) = try_main(cli) {
        eprintln!("Error: {e}");
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let board: Board = cli.rows.join("/").parse()?;
    log::debug!("board:\n{board}");

    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dict)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let mut solver = Solver::new(&board, &dictionary);
    if let Some(max_len) = cli.max_len {
        solver = solver.max_len(max_len);
    }

    let t_solve = Instant::now();
    let found = if cli.sequential {
        solver.run()?
    } else {
        run_parallel(&solver)?
    };
    let solve_secs = t_solve.elapsed().as_secs_f64();

    println!("{}", Grouped::new(&found));
    log::info!("dictionary load: {load_secs:.3}s, solve: {solve_secs:.3}s");
    Ok(())
}

#[cfg(feature = "parallel")]
fn run_parallel(
    solver: &Solver<'_, Dictionary>,
) -> Result<boggle_solver::FoundWords, boggle_solver::solver::Error> {
    solver.run_parallel()
}

#[cfg(not(feature = "parallel"))]
fn run_parallel(
    solver: &Solver<'_, Dictionary>,
) -> Result<boggle_solver::FoundWords, boggle_solver::solver::Error> {
    solver.run()
}
