use std::error::Error;
use std::fs;
use std::num::NonZero;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use gridwalk::{Board, SearchOptions};

/// Find a long path through the free cells of a board file.
///
/// Boards have one line per row: `.`, `L`, `G` and `P` are free cells, `#`, `R` and `X` are blocked.
#[derive(Parser, Debug)]
#[command(name = "solver", version)]
struct Args {
    /// Board file to search.
    board: PathBuf,
    /// Give up after accepting this many cells onto the path, keeping the best path so far.
    #[arg(long)]
    node_limit: Option<NonZero<u64>>,
    /// Keep searching even once no longer path can exist.
    #[arg(long)]
    exhaustive: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let env = env_logger::Env::new()
        .filter("GRIDWALK_LOG")
        .write_style("GRIDWALK_LOG_STYLE");
    env_logger::init_from_env(env);

    let args = Args::parse();
    log::debug!("solver arguments: {:?}", args);

    let board: Board = fs::read_to_string(&args.board)?.parse()?;
    let options = SearchOptions::default()
        .with_node_limit(args.node_limit)
        .with_stop_at_bound(!args.exhaustive);

    let started = Instant::now();
    let solution = board.solve(&options)?;
    let elapsed = started.elapsed();

    print!("{}", solution);
    println!(
        "The longest path length is {}. Calculation time: {:.2} seconds",
        solution.path().len(),
        elapsed.as_secs_f64(),
    );
    if !solution.outcome().complete {
        println!("Node limit reached after {} nodes; a longer path may exist.", solution.outcome().nodes);
    }

    Ok(())
}
