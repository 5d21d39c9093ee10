mod cli;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use peaceable_queens::grid::AttackGrid;
use peaceable_queens::known;
use peaceable_queens::random::rng_from;
use peaceable_queens::search::{Optimizer, SearchResult, Termination};

use crate::cli::{usage_error, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet);
    debug!("parsed arguments: {:?}", cli);

    let pairs = known::resolve_request(cli.n, cli.pairs).unwrap_or_else(|e| usage_error(e));
    let config = cli.search_config();
    if let Err(e) = config.validate() {
        usage_error(e);
    }

    let mut rng = rng_from(config.seed);
    let mut grid = AttackGrid::new(cli.n);
    grid.place_pairs(pairs, &mut rng);
    println!(
        "Board of size {n}x{n} created with {pairs} pairs ({}).\nWorking...",
        config.strategy.name(),
        n = cli.n
    );

    let result =
        Optimizer::run_with_rng(&mut grid, &config, &mut rng).unwrap_or_else(|e| usage_error(e));
    report(cli.n, &grid, &result);
    ExitCode::SUCCESS
}

fn report(n: usize, grid: &AttackGrid, result: &SearchResult) {
    if let Some(best) = &result.best {
        println!("number of pairs placed: {}", result.best_pairs);
        println!("{best}");
    }

    match result.termination {
        Termination::Exhausted => {
            println!("Final board ({} pairs):\n{grid}", result.pairs_on_board);
            println!(
                "Failure: no conflict-free placement of {} pairs found; {} attacking pairs remain ({} conflicts).",
                result.pairs_on_board,
                grid.attacking_pairs(),
                result.residual_conflicts
            );
        }
        Termination::TargetReached | Termination::BoardFull => {
            println!("Success: {} pairs placed with 0 conflicts.", result.best_pairs);
        }
    }

    if let Some(record) = known::best_known_pairs(n) {
        println!(
            "Best found: {} pairs (best known for {n}x{n}: {record}) after {} steps.",
            result.best_pairs, result.steps
        );
    }
}
