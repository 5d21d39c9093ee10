//! Search execution loop.
//!
//! # Algorithm
//!
//! 1. While the board is conflict-free, record it as the best so far and add
//!    one more random pair.
//! 2. Otherwise run one descent phase (hill-climbing or annealing) on the
//!    current pair count.
//! 3. A phase that ends with conflicts left exhausts the search.

use rand::Rng;
use tracing::{debug, info, instrument, warn};

use super::config::{AnnealConfig, HillClimbConfig, SearchConfig, Strategy};
use super::schedule::LogCooling;
use super::types::{SearchResult, Termination};
use crate::error::Result;
use crate::grid::{AttackGrid, Colour, Layout};
use crate::random::rng_from;

#[derive(Debug, Default)]
struct Counters {
    steps: u64,
    accepted: u64,
    improving: u64,
}

impl Counters {
    fn record_move(&mut self, before: u64, after: u64) {
        self.accepted += 1;
        if after < before {
            self.improving += 1;
        }
    }
}

/// Drives an [`AttackGrid`] towards zero conflicts and grows the pair count
/// each time it gets there.
pub struct Optimizer;

impl Optimizer {
    /// Runs a search with a generator seeded from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use peaceable_queens::grid::AttackGrid;
    /// use peaceable_queens::search::{Optimizer, SearchConfig};
    ///
    /// let mut grid = AttackGrid::new(6);
    /// let config = SearchConfig::default().with_target_pairs(3).with_seed(1);
    /// let result = Optimizer::run(&mut grid, &config).unwrap();
    /// assert!(result.best_pairs <= 3);
    /// ```
    pub fn run(grid: &mut AttackGrid, config: &SearchConfig) -> Result<SearchResult> {
        let mut rng = rng_from(config.seed);
        Self::run_with_rng(grid, config, &mut rng)
    }

    /// Runs a search drawing from `rng`. `config.seed` is ignored.
    ///
    /// Fails only if `config` is invalid.
    #[instrument(level = "debug", skip_all, fields(n = grid.size(), strategy = config.strategy.name()))]
    pub fn run_with_rng<R: Rng>(
        grid: &mut AttackGrid,
        config: &SearchConfig,
        rng: &mut R,
    ) -> Result<SearchResult> {
        config.validate()?;

        let mut counters = Counters::default();
        let mut best: Option<Layout> = None;
        let mut best_pairs = 0;

        let termination = loop {
            if grid.conflict_count() == 0 {
                let pairs = grid.pair_count();
                best_pairs = pairs;
                best = Some(grid.layout());
                info!(pairs, steps = counters.steps, "conflict-free board found\n{grid}");

                if config.target_pairs.is_some_and(|target| pairs >= target) {
                    break Termination::TargetReached;
                }
                if grid.empty().len() < 2 {
                    warn!(pairs, "no room left for another pair");
                    break Termination::BoardFull;
                }
                grid.place_pair(rng);
                continue;
            }

            let solved = match &config.strategy {
                Strategy::HillClimb(hc) => hill_climb(grid, hc, rng, &mut counters),
                Strategy::Anneal(sa) => anneal(grid, sa, rng, &mut counters),
            };
            if !solved {
                info!(
                    pairs = grid.pair_count(),
                    conflicts = grid.conflict_count(),
                    "search budget exhausted"
                );
                break Termination::Exhausted;
            }
        };

        Ok(SearchResult {
            termination,
            best_pairs,
            best,
            pairs_on_board: grid.pair_count(),
            residual_conflicts: grid.conflict_count(),
            steps: counters.steps,
            accepted_moves: counters.accepted,
            improving_moves: counters.improving,
        })
    }
}

/// Steepest descent with random tie-breaking and sideways moves.
///
/// Returns `true` once the board is conflict-free.
fn hill_climb<R: Rng>(
    grid: &mut AttackGrid,
    config: &HillClimbConfig,
    rng: &mut R,
    counters: &mut Counters,
) -> bool {
    let mut ties: Vec<usize> = Vec::new();

    for _ in 0..config.max_attempts {
        if grid.conflict_count() == 0 {
            return true;
        }
        if grid.occupied().is_empty() {
            break;
        }
        counters.steps += 1;

        let before = grid.conflict_count();
        if climb_step(grid, rng, &mut ties).is_some() {
            counters.record_move(before, grid.conflict_count());
        }
    }

    grid.conflict_count() == 0
}

/// Picks a random queen and moves it to a uniformly chosen cheapest empty
/// square, provided that square is no worse than where it stands.
///
/// Returns the applied move as `(from, to)`. `ties` is scratch space.
pub(crate) fn climb_step<R: Rng>(
    grid: &mut AttackGrid,
    rng: &mut R,
    ties: &mut Vec<usize>,
) -> Option<(usize, usize)> {
    let queen = grid.random_occupied(rng)?;
    let colour = occupant(grid, queen);
    let current = grid.square(queen).cost();

    let mut lowest = u32::MAX;
    ties.clear();
    for &to in grid.empty() {
        let cost = grid.square(to).cost_for(colour);
        if cost < lowest {
            lowest = cost;
            ties.clear();
            ties.push(to);
        } else if cost == lowest {
            ties.push(to);
        }
    }

    if ties.is_empty() || lowest > current {
        return None;
    }
    let to = ties[rng.random_range(0..ties.len())];
    grid.move_queen(queen, to);
    Some((queen, to))
}

/// One full logarithmic cooling schedule at the current pair count.
///
/// Returns `true` once the board is conflict-free.
fn anneal<R: Rng>(
    grid: &mut AttackGrid,
    config: &AnnealConfig,
    rng: &mut R,
    counters: &mut Counters,
) -> bool {
    let cooling = LogCooling::new(config.initial_temperature, config.max_steps);
    let mut remaining = cooling.max_steps();
    let mut temperature = cooling.temperature(remaining);
    debug!(
        pairs = grid.pair_count(),
        conflicts = grid.conflict_count(),
        temperature,
        "starting cooling schedule"
    );

    while grid.conflict_count() > 0 && temperature > 0.0 {
        let (Some(old), Some(next)) = (grid.random_occupied(rng), grid.random_empty(rng)) else {
            break;
        };
        counters.steps += 1;

        let colour = occupant(grid, old);
        let cost_diff =
            i64::from(grid.square(old).cost()) - i64::from(grid.square(next).cost_for(colour));

        if accept(cost_diff, temperature, rng) {
            let before = grid.conflict_count();
            grid.move_queen(old, next);
            counters.record_move(before, grid.conflict_count());
        }

        remaining -= 1;
        temperature = cooling.temperature(remaining);
    }

    grid.conflict_count() == 0
}

/// Metropolis acceptance for a move whose cost drops by `cost_diff`.
///
/// Non-worsening moves are always taken. Worsening moves pass with
/// probability `exp(cost_diff / temperature)`, which is zero once the
/// temperature has reached zero.
pub(crate) fn accept<R: Rng>(cost_diff: i64, temperature: f64, rng: &mut R) -> bool {
    if cost_diff >= 0 {
        return true;
    }
    if temperature <= 0.0 {
        return false;
    }
    let probability = (cost_diff as f64 / temperature).exp();
    rng.random::<f64>() < probability
}

fn occupant(grid: &AttackGrid, index: usize) -> Colour {
    grid.square(index)
        .occupant()
        .unwrap_or_else(|| unreachable!("square {index} listed as occupied but empty"))
}
