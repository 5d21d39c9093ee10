//! Local-search solver for the peaceable queens problem.
//!
//! Place as many pairs of light and dark queens on an `n x n` board as
//! possible so that no queen attacks a queen of the other colour.
//!
//! - [`grid`]: the board model. Each square tracks how many queens of each
//!   colour attack it, so a move is priced and applied in `O(n)`.
//! - [`search`]: hill-climbing and simulated annealing, plus the outer loop
//!   that adds a pair whenever the board reaches zero conflicts.
//! - [`known`]: best-known pair counts and request validation.
//!
//! # Examples
//!
//! ```
//! use peaceable_queens::grid::AttackGrid;
//! use peaceable_queens::random::create_rng;
//! use peaceable_queens::search::{AnnealConfig, Optimizer, SearchConfig, Strategy};
//!
//! let mut rng = create_rng(7);
//! let mut grid = AttackGrid::new(5);
//! grid.place_pairs(2, &mut rng);
//!
//! let config = SearchConfig::default()
//!     .with_strategy(Strategy::Anneal(AnnealConfig::default().with_max_steps(20_000)));
//! let result = Optimizer::run_with_rng(&mut grid, &config, &mut rng).unwrap();
//! assert_eq!(grid.conflict_count(), result.residual_conflicts);
//! ```

pub mod error;
pub mod grid;
pub mod known;
pub mod random;
pub mod search;

pub use error::{Error, Result};
