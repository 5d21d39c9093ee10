//! Local search over [`AttackGrid`](crate::grid::AttackGrid) states.
//!
//! Two interchangeable move policies share one outer loop that adds a pair
//! every time the board becomes conflict-free:
//!
//! - **Hill-climbing**: move a random queen to a cheapest empty square,
//!   breaking ties uniformly, never accepting a worse square.
//! - **Simulated annealing**: propose a random queen and a random empty
//!   square and apply the Metropolis criterion under a [`LogCooling`]
//!   schedule that reaches exactly zero.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Bosch (1999), "Peaceably Coexisting Armies of Queens", *Optima* 62

mod config;
mod runner;
mod schedule;
mod types;

pub use config::{AnnealConfig, HillClimbConfig, SearchConfig, Strategy};
pub use runner::Optimizer;
pub use schedule::LogCooling;
pub use types::{SearchResult, Termination};
