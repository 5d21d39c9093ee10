//! Search outcome types.

use crate::grid::Layout;

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The step or attempt budget ran out with conflicts left on the board.
    Exhausted,

    /// A conflict-free board reached the configured target pair count.
    TargetReached,

    /// A conflict-free board had no room for another pair.
    BoardFull,
}

/// Result of a search run.
///
/// Running out of budget is a normal outcome: `termination` is
/// [`Termination::Exhausted`] and `best_pairs` holds the largest pair count
/// that was solved along the way.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Why the search stopped.
    pub termination: Termination,

    /// Largest pair count reached with zero conflicts.
    pub best_pairs: usize,

    /// Board at the moment `best_pairs` was reached.
    pub best: Option<Layout>,

    /// Pairs on the board when the search stopped.
    pub pairs_on_board: usize,

    /// Conflict aggregate when the search stopped (0 unless exhausted).
    pub residual_conflicts: u64,

    /// Total move evaluations across all pair counts.
    pub steps: u64,

    /// Moves applied.
    pub accepted_moves: u64,

    /// Moves that lowered the conflict count.
    pub improving_moves: u64,
}

impl SearchResult {
    /// Whether the step budget ran out before a target or a full board.
    pub fn is_exhausted(&self) -> bool {
        self.termination == Termination::Exhausted
    }
}
