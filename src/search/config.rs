//! Search configuration.

use crate::error::{Error, Result};

/// Parameters of the logarithmic annealing schedule.
///
/// The schedule runs `max_steps` moves per pair count, cooling from
/// `initial_temperature` to exactly zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Temperature at the first step. Must be positive.
    pub initial_temperature: f64,

    /// Steps per pair count before the schedule reaches zero.
    pub max_steps: u64,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 2.0,
            max_steps: 1_000_000,
        }
    }
}

impl AnnealConfig {
    /// Sets the starting temperature.
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    /// Sets the step budget per pair count.
    pub fn with_max_steps(mut self, steps: u64) -> Self {
        self.max_steps = steps;
        self
    }

    /// Rejects a non-positive or non-finite temperature and a zero step budget.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(Error::InvalidTemperature(self.initial_temperature));
        }
        if self.max_steps == 0 {
            return Err(Error::ZeroSteps);
        }
        Ok(())
    }
}

/// Parameters of steepest-descent hill-climbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbConfig {
    /// Moves attempted per pair count. Reset whenever a pair is added.
    pub max_attempts: u64,
}

impl Default for HillClimbConfig {
    fn default() -> Self {
        Self {
            max_attempts: 1_000_000,
        }
    }
}

impl HillClimbConfig {
    /// Sets the attempt budget per pair count.
    pub fn with_max_attempts(mut self, n: u64) -> Self {
        self.max_attempts = n;
        self
    }

    /// Rejects a zero attempt budget.
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(Error::ZeroAttempts);
        }
        Ok(())
    }
}

/// Move-selection policy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Move a random queen to the cheapest empty square, never uphill.
    HillClimb(HillClimbConfig),

    /// Random relocation with Metropolis acceptance under logarithmic cooling.
    Anneal(AnnealConfig),
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Anneal(AnnealConfig::default())
    }
}

impl Strategy {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::HillClimb(_) => "hill-climb",
            Strategy::Anneal(_) => "anneal",
        }
    }
}

/// Configuration for a full search run.
///
/// # Examples
///
/// ```
/// use peaceable_queens::search::{AnnealConfig, SearchConfig, Strategy};
///
/// let config = SearchConfig::default()
///     .with_strategy(Strategy::Anneal(
///         AnnealConfig::default()
///             .with_initial_temperature(1.5)
///             .with_max_steps(50_000),
///     ))
///     .with_target_pairs(7)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// How candidate moves are chosen and accepted.
    pub strategy: Strategy,

    /// Stop once a conflict-free board holds this many pairs.
    pub target_pairs: Option<usize>,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl SearchConfig {
    /// Sets the move-selection policy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Stops the search once this many conflict-free pairs are found.
    pub fn with_target_pairs(mut self, pairs: usize) -> Self {
        self.target_pairs = Some(pairs);
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        match &self.strategy {
            Strategy::HillClimb(hc) => hc.validate(),
            Strategy::Anneal(sa) => sa.validate(),
        }
    }
}
