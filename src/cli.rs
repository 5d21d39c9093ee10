use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};

use peaceable_queens::search::{AnnealConfig, HillClimbConfig, SearchConfig, Strategy};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "peaceable-queens",
    version,
    about = "Fit as many non-attacking pairs of light and dark queens on an N x N board as local search can find."
)]
pub struct Cli {
    /// Width and height of the board (3 to 30)
    #[arg(value_name = "N")]
    pub n: usize,

    /// Pairs to seed before searching (defaults to the best-known count for N)
    #[arg(value_name = "M")]
    pub pairs: Option<usize>,

    /// Move-selection policy
    #[arg(short, long, value_enum, default_value_t = Method::Anneal)]
    pub strategy: Method,

    /// Initial annealing temperature
    #[arg(short = 't', long, value_name = "T", default_value_t = AnnealConfig::default().initial_temperature)]
    pub temperature: f64,

    /// Annealing steps per pair count
    #[arg(long, value_name = "NUM", default_value_t = AnnealConfig::default().max_steps)]
    pub steps: u64,

    /// Hill-climbing attempts per pair count
    #[arg(long, value_name = "NUM", default_value_t = HillClimbConfig::default().max_attempts)]
    pub attempts: u64,

    /// Stop once this many pairs sit on a conflict-free board
    #[arg(long, value_name = "PAIRS")]
    pub target: Option<usize>,

    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Increase verbosity level (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings, hiding per-solution progress
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Search method selectable on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Anneal,
    HillClimb,
}

impl Cli {
    /// Builds the search configuration from the parsed flags.
    pub fn search_config(&self) -> SearchConfig {
        let strategy = match self.strategy {
            Method::Anneal => Strategy::Anneal(
                AnnealConfig::default()
                    .with_initial_temperature(self.temperature)
                    .with_max_steps(self.steps),
            ),
            Method::HillClimb => Strategy::HillClimb(
                HillClimbConfig::default().with_max_attempts(self.attempts),
            ),
        };
        let mut config = SearchConfig::default().with_strategy(strategy);
        config.target_pairs = self.target;
        config.seed = self.seed;
        config
    }
}

/// Prints `err` with the usage line to stderr and exits with failure.
pub fn usage_error(err: impl std::fmt::Display) -> ! {
    Cli::command()
        .error(ErrorKind::ValueValidation, err)
        .exit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_size_only() {
        let cli = Cli::try_parse_from(["peaceable-queens", "8"]).unwrap();
        assert_eq!(cli.n, 8);
        assert_eq!(cli.pairs, None);
        assert_eq!(cli.strategy, Method::Anneal);
        assert_eq!(cli.search_config(), SearchConfig::default());
    }

    #[test]
    fn test_size_pairs_and_options() {
        let cli = Cli::try_parse_from([
            "peaceable-queens",
            "10",
            "4",
            "--strategy",
            "hill-climb",
            "--attempts",
            "500",
            "--seed",
            "3",
            "--target",
            "12",
        ])
        .unwrap();
        assert_eq!(cli.pairs, Some(4));

        let config = cli.search_config();
        assert_eq!(
            config.strategy,
            Strategy::HillClimb(HillClimbConfig { max_attempts: 500 })
        );
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.target_pairs, Some(12));
    }

    #[test]
    fn test_rejects_non_numeric_and_extra_arguments() {
        assert!(Cli::try_parse_from(["peaceable-queens", "eight"]).is_err());
        assert!(Cli::try_parse_from(["peaceable-queens", "-3"]).is_err());
        assert!(Cli::try_parse_from(["peaceable-queens", "8", "2", "1"]).is_err());
        assert!(Cli::try_parse_from(["peaceable-queens"]).is_err());
    }
}
