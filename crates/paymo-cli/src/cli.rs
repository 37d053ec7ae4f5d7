//! CLI argument definitions.

use clap::Parser;
use paymo_verifier::Strategy;
use std::path::PathBuf;

/// PayMo anti-fraud verifier - classify streamed payments against payment history.
///
/// Output files are matched to strategies by position: direct edge, common
/// neighbor, fixed degree, then the optional configurable-degree and
/// temporal-window strategies. Strategies without an output file are skipped.
#[derive(Debug, Parser)]
#[command(name = "antifraud")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Batch payment file used to build the payment graph
    pub batch: PathBuf,

    /// Stream payment file to classify
    pub stream: PathBuf,

    /// Verdict files, one per strategy in order (3 to 5)
    #[arg(num_args = 3..=5, required = true)]
    pub outputs: Vec<PathBuf>,

    /// Configuration file path
    #[arg(short, long, env = "PAYMO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Round budget of the configurable-degree strategy
    #[arg(short = 'k', long)]
    pub degree: Option<usize>,

    /// Freshness window of the temporal strategy, in days
    #[arg(short = 'w', long)]
    pub window_days: Option<u32>,

    /// Only classify the first N stream records
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Abort on the first malformed input line instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Run summary format
    #[arg(short, long, value_enum)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Summary format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// No summary
    Quiet,
}

impl Cli {
    /// Pair each output path with the strategy it receives.
    pub fn jobs(&self) -> Vec<(Strategy, PathBuf)> {
        Strategy::ALL
            .into_iter()
            .zip(self.outputs.iter().cloned())
            .collect()
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
