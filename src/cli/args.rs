//! Command line argument parsing for the spellwise CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;
use crate::config::SuggesterConfig;
use crate::error::Result;
use crate::suggest::SortOrder;

/// Spellwise - phonetic and edit-distance word suggestions
#[derive(Parser, Debug, Clone)]
#[command(name = "spellwise")]
#[command(about = "Phonetic and edit-distance word suggestions over a prefix tree")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellwiseArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug, 4=trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpellwiseArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Suggest dictionary words close to each query
    Suggest(SuggestArgs),

    /// Print the key each word is indexed under
    Encode(EncodeArgs),

    /// Distance between two words
    Distance(DistanceArgs),

    /// Suggest corrections for every unknown word of a text file
    Check(CheckArgs),
}

/// Algorithm settings shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct AlgorithmArgs {
    /// Suggestion algorithm
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,

    /// Maximum distance (default depends on the algorithm)
    #[arg(short = 'd', long)]
    pub max_distance: Option<f64>,

    /// Cost for letters sharing a class (editex, typox)
    #[arg(long)]
    pub group_cost: Option<f64>,

    /// Cost for letters with no class in common (editex, typox)
    #[arg(long)]
    pub non_group_cost: Option<f64>,

    /// Maximum number of suggestions per query
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Ranking direction
    #[arg(long)]
    pub order: Option<SortOrder>,

    /// Configuration file (JSON); flags override its values
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

impl AlgorithmArgs {
    /// Build the effective configuration: file values first, then flags.
    pub fn to_config(&self) -> Result<SuggesterConfig> {
        let mut config = match &self.config {
            Some(path) => SuggesterConfig::from_file(path)?,
            None => SuggesterConfig::default(),
        };

        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if let Some(max_distance) = self.max_distance {
            config.max_distance = Some(max_distance);
        }
        if let Some(group_cost) = self.group_cost {
            config.group_cost = group_cost;
        }
        if let Some(non_group_cost) = self.non_group_cost {
            config.non_group_cost = non_group_cost;
        }
        if let Some(limit) = self.limit {
            config.max_suggestions = Some(limit);
        }
        if let Some(order) = self.order {
            config.sort_order = order;
        }

        if (self.group_cost.is_some() || self.non_group_cost.is_some())
            && !config.algorithm.uses_group_costs()
        {
            log::warn!("{} ignores group costs", config.algorithm);
        }

        config.validate()?;
        Ok(config)
    }
}

/// Arguments for suggesting words
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Dictionary file with whitespace-separated words
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Words to find suggestions for
    #[arg(value_name = "QUERY", required = true)]
    pub queries: Vec<String>,

    #[command(flatten)]
    pub algorithm: AlgorithmArgs,
}

/// Arguments for encoding words
#[derive(Parser, Debug, Clone)]
pub struct EncodeArgs {
    /// Words to encode
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    #[command(flatten)]
    pub algorithm: AlgorithmArgs,
}

/// Arguments for measuring a distance
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// Query word
    #[arg(value_name = "FIRST")]
    pub first: String,

    /// Candidate word
    #[arg(value_name = "SECOND")]
    pub second: String,

    #[command(flatten)]
    pub algorithm: AlgorithmArgs,
}

/// Arguments for checking a text file
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Dictionary file with whitespace-separated words
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Text file to check
    #[arg(value_name = "TEXT")]
    pub text: PathBuf,

    #[command(flatten)]
    pub algorithm: AlgorithmArgs,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
