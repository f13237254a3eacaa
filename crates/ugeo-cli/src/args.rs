use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use ugeo_core::DEFAULT_SEARCH_LIMIT;

/// CLI arguments for ugeo
#[derive(Debug, Parser)]
#[command(
    name = "ugeo",
    version,
    about = "CLI for querying Uganda's districts, subcounties, parishes and villages"
)]
pub struct CliArgs {
    /// Dataset to load: .json / .json.gz source or .bin / .bin.gz snapshot
    #[arg(short = 'i', long = "input", env = "UGEO_DATA", global = true)]
    pub input: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded tables
    Stats,

    /// List all districts
    Districts,

    /// List the subcounties of a district (sorted)
    Subcounties { district: String },

    /// List the parishes of a subcounty
    Parishes { district: String, subcounty: String },

    /// List the villages of a parish
    Villages {
        district: String,
        subcounty: String,
        parish: String,
    },

    /// Show the full record of a village
    Village { name: String },

    /// Print "district → subcounty → parish → village"
    Path { village: String },

    /// Show the parish, subcounty and district of a village
    Parent { village: String },

    /// Search village, parish, subcounty and district names
    Search {
        /// Text to search for (case-insensitive)
        query: String,

        /// Maximum number of results
        #[arg(short = 'n', long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,

        /// Include the relevance score of each hit
        #[arg(long)]
        scores: bool,
    },

    /// Cross-check the tables and report inconsistencies
    Verify,

    /// Write a binary snapshot of the loaded index (.bin or .bin.gz)
    Snapshot { out: PathBuf },
}
