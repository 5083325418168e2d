//! CLI argument definitions for messier

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Parser)]
#[command(name = "messier")]
#[command(about = "Query a Messier catalogue file")]
#[command(version)]
pub struct Cli {
    /// Catalogue file, one object per line
    #[arg(long, global = true, default_value = "messier.txt")]
    pub catalogue: PathBuf,

    /// Skip lines that fail to parse instead of aborting
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Ignore lines starting with this prefix
    #[arg(long, global = true)]
    pub comment_prefix: Option<String>,

    /// Log level when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Shortcut for --log-level debug
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every object, brightest first
    List,

    /// Mean apparent magnitude of one category
    MeanMagnitude {
        #[arg(long, default_value = "Open cluster")]
        category: String,
    },

    /// Object of one category with the largest distance
    MostDistant {
        #[arg(long, default_value = "Globular cluster")]
        category: String,
    },

    /// Object in one region with the lowest declination
    LowestDec {
        #[arg(long, default_value = "Sagittarius")]
        region: String,
    },

    /// Object closest on the sky to the given one
    Nearest {
        /// Primary id, e.g. M45
        #[arg(default_value = "M45")]
        id: String,
    },

    /// Show a single object
    Show {
        /// Primary id, e.g. M31
        id: String,
    },

    /// Objects matching a category and/or region, in catalogue order
    Filter {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        region: Option<String>,
    },
}
