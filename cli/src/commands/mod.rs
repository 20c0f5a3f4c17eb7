pub mod config;
pub mod personas;
pub mod rank;
pub mod ui;

pub use config::handle_config;
pub use personas::handle_personas;
pub use rank::handle_rank;

use clap::{Parser, Subcommand};
use discovery_config::Config;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "discovery")]
#[command(about = "Rank candidate repositories for a query and a user persona")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Log ranking decisions at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a JSON array of repository profiles
    Rank {
        /// Path to the profiles file
        profiles: PathBuf,

        /// The search query
        #[arg(short, long)]
        query: String,

        /// contributor, early_adopter, enterprise or learner (guessed from the query if omitted)
        #[arg(short, long)]
        persona: Option<String>,

        /// Number of results to show (defaults to output.top_n)
        #[arg(long)]
        top: Option<usize>,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the effective persona weights
    Personas,
    /// Validate and print the effective configuration
    Config,
}

/// Explicit file if given, otherwise the default lookup; env overlay either way
pub fn load_config(path: Option<&Path>) -> discovery_config::Result<Config> {
    match path {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    }
}
