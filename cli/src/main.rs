mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{handle_config, handle_personas, handle_rank, Cli, Commands};
use discovery_config::ErrorFormatter;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match commands::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", ErrorFormatter::new(e));
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Rank {
            profiles,
            query,
            persona,
            top,
            json,
        } => {
            handle_rank(&config, &profiles, &query, persona.as_deref(), top, json)?;
        }
        Commands::Personas => {
            handle_personas(&config);
        }
        Commands::Config => {
            handle_config(&config)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into())
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
