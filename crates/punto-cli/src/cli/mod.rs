//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use punto_core::EventStore;
use punto_core::config::Config;

use crate::logging;

mod commands;

#[derive(Parser)]
#[command(name = "punto")]
#[command(version)]
#[command(about = "Punto Medio: one event, every narrative")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Events dataset to use instead of the configured or bundled one
    #[arg(long, global = true, value_name = "PATH", env = "PUNTO_DATA")]
    data: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Browse the feed in the terminal (default)
    Browse,
    /// Inspect events in the dataset
    Events {
        #[command(subcommand)]
        command: EventCommands,
    },
    /// Keyword search over titles and summaries
    Search {
        /// Text to look for (case-insensitive)
        #[arg(value_name = "QUERY")]
        query: String,
    },
    /// Check a dataset file and report the first problem
    Validate {
        /// Dataset to check
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum EventCommands {
    /// Lists events in feed order
    List,
    /// Shows an event with its narratives and sources
    Show {
        /// The ID of the event to show
        #[arg(value_name = "EVENT_ID")]
        id: String,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let browsing = matches!(cli.command, None | Some(Commands::Browse));
    // Held until exit so the file writer flushes.
    let _log_guard = if browsing {
        Some(logging::init_file()?)
    } else {
        logging::init_stderr();
        None
    };

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

/// Dataset precedence: `--data`, then `data_path` from config, then bundled.
fn load_store(data: Option<PathBuf>, config: &Config) -> Result<EventStore> {
    let path = data.or_else(|| config.data_path.clone());
    match &path {
        Some(path) => {
            EventStore::load(path).with_context(|| format!("load dataset {}", path.display()))
        }
        None => EventStore::bundled().context("load bundled dataset"),
    }
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli { command, data } = cli;

    match command.unwrap_or(Commands::Browse) {
        Commands::Browse => {
            let config = Config::load().context("load config")?;
            let store = load_store(data, &config)?;
            commands::browse::run(config, store).await
        }
        Commands::Events { command } => {
            let config = Config::load().context("load config")?;
            let store = load_store(data, &config)?;
            match command {
                EventCommands::List => {
                    commands::events::list(&store);
                    Ok(())
                }
                EventCommands::Show { id } => commands::events::show(&store, &id),
            }
        }
        Commands::Search { query } => {
            let config = Config::load().context("load config")?;
            let store = load_store(data, &config)?;
            commands::search::run(&store, &query);
            Ok(())
        }
        Commands::Validate { path } => commands::validate::run(&path),
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
