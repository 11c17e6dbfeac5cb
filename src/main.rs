use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cta_ridership_analyzer::{
    visualization::{format_general_stats, print_general_stats_table},
    AppConfig, Database, Session,
};

#[derive(Parser)]
#[command(
    name = "cta-analyzer",
    about = "CTA L Ridership Analyzer - Station, line and daily ridership reports",
    version,
    author
)]
struct Cli {
    /// Path to the ridership SQLite database
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Config file (defaults to ./cta-analyzer.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Background image for the station map plot
    #[arg(long, global = true)]
    map_image: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive report menu (default)
    Menu,

    /// Print general statistics about the database and exit
    Stats {
        /// Render the statistics as a table
        #[arg(long)]
        table: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AppConfig::discover(cli.config.as_deref())
        .context("failed to load configuration")?
        .with_overrides(cli.db, cli.map_image, cli.no_color);
    config.validate().context("invalid configuration")?;

    if !config.chart.color {
        colored::control::set_override(false);
    }

    let db = Database::open(&config.database).with_context(|| {
        format!("failed to open database {}", config.database.display())
    })?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let renderer = config.renderer();
            let stdin = io::stdin();
            let mut session = Session::new(&db, &renderer, stdin.lock(), io::stdout())
                .with_map_image(config.map_image.clone());
            session.run()?;
            info!(queries = db.queries_executed(), "session finished");
        }

        Commands::Stats { table } => {
            let stats = db.general_stats()?;
            if table {
                print_general_stats_table(&stats);
            } else {
                print!("{}", format_general_stats(&stats));
            }
        }
    }

    Ok(())
}
