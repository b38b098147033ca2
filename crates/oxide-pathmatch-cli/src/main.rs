//! pathmatch CLI
//!
//! Command-line tool for checking route tables and trying paths against them.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use oxide_pathmatch_cli::{load_routes, report_check};

/// Match paths against an ordered route table.
#[derive(Parser)]
#[command(name = "pathmatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file holding the route table.
    #[arg(short, long, env = "PATHMATCH_ROUTES", default_value = "routes.json")]
    routes: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match one or more paths and print each result as JSON.
    Match {
        /// Paths to match, e.g. `/users/42?tab=posts`.
        #[arg(required = true)]
        paths: Vec<String>,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },

    /// Validate every route pattern.
    Check,

    /// List route patterns in precedence order.
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let table = load_routes(&cli.routes)?;

    match cli.command {
        Commands::Match { paths, pretty } => {
            for path in &paths {
                let result = table.match_path(path);
                if !result.is_match() {
                    info!("No route matched {path}");
                }

                let json = if pretty {
                    serde_json::to_string_pretty(&result)?
                } else {
                    serde_json::to_string(&result)?
                };
                println!("{json}");
            }
        }

        Commands::Check => {
            if !report_check(&table) {
                std::process::exit(1);
            }
            info!("{} routes OK.", table.len());
        }

        Commands::List => {
            for (position, route) in table.routes().iter().enumerate() {
                println!("{:>3}  {}", position + 1, route.pattern());
            }
        }
    }

    Ok(())
}
