//! Command-line interface for studyrank.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use studyrank_core::Tier;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::OutputFormat;

#[derive(Parser)]
#[command(
    name = "studyrank",
    version,
    about = "Simulated study leaderboard over two million candidates"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// The user's aggregate stats for the period.
#[derive(Args, Debug, Clone)]
pub struct UserArgs {
    /// Rated sessions this month
    #[arg(long)]
    sessions: u32,

    /// Average efficiency in percent (0-100)
    #[arg(long)]
    efficiency: f64,

    /// Day of the month to rank on (defaults to today in the configured zone)
    #[arg(long)]
    day: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Show global rank and badge
    Rank {
        #[command(flatten)]
        user: UserArgs,
    },

    /// Show the top-100 elite list
    Elite {
        #[command(flatten)]
        user: UserArgs,
    },

    /// Show the synthetic peers around your rank
    Peers {
        #[command(flatten)]
        user: UserArgs,

        /// Seed for the peer jitter (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the rank tiers
    Tiers {
        /// Show a single tier (e.g. "heroic", "gm")
        #[arg(long)]
        tier: Option<Tier>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Summarise a day log and show full standings
    Standings {
        /// Day-log JSON file
        #[arg(long)]
        log: PathBuf,

        /// Month to summarise as YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<String>,

        /// Day of the month to rank on (defaults to today in the configured zone)
        #[arg(long)]
        day: Option<u32>,

        /// Seed for the peer jitter (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Create a starter config
    Init,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("studyrank_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    let result = match cli.command {
        Commands::Rank { user } => commands::rank::execute(user, config),
        Commands::Elite { user } => commands::elite::execute(user, config),
        Commands::Peers { user, seed } => commands::peers::execute(user, seed, config),
        Commands::Tiers { tier, format } => commands::tiers::execute(tier, format),
        Commands::Standings {
            log,
            month,
            day,
            seed,
            format,
        } => commands::standings::execute(log, month, day, seed, format, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
