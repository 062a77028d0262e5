//! CLI frontend for the Zhouyi divination toolkit.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "zy",
    about = "Zhouyi — the sixty-four hexagrams, cast and interpreted",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all 64 hexagrams
    List {
        /// Filter by auspice rank (e.g. supreme, 中上, dire)
        #[arg(short, long)]
        auspice: Option<String>,
    },

    /// Search hexagrams by name, pinyin, English gloss, or number
    Search {
        /// Search query
        query: String,
    },

    /// Show one hexagram in detail
    Show {
        /// King Wen number, Chinese name, or pinyin
        reference: String,
    },

    /// Cast a full six-line divination
    Cast {
        /// RNG seed for a reproducible cast
        #[arg(short, long)]
        seed: Option<u64>,

        /// Stream an AI interpretation of the result
        #[arg(short, long)]
        interpret: bool,
    },

    /// Stream an AI interpretation for a hexagram
    Interpret {
        /// King Wen number, Chinese name, or pinyin
        reference: String,
    },
}

fn main() {
    // Logs go to stderr so they never interleave with streamed output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { auspice } => commands::list::run(auspice.as_deref()),
        Commands::Search { query } => commands::search::run(&query),
        Commands::Show { reference } => commands::show::run(&reference),
        Commands::Cast { seed, interpret } => commands::cast::run(seed, interpret),
        Commands::Interpret { reference } => commands::interpret::run(&reference),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
