//! CLI frontend for Text-Based Future.

mod commands;

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tbf_shell::config::DEFAULT_TABLES_DIR;
use tbf_tables::{Dice, LoaderConfig};

#[derive(Parser)]
#[command(
    name = "tbf",
    about = "Text-Based Future — random tables for civilisation generation",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Options for commands that load a table directory.
#[derive(Args)]
struct TableArgs {
    /// Directory containing table .csv files
    #[arg(short, long, env = "TBF_TABLES_DIR", default_value = DEFAULT_TABLES_DIR)]
    dir: PathBuf,

    /// Die every table is rolled with (e.g. d100, d20, 6)
    #[arg(long, default_value = "d100", value_parser = parse_dice)]
    dice: Dice,

    /// Pause after each loaded file, in milliseconds
    #[arg(long, default_value = "0")]
    delay_ms: u64,
}

impl TableArgs {
    fn loader_config(&self) -> LoaderConfig {
        tracing::debug!(
            dir = %self.dir.display(),
            dice = %self.dice,
            delay_ms = self.delay_ms,
            "table options resolved"
        );
        LoaderConfig::default()
            .with_dice(self.dice)
            .with_file_delay(Duration::from_millis(self.delay_ms))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Load the table directory and list its tables
    List {
        #[command(flatten)]
        tables: TableArgs,
    },

    /// Roll on a named table
    Roll {
        /// Table name (file stem)
        table: String,

        /// Number of rolls
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        #[command(flatten)]
        tables: TableArgs,
    },

    /// Run a headless session: start screen, new game, generate
    Play {
        /// Number of results to generate
        #[arg(short = 'n', long, default_value = "1")]
        rolls: u32,

        /// RNG seed for reproducible generation
        #[arg(short, long)]
        seed: Option<u64>,

        #[command(flatten)]
        tables: TableArgs,
    },
}

fn parse_dice(s: &str) -> Result<Dice, String> {
    Dice::from_str_tag(s).ok_or_else(|| format!("invalid die '{s}', expected e.g. d20 or 100"))
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::List { tables } => commands::list::run(&tables.dir, &tables.loader_config()),
        Commands::Roll {
            table,
            count,
            seed,
            tables,
        } => commands::roll::run(&tables.dir, &tables.loader_config(), &table, count, seed),
        Commands::Play {
            rolls,
            seed,
            tables,
        } => commands::play::run(&tables.dir, tables.loader_config(), rolls, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
