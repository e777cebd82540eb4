//! vocab CLI: import word lists and practice Spanish/Bulgarian vocabulary.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::PracticeMode;

mod commands;
mod config;
mod reader;
mod store;

use config::Config;

#[derive(Parser)]
#[command(name = "vocab", version, about = "Spanish/Bulgarian vocabulary trainer")]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import word pairs from a spreadsheet (.xlsx, .ods, .csv, .tsv, .json)
    Import {
        /// Spreadsheet file; the first row must be a header
        file: PathBuf,

        /// Validate only, do not store anything
        #[arg(long)]
        dry_run: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add or update one word pair in the word book
    Add {
        /// Spanish word
        spanish: String,

        /// Bulgarian translation
        bulgarian: String,

        /// Print the stored word as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a single answer
    Check {
        /// The learner's answer
        answer: String,

        /// The expected answer
        #[arg(long)]
        expected: String,

        /// Further accepted answers
        #[arg(long = "alt")]
        alternatives: Vec<String>,

        /// Practice mode: quiz_bg_to_es, quiz_es_to_bg, sentence_bg_to_es
        #[arg(long, default_value = "quiz_bg_to_es", value_parser = parse_mode)]
        mode: PracticeMode,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Practice words from the word book
    Practice {
        /// Practice mode: quiz_bg_to_es, quiz_es_to_bg, sentence_bg_to_es
        #[arg(long, default_value = "quiz_bg_to_es", value_parser = parse_mode)]
        mode: PracticeMode,

        /// Number of words (1-50)
        #[arg(long, default_value_t = 50)]
        limit: usize,
    },

    /// List the words in the word book
    List {
        /// Print the words as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_mode(value: &str) -> Result<PracticeMode, String> {
    PracticeMode::from_str(value).ok_or_else(|| format!("unknown practice mode: {value}"))
}

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    let result = match cli.command {
        Commands::Import {
            file,
            dry_run,
            json,
        } => commands::import::execute(&config, file, dry_run, json),
        Commands::Add {
            spanish,
            bulgarian,
            json,
        } => commands::add::execute(&config, spanish, bulgarian, json),
        Commands::Check {
            answer,
            expected,
            alternatives,
            mode,
            json,
        } => commands::check::execute(mode, answer, expected, alternatives, json),
        Commands::Practice { mode, limit } => commands::practice::execute(&config, mode, limit),
        Commands::List { json } => commands::list::execute(&config, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
