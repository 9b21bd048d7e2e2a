use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use phishscan::config::{Config, OutputFormat};
use phishscan::output::json::ScanReport;
use phishscan::output::terminal;
use phishscan::scoring::{self, ScanError};

/// Exit status when there was nothing to scan.
const EXIT_EMPTY_INPUT: u8 = 2;

/// phishscan: heuristic phishing risk scoring for email text.
///
/// Checks an email for suspicious phrases, link patterns, and sender
/// addresses, and reports an additive score with a LOW / MEDIUM / HIGH tier.
#[derive(Parser)]
#[command(name = "phishscan", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan email text for phishing indicators
    Scan {
        /// Email text to scan (reads stdin when neither this nor --file is given)
        #[arg(conflicts_with = "file")]
        text: Option<String>,

        /// Load the email from a text file
        #[arg(long, short)]
        file: Option<PathBuf>,

        /// Print a JSON report instead of the colored summary
        #[arg(long)]
        json: bool,
    },

    /// List the scoring rules in evaluation order
    Rules,
}

fn main() -> Result<ExitCode> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("phishscan=warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load();
    config.apply_color();

    match cli.command {
        Commands::Scan { text, file, json } => {
            let text = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => match phishscan::input::load_file(&path) {
                    Ok(text) => text,
                    Err(e) => {
                        eprintln!("{}", format!("Error loading file: {e:#}").red());
                        return Ok(ExitCode::FAILURE);
                    }
                },
                (None, None) => {
                    if io::stdin().is_terminal() {
                        eprintln!(
                            "{}",
                            "Paste the email, then press Ctrl-D to scan.".dimmed()
                        );
                    }
                    phishscan::input::read_to_string(io::stdin().lock())?
                }
            };

            let result = match scoring::scan(&text) {
                Ok(result) => result,
                Err(e @ ScanError::EmptyInput) => {
                    terminal::display_refusal(&e);
                    return Ok(ExitCode::from(EXIT_EMPTY_INPUT));
                }
            };

            let format = if json { OutputFormat::Json } else { config.format };
            match format {
                OutputFormat::Json => {
                    let report = ScanReport::new(&result, Utc::now());
                    println!("{}", report.to_json()?);
                }
                OutputFormat::Text => terminal::display_result(&result),
            }
        }

        Commands::Rules => {
            info!("Listing rule table");
            terminal::display_rules(scoring::rules());
        }
    }

    Ok(ExitCode::SUCCESS)
}
