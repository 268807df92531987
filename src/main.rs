// rostercheck - flag intramural teams carrying too many club players
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use rostercheck::config::CheckerConfig;
use rostercheck::pdf_extraction::{build_strategy, ExtractionRouter, TextStrategy};
use rostercheck::pipeline::Checker;
use rostercheck::report::{render, OutputFormat};
use rostercheck::types::{GameFormat, StrategyKind};

#[derive(Parser, Debug)]
#[command(author, version, about = "Check IM team rosters against club player limits")]
struct Args {
    /// Config file (default: $CONFIG_DIR/rostercheck/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report teams over the club player cap
    Check {
        /// IMLeagues roster PDF export
        pdf: PathBuf,

        /// Club roster CSV export (repeatable)
        #[arg(short, long = "club", value_name = "CSV")]
        clubs: Vec<PathBuf>,

        /// Players on the field at once; falls back to the config default
        #[arg(short, long, value_enum)]
        format: Option<GameFormat>,

        /// Machine-readable output
        #[arg(long)]
        json: bool,

        /// No colors
        #[arg(long)]
        plain: bool,
    },

    /// Print extracted text page by page
    Dump {
        pdf: PathBuf,

        /// Force one strategy instead of the fallback chain
        #[arg(short, long, value_enum)]
        strategy: Option<StrategyKind>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "rostercheck=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = CheckerConfig::discover(args.config.as_deref()).context("Failed to load config")?;

    match args.command {
        Command::Check { pdf, clubs, format, json, plain } => {
            let format = format.unwrap_or(config.rules.default_format);
            let outcome = Checker::from_config(&config)
                .check(&pdf, &clubs, format)
                .with_context(|| format!("❌ Failed to check {}", pdf.display()))?;

            let output = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text { color: !plain && atty::is(atty::Stream::Stdout) }
            };
            println!("{}", render(&outcome, output)?);
        }
        Command::Dump { pdf, strategy } => dump(&pdf, strategy, &config)?,
    }

    Ok(())
}

fn dump(pdf: &Path, strategy: Option<StrategyKind>, config: &CheckerConfig) -> Result<()> {
    let Some(kind) = strategy else {
        let result = ExtractionRouter::from_config(&config.extraction).extract_with_fallback(pdf)?;
        println!("=== {} ({} fallbacks, {}ms) ===", result.method, result.fallbacks, result.extraction_time_ms);
        println!("{}", result.text);
        return Ok(());
    };

    let pages = build_strategy(kind, &config.extraction)
        .extract_pages(pdf)
        .with_context(|| format!("{} could not read {}", kind, pdf.display()))?;

    for (i, page) in pages.iter().enumerate() {
        println!("=== Page {} ===", i + 1);
        println!("{}", page);
        println!();
        println!("{}", "=".repeat(20));
    }
    Ok(())
}
