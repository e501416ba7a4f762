use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use ledger_core::{ExtractorConfig, StatementOutcome};
use ledger_finance::{export_transactions_csv, process_outcome};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod input;

use input::PageSource;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("LEDGER_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(
    name = "ledger-lens",
    version,
    long_version = LONG_VERSION,
    about = "Extract account details and transactions from bank statement text"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the extraction pipeline over statement page texts
    Extract {
        /// Page text file; repeat in page order
        #[arg(long = "page", value_name = "FILE")]
        pages: Vec<PathBuf>,

        /// Directory of *.txt pages (sorted by file name)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Single text file with pages separated by form feeds
        #[arg(long)]
        text: Option<PathBuf>,

        /// Extractor config (JSON, or TOML by extension)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the full result as JSON instead of the summary
        #[arg(long)]
        json: bool,

        /// Also write the transaction ledger to this CSV file
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,
    },

    /// Extractor configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default configuration as a JSON template
    Init {
        #[arg(long, default_value = "ledger-lens.json")]
        path: PathBuf,
    },

    /// Print the effective configuration as JSON
    Show {
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "ledger=info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Extract {
            pages,
            dir,
            text,
            config,
            json,
            csv,
        } => {
            let source = PageSource::from_args(pages, dir, text)?;
            extract(&source, config.as_deref(), json, csv.as_deref())?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init { path } => {
                if path.exists() {
                    println!("Config already exists: {}", path.display());
                    return Ok(());
                }
                ExtractorConfig::default()
                    .save_template(&path)
                    .with_context(|| format!("write {}", path.display()))?;
                println!("Wrote default config: {}", path.display());
            }
            ConfigCommand::Show { config } => {
                let cfg = ExtractorConfig::load_or_default(config.as_deref());
                println!("{}", serde_json::to_string_pretty(&cfg)?);
            }
        },
    }

    Ok(())
}

fn extract(source: &PageSource, config: Option<&Path>, json: bool, csv: Option<&Path>) -> Result<()> {
    let config = match config {
        Some(p) => ExtractorConfig::load(p).with_context(|| format!("load config {}", p.display()))?,
        None => ExtractorConfig::default(),
    };

    let pages = source.load()?;
    tracing::info!(pages = pages.len(), "page texts loaded");

    let outcome = process_outcome(&pages, &config);
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome).context("serialize result")?);
    }

    let report = match outcome {
        StatementOutcome::Report(report) => report,
        StatementOutcome::Failed { error } => bail!("extraction failed: {error}"),
    };

    if let Some(path) = csv {
        export_transactions_csv(path, &report.transactions)?;
        tracing::info!(path = %path.display(), rows = report.transactions.len(), "ledger exported");
    }

    if !json {
        print!("{}", report.render_summary());
    }

    Ok(())
}
