use action_shrink_catalog::ActionCatalog;
use action_shrink_document::{parse_stdin_input, DocumentOptions, StdinInput};
use action_shrink_engine::{shrink, IterationBudget, ShrinkOptions};
use anyhow::{Context as AnyhowContext, Result};
use clap::{CommandFactory, Parser};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

mod flags;
mod stdin;

use flags::LevelFlag;

const CATALOG_ENV: &str = "ACTION_SHRINK_CATALOG";

fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "action-shrink")]
#[command(
    about = "Shrink lists of permission actions into the smallest equivalent set of wildcard patterns",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Actions to shrink, e.g. `s3:GetObject`. Read from stdin when omitted
    #[arg(value_name = "ACTION")]
    actions: Vec<String>,

    /// Action catalog JSON file (falls back to $ACTION_SHRINK_CATALOG)
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Maximum reduction passes; 0 or less runs until the list stops shrinking
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    iterations: i64,

    /// Only shrink actions with these access levels, comma separated
    #[arg(long, value_enum, value_delimiter = ',')]
    levels: Vec<LevelFlag>,

    /// Drop string `Sid` fields from JSON documents
    #[arg(short = 's', long)]
    remove_sids: bool,

    /// Print JSON documents without indentation
    #[arg(short = 'w', long)]
    remove_whitespace: bool,

    /// Give up on stdin if nothing arrives within this many milliseconds
    #[arg(long, value_name = "MS")]
    read_wait_ms: Option<u64>,

    /// Print catalog details and exit
    #[arg(short = 'd', long)]
    show_data_version: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn catalog_path(&self) -> Result<PathBuf> {
        self.catalog
            .clone()
            .or_else(|| env::var_os(CATALOG_ENV).map(PathBuf::from))
            .with_context(|| format!("No action catalog: pass --catalog or set {CATALOG_ENV}"))
    }

    fn document_options(&self) -> DocumentOptions {
        let shrink = ShrinkOptions::default()
            .iterations(IterationBudget::from_count(self.iterations))
            .levels(self.levels.iter().map(|flag| flag.as_domain()));
        DocumentOptions {
            shrink,
            remove_sids: self.remove_sids,
        }
    }
}

pub async fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let catalog_path = cli.catalog_path()?;
    let catalog = ActionCatalog::from_path(&catalog_path)
        .with_context(|| format!("Failed to load catalog {}", catalog_path.display()))?;
    if catalog.is_empty() {
        log::warn!("Catalog {} has no actions", catalog_path.display());
    }

    if cli.show_data_version {
        print_stdout(&format!("catalog: {}", catalog_path.display()))?;
        print_stdout(&format!("namespaces: {}", catalog.namespace_count()))?;
        print_stdout(&format!("actions: {}", catalog.action_count()))?;
        return Ok(());
    }

    let options = cli.document_options();
    let mut actions = cli.actions.clone();

    if actions.is_empty() {
        let data = stdin::read_stdin(cli.read_wait_ms.map(Duration::from_millis)).await?;
        match parse_stdin_input(&catalog, &options, &data).await? {
            StdinInput::Document(document) => {
                let rendered = if cli.remove_whitespace {
                    serde_json::to_string(&document)?
                } else {
                    serde_json::to_string_pretty(&document)?
                };
                return print_stdout(&rendered);
            }
            StdinInput::Actions(found) => actions = found,
            StdinInput::Empty => {}
        }
    }

    if actions.is_empty() {
        print_stdout("No actions provided or input from stdin")?;
        Cli::command().print_help()?;
        return Ok(());
    }

    let shrunk = shrink(&catalog, &actions, &options.shrink).await?;
    for action in shrunk {
        print_stdout(&action)?;
    }
    Ok(())
}
