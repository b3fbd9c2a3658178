///
/// Command-line surface and orchestration for statblock.
///
/// The orchestrator resolves the locator (arguments, else stdin), obtains the
/// page from a [`DocumentSupplier`], builds the record with
/// [`crate::page::extract_record`], formats it and hands the text to an
/// [`OutputSink`]. Rendering itself lives in the pure core modules.
use crate::contract::{DocumentSupplier, MissingLocator, NotFound, OutputSink};
use crate::fetch::{CompendiumClient, FileSupplier};
use crate::load_config::load_config;
use crate::page::extract_record;
use crate::record::format_record;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{error, info};

pub const USAGE: &str = "usage: statblock [Roll20 URL or Monster Name]\n\
                         alternatively the URL/Name can be passed from STDIN";

/// Print a D&D 5e monster from the Roll20 compendium as a plain-text stat block.
#[derive(Debug, Parser)]
#[clap(name = "statblock", version)]
pub struct Cli {
    /// Monster name or full compendium URL. Read from stdin when omitted.
    pub locator: Vec<String>,

    /// Path to an optional YAML config file
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Render a saved compendium page instead of fetching one
    #[clap(long)]
    pub file: Option<PathBuf>,
}

/// Joined positional words, or the trimmed contents of `stdin` when there are none.
pub async fn resolve_locator_input<R>(words: &[String], stdin: &mut R) -> Result<String>
where
    R: AsyncRead + Unpin,
{
    if !words.is_empty() {
        return Ok(words.join(" ").trim().to_string());
    }
    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .await
        .context("failed reading STDIN")?;
    Ok(buf.trim().to_string())
}

/// Fetch, extract and format the stat block for one locator.
pub async fn statblock_for<S>(supplier: &S, locator: &str) -> Result<String>
where
    S: DocumentSupplier + ?Sized,
{
    let html = supplier.fetch(locator).await?;
    let record = extract_record(&html);
    if !record.is_found() {
        error!(locator, "No monster title on page");
        return Err(NotFound {
            locator: locator.to_string(),
        }
        .into());
    }
    info!(name = %record.name, "Formatting stat block");
    Ok(format_record(&record))
}

/// Full CLI flow writing the stat block to `sink`.
pub async fn run_with<O: OutputSink>(cli: Cli, sink: &mut O) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;

    let supplier: Box<dyn DocumentSupplier> = match &cli.file {
        Some(path) => Box::new(FileSupplier::new(path)),
        None => Box::new(CompendiumClient::new(&config)?),
    };

    let locator = match &cli.file {
        Some(path) if cli.locator.is_empty() => path.display().to_string(),
        _ => resolve_locator_input(&cli.locator, &mut tokio::io::stdin()).await?,
    };
    if locator.is_empty() {
        return Err(MissingLocator.into());
    }
    info!(locator = %locator, "Resolved locator");

    let text = statblock_for(supplier.as_ref(), &locator).await?;
    sink.emit(&text).context("failed writing stat block")?;
    Ok(())
}

/// Entry point used by `main`: the stat block goes to stdout.
pub async fn run(cli: Cli) -> Result<()> {
    tracing::info!("trace_initialised");
    let mut stdout = std::io::stdout().lock();
    run_with(cli, &mut stdout).await
}

/// Message and exit code `main` reports for a failed run.
pub fn failure_report(err: &anyhow::Error) -> (String, i32) {
    if err.downcast_ref::<MissingLocator>().is_some() {
        (USAGE.to_string(), 1)
    } else if err.downcast_ref::<NotFound>().is_some() {
        ("unknown monster".to_string(), 1)
    } else {
        (format!("error: {err:#}"), 1)
    }
}
