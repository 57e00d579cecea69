mod cli;
mod config;
mod output;
mod terminal;

use anyhow::{bail, Context, Result};
use clap::Parser;
use focus_core::{FormatHint, ReaderSettings};
use focus_ingest::{title_from_filename, Pipeline, ReadingDocument};
use rayon::prelude::*;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::cli::{CliArgs, OutputMode};
use crate::config::CliConfig;
use crate::terminal::Terminal;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    focus_core::config::load_dotenv();
    let args = CliArgs::parse();

    // Load config
    let file_config = CliConfig::load(args.config.as_deref())
        .context("failed to load configuration")?;
    let env_config = focus_core::Config::from_env();
    env_config.log_summary();

    let settings = file_config.resolve_settings(&env_config, &args);
    debug!(?settings, "Resolved reader settings");

    let hint = args.format.as_deref().map(FormatHint::from_extension);
    let pipeline = Pipeline::new(settings);

    // Files are independent, so they are processed in parallel; results keep
    // input order.
    let results: Vec<(String, Result<ReadingDocument>)> = args
        .files
        .par_iter()
        .map(|path| {
            let label = path.display().to_string();
            (label, process_file(&pipeline, path, hint.as_ref()))
        })
        .collect();

    let total = results.len();
    let mut documents = Vec::with_capacity(total);
    let terminal = Terminal::new(file_config.color && !args.no_color);
    let mut stderr = io::stderr();
    for (label, result) in results {
        match result {
            Ok(doc) => documents.push(doc),
            Err(e) => terminal.print_error(&mut stderr, &label, &format!("{e:#}"))?,
        }
    }
    let failed = total - documents.len();
    info!(total, failed, "Processing finished");

    write_output(&args, &settings, &terminal, &documents)?;

    if failed > 0 {
        bail!("{failed} of {total} documents could not be processed");
    }
    Ok(())
}

fn process_file(
    pipeline: &Pipeline,
    path: &Path,
    hint: Option<&FormatHint>,
) -> Result<ReadingDocument> {
    let raw = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let filename = path.to_string_lossy();
    let doc = match hint {
        Some(hint) => {
            pipeline.process_with_hint(&raw, &title_from_filename(&filename), hint.clone())
        }
        None => pipeline.process(&raw, &filename),
    };
    doc.with_context(|| format!("failed to process {}", path.display()))
}

fn write_output(
    args: &CliArgs,
    settings: &ReaderSettings,
    terminal: &Terminal,
    documents: &[ReadingDocument],
) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match args.output {
        OutputMode::Text => {
            for doc in documents {
                terminal.print_document(&mut stdout, doc, settings.active_intensity(), args.stats)?;
            }
        }
        OutputMode::Json => {
            if !documents.is_empty() {
                writeln!(stdout, "{}", output::to_json(documents, args.stats)?)?;
            }
        }
        OutputMode::Html => {
            if !documents.is_empty() {
                write!(stdout, "{}", output::to_html(documents, args.stats))?;
            }
        }
    }
    stdout.flush()?;
    Ok(())
}
