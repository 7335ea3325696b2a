//! CLI entry point for symhist.
//!
//! # Architecture overview
//!
//! `main.rs` is the thin coordination layer between the CLI surface and the
//! library crate. Its responsibilities are:
//!
//! 1. Parse CLI arguments (via `clap`)
//! 2. Load and merge configuration from `~/.config/symhist/config.toml`
//!    (CLI flags win; `--detached` skips the file entirely)
//! 3. Build the code tables and the optional item index once
//! 4. Dispatch to `run_single_file` or `run_batch_mode` based on whether
//!    the `PATH` argument is a file or a directory
//!
//! # Error handling
//!
//! All functions return `Result<(), HistError>`. `main()` catches errors
//! and prints them to stderr before exiting with code 1, so error
//! reporting is consistent regardless of which path through `run()` failed.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use walkdir::WalkDir;

use symhist::config::Config;
use symhist::decoder::Decoder;
use symhist::driver::{self, RunSummary};
use symhist::error::HistError;
use symhist::formatter::OutputFormat;
use symhist::gate::RangeGate;
use symhist::input::LineSource;
use symhist::tables::{CodeTables, ItemIndex, Which};

#[derive(Parser)]
#[command(name = "symhist", version, about = "Symphony history log to JSON converter")]
struct Cli {
    /// History log file, or a directory of logs for batch mode
    path: PathBuf,

    /// Command-code table merged over the built-ins (TAG|Name| per line)
    #[arg(long)]
    commands: Option<PathBuf>,

    /// Data-code table merged over the built-ins (TAG|Name| per line)
    #[arg(long)]
    datacodes: Option<PathBuf>,

    /// Hold-client table (numeric id|client name|)
    #[arg(short, long)]
    clients: Option<PathBuf>,

    /// Item index file (catalog_key|call_seq|copy_num|barcode)
    #[arg(short, long)]
    items: Option<PathBuf>,

    /// Earliest timestamp to admit, as a YYYYMMDDhhmmss prefix
    #[arg(short, long)]
    start: Option<String>,

    /// First timestamp to exclude, as a YYYYMMDDhhmmss prefix
    #[arg(short, long)]
    end: Option<String>,

    /// Output file (single input) or directory (batch mode); stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit newline-delimited JSON for document stores instead of one array
    #[arg(long)]
    ndjson: bool,

    /// Print per-line warnings and the unknown-code journal
    #[arg(short, long)]
    debug: bool,

    /// Ignore the config file; all options must be explicit
    #[arg(long)]
    detached: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), HistError> {
    let config = if cli.detached { Config::default() } else { Config::load() };

    let output = cli.output.clone().or_else(|| config.output_path());

    // --ndjson wins; otherwise the config chooses; otherwise array
    let format = if cli.ndjson {
        OutputFormat::Ndjson
    } else {
        config
            .format
            .as_deref()
            .and_then(|f| f.parse().ok())
            .unwrap_or(OutputFormat::Array)
    };

    let mut tables = CodeTables::builtin();
    merge_table(
        &mut tables,
        cli.commands.clone().or_else(|| config.commands_path()),
        Which::Command,
        cli.debug,
    )?;
    merge_table(
        &mut tables,
        cli.datacodes.clone().or_else(|| config.datacodes_path()),
        Which::Data,
        cli.debug,
    )?;
    merge_table(
        &mut tables,
        cli.clients.clone().or_else(|| config.clients_path()),
        Which::Client,
        cli.debug,
    )?;

    let items = match cli.items.clone().or_else(|| config.items_path()) {
        Some(path) => {
            let index = ItemIndex::load(&path)?;
            eprintln!("Loaded {} item keys from {}", index.len(), path.display());
            Some(index)
        }
        None => {
            eprintln!("No item index; item enrichment disabled.");
            None
        }
    };

    let gate = RangeGate::new(cli.start.as_deref(), cli.end.as_deref());
    let decoder = Decoder::new(&tables, items.as_ref());

    if cli.path.is_dir() {
        run_batch_mode(&cli.path, output.as_deref(), &gate, &decoder, format, cli.debug)
    } else if cli.path.is_file() {
        run_single_file(&cli.path, output.as_deref(), &gate, &decoder, format, cli.debug)
    } else {
        Err(HistError::Other(format!(
            "Path not found: {}",
            cli.path.display()
        )))
    }
}

/// Merge one optional site table file, reporting the entry count in debug mode.
fn merge_table(
    tables: &mut CodeTables,
    path: Option<PathBuf>,
    which: Which,
    debug: bool,
) -> Result<(), HistError> {
    if let Some(path) = path {
        let merged = tables.merge_file(&path, which)?;
        if debug {
            eprintln!("Merged {merged} entries from {}", path.display());
        }
    }
    Ok(())
}

/// Decode one history file, writing to `output` or stdout.
fn run_single_file(
    path: &Path,
    output: Option<&Path>,
    gate: &RangeGate,
    decoder: &Decoder<'_>,
    format: OutputFormat,
    debug: bool,
) -> Result<(), HistError> {
    let source = LineSource::open(path)?;

    let writer: Box<dyn Write> = match output {
        Some(out) => Box::new(BufWriter::new(fs::File::create(out)?)),
        None => Box::new(io::stdout().lock()),
    };

    let mut emitter = format.emitter(writer);
    let summary = driver::run(source, gate, decoder, &mut *emitter, debug)?;
    report(path, &summary, debug);
    Ok(())
}

/// Decode every history file under `dir`, one output file per input.
///
/// Outputs are kept strictly separate per input file; nothing is ever
/// interleaved into a shared stream.
fn run_batch_mode(
    dir: &Path,
    output: Option<&Path>,
    gate: &RangeGate,
    decoder: &Decoder<'_>,
    format: OutputFormat,
    debug: bool,
) -> Result<(), HistError> {
    let output_dir =
        output.ok_or_else(|| HistError::Other("--output is required for batch mode".into()))?;
    fs::create_dir_all(output_dir)?;

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|p| is_history_file(p))
        .collect();
    files.sort();

    let total = files.len();
    eprintln!("Found {total} history files");

    let mut emitted: u64 = 0;
    let mut skipped: u64 = 0;
    for (i, path) in files.iter().enumerate() {
        eprintln!("Processing {}/{}: {}", i + 1, total, path.display());

        let out_path = output_dir.join(derive_output_name(path, format));
        let source = LineSource::open(path)?;
        let writer: Box<dyn Write> = Box::new(BufWriter::new(fs::File::create(&out_path)?));
        let mut emitter = format.emitter(writer);
        let summary = driver::run(source, gate, decoder, &mut *emitter, debug)?;
        report(path, &summary, debug);
        emitted += summary.emitted;
        skipped += summary.skipped;
    }

    eprintln!("Done: {total} files, {emitted} records, {skipped} lines skipped");
    Ok(())
}

/// A file the batch walker should decode.
fn is_history_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("hist") | Some("log") | Some("gz")
    )
}

/// Output filename for a decoded log: source name minus the compression
/// and log suffixes, plus the format extension.
fn derive_output_name(path: &Path, format: OutputFormat) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let base = name.strip_suffix(".gz").unwrap_or(&name);
    let base = base
        .strip_suffix(".hist")
        .or_else(|| base.strip_suffix(".log"))
        .unwrap_or(base);
    let ext = match format {
        OutputFormat::Array => "json",
        OutputFormat::Ndjson => "ndjson",
    };
    format!("{base}.{ext}")
}

/// End-of-run summary on stderr; the journal only in debug mode.
fn report(path: &Path, summary: &RunSummary, debug: bool) {
    eprintln!(
        "{}: {} lines read, {} emitted, {} skipped, {} unknown codes",
        path.display(),
        summary.lines_read,
        summary.emitted,
        summary.skipped,
        summary.unknown_codes
    );
    if debug && !summary.missing.is_empty() {
        eprintln!("Unknown data codes by line:");
        for (line, tags) in &summary.missing {
            eprintln!("  {line}: {tags}");
        }
    }
}
