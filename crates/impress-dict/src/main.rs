//! impress-dict binary
//!
//! Loads a JSON entry set, resolves orthography collisions and writes the
//! Mobipocket index document.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use impress_dict::{
    load_entries, load_entries_from_path, prune_with_config, write_index_with_config, DictConfig,
    Reporter, StreamReporter, TracingReporter,
};

#[derive(Debug, Parser)]
#[command(name = "impress-dict", version, about = "Build a Kindle dictionary index")]
struct Args {
    /// JSON entry file, or `-` for stdin
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (defaults to <config_dir>/impress-dict/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the stylesheet referenced by the index
    #[arg(long)]
    stylesheet: Option<String>,

    /// Write entries as loaded, without resolving collisions
    #[arg(long)]
    no_prune: bool,

    /// Print diagnostics as plain lines on stderr instead of log records
    #[arg(long)]
    plain_diagnostics: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => DictConfig::load(path)?,
        None => DictConfig::load_default()?,
    };
    if let Some(stylesheet) = args.stylesheet {
        config.writer.stylesheet = stylesheet;
        config.validate()?;
    }

    let entries = if args.input.as_os_str() == "-" {
        load_entries(io::stdin().lock())?
    } else {
        load_entries_from_path(&args.input)?
    };

    let entries = if args.no_prune {
        entries
    } else {
        let mut reporter: Box<dyn Reporter> = if args.plain_diagnostics {
            Box::new(StreamReporter::stderr())
        } else {
            Box::new(TracingReporter)
        };
        prune_with_config(entries, &config.prune, reporter.as_mut())
    };

    match &args.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            write_index_with_config(&entries, &config.writer, &mut out)?;
            out.flush()?;
            tracing::info!("Wrote {} entries to {:?}", entries.len(), path);
        }
        None => {
            let mut out = BufWriter::new(io::stdout().lock());
            write_index_with_config(&entries, &config.writer, &mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}
