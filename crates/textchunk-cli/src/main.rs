//! textchunk CLI - Split text documents into overlapping chunks.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use textchunk::{BatchChunker, Chunker, DocumentChunks, TextChunker};
use textchunk_core::TextchunkConfig;

/// textchunk - Split documents into bounded, overlapping chunks
#[derive(Parser)]
#[command(name = "textchunk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/textchunk/config.toml, then ./textchunk.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Maximum characters per chunk (overrides the config file)
    #[arg(short = 's', long, global = true)]
    chunk_size: Option<usize>,

    /// Characters carried from one chunk into the next (overrides the config file)
    #[arg(short, long, global = true)]
    overlap: Option<usize>,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chunk a single document
    Chunk {
        /// File to read (stdin if omitted)
        file: Option<PathBuf>,
    },

    /// Chunk several documents concurrently
    Batch {
        /// Files to read, in order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Keep chunks grouped per document instead of one flat list
        #[arg(short, long)]
        grouped: bool,
    },

    /// Print the effective configuration
    Config,
}

/// One document's chunks, labelled with where they came from.
#[derive(Serialize)]
struct SourceChunks<'a> {
    source: String,
    index: usize,
    chunks: &'a [String],
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = resolve_config(cli.config.as_deref(), cli.chunk_size, cli.overlap)?;
    let chunker = TextChunker::new(config.chunking.validate()?);
    let batch = BatchChunker::with_config(chunker, &config.batch)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Chunk { file } => {
            let text = read_input(file.as_deref())?;
            let chunks = chunker.chunk(&text);
            write_chunks(&mut out, &chunks, cli.json)?;
        }
        Commands::Batch { files, grouped } => {
            let mut texts = Vec::with_capacity(files.len());
            for path in &files {
                texts.push(read_input(Some(path.as_path()))?);
            }

            if grouped {
                let documents = batch.chunk_documents_concurrent(texts).await?;
                write_grouped(&mut out, &files, &documents, cli.json)?;
            } else {
                let chunks = batch.chunk_batch_concurrent(texts).await?;
                write_chunks(&mut out, &chunks, cli.json)?;
            }
        }
        Commands::Config => {
            write!(out, "{}", config.to_toml()?)?;
        }
    }

    Ok(())
}

/// Load the config file and apply command-line overrides.
fn resolve_config(
    path: Option<&Path>,
    chunk_size: Option<usize>,
    overlap: Option<usize>,
) -> textchunk::Result<TextchunkConfig> {
    let mut config = match path {
        Some(path) => TextchunkConfig::load(path)?,
        None => TextchunkConfig::load_default()?,
    };

    if let Some(chunk_size) = chunk_size {
        config.chunking.chunk_size = chunk_size;
    }
    if let Some(overlap) = overlap {
        config.chunking.overlap = overlap;
    }

    debug!(
        chunk_size = config.chunking.chunk_size,
        overlap = config.chunking.overlap,
        max_concurrency = config.batch.max_concurrency,
        "Resolved configuration"
    );
    Ok(config)
}

fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "Reading document");
            fs::read_to_string(path)
        }
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn write_chunks(out: &mut impl Write, chunks: &[String], json: bool) -> textchunk::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, chunks)?;
        writeln!(out)?;
        return Ok(());
    }

    for (i, chunk) in chunks.iter().enumerate() {
        writeln!(out, "--- chunk {} ({} chars) ---", i + 1, chunk.chars().count())?;
        writeln!(out, "{}", chunk)?;
    }
    Ok(())
}

fn write_grouped(
    out: &mut impl Write,
    files: &[PathBuf],
    documents: &[DocumentChunks],
    json: bool,
) -> textchunk::Result<()> {
    let labelled: Vec<SourceChunks<'_>> = documents
        .iter()
        .map(|doc| SourceChunks {
            source: files
                .get(doc.index)
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            index: doc.index,
            chunks: &doc.chunks,
        })
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &labelled)?;
        writeln!(out)?;
        return Ok(());
    }

    for doc in &labelled {
        writeln!(out, "=== {} ({} chunks) ===", doc.source, doc.chunks.len())?;
        write_chunks(out, doc.chunks, false)?;
    }
    Ok(())
}
