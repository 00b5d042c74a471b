//! Trellis CLI - triple loading and scoring from the command line.
//!
//! # Usage
//!
//! ```bash
//! # What kind of source is this?
//! trellis identify train.txt
//!
//! # Load and summarize (tab separated by default)
//! trellis load train.csv --sep , --chunk-size 10000
//!
//! # Score embedded triples: each row is s | p | o, 3k floats
//! trellis score embedded.txt --layer TransE --norm l1
//!
//! # Registered scoring layers
//! trellis layers
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ndarray::Array2;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use trellis_data::{DataSourceIdentifier, Loaded, LoaderOptions};
use trellis_kge::{build_from_config, registered_layers, LayerConfig, Norm, TripleBatch};

#[derive(Parser)]
#[command(name = "trellis")]
#[command(about = "Knowledge graph triple loading and scoring", long_about = None)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the type tag of a data source
    Identify {
        /// File name or path
        source: String,
    },

    /// Load a data source and report its shape
    Load {
        /// File name or path
        source: String,

        /// Field separator
        #[arg(long, default_value = "\t")]
        sep: char,

        /// Rows per chunk (reads lazily)
        #[arg(long)]
        chunk_size: Option<usize>,
    },

    /// Score embedded triples with a registered layer
    Score {
        /// Separated file, one triple per row as s | p | o
        input: PathBuf,

        /// Scoring layer name
        #[arg(short, long, default_value = "TransE")]
        layer: String,

        /// Distance norm for layers that take one
        #[arg(long)]
        norm: Option<NormArg>,

        /// Field separator
        #[arg(long, default_value = "\t")]
        sep: char,
    },

    /// List registered scoring layers
    Layers,
}

#[derive(Clone, Copy, ValueEnum)]
enum NormArg {
    L1,
    L2,
}

impl From<NormArg> for Norm {
    fn from(n: NormArg) -> Self {
        match n {
            NormArg::L1 => Norm::L1,
            NormArg::L2 => Norm::L2,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Identify { source } => {
            let identifier = DataSourceIdentifier::new(source.as_str());
            match identifier.get_src() {
                Some(ty) => println!("{}", ty),
                None => println!("unknown"),
            }
        }

        Commands::Load {
            source,
            sep,
            chunk_size,
        } => {
            let mut options = LoaderOptions::default()
                .with_sep(sep)
                .with_verbose(cli.verbose);
            options.chunk_size = chunk_size;

            let loaded = DataSourceIdentifier::new(source.as_str())
                .load(&options)
                .with_context(|| format!("Failed to load {}", source))?;

            match loaded {
                Loaded::Array(data) => {
                    println!("Rows:    {}", data.nrows());
                    println!("Columns: {}", data.ncols());
                }
                Loaded::Chunks(chunks) => {
                    let mut n_chunks = 0;
                    let mut n_rows = 0;
                    for chunk in chunks {
                        let chunk = chunk.context("Failed to read chunk")?;
                        n_chunks += 1;
                        n_rows += chunk.nrows();
                    }
                    println!("Chunks:  {}", n_chunks);
                    println!("Rows:    {}", n_rows);
                }
            }
        }

        Commands::Score {
            input,
            layer,
            norm,
            sep,
        } => {
            let options = LoaderOptions::default().with_sep(sep);
            let rows = DataSourceIdentifier::new(input.clone())
                .load(&options)
                .and_then(Loaded::into_array)
                .with_context(|| format!("Failed to load {}", input.display()))?;

            let values = parse_floats(&rows)?;
            let batch = TripleBatch::from_concatenated(values.view())
                .context("Rows must hold subject, predicate and object embeddings")?;

            let mut config = LayerConfig::new(layer, batch.k());
            config.norm = norm.map(Norm::from);
            debug!(?config, triples = batch.len(), "scoring");

            let layer = build_from_config(&config)?;
            for score in layer.compute_scores(&batch)?.iter() {
                println!("{}", score);
            }
        }

        Commands::Layers => {
            for name in registered_layers() {
                println!("{}", name);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_floats(rows: &Array2<String>) -> Result<Array2<f32>> {
    if rows.is_empty() {
        bail!("No triples to score");
    }
    let mut values = Array2::zeros(rows.dim());
    for ((i, j), field) in rows.indexed_iter() {
        values[[i, j]] = field
            .trim()
            .parse::<f32>()
            .with_context(|| format!("Row {}, column {}: '{}' is not a number", i + 1, j + 1, field))?;
    }
    Ok(values)
}
