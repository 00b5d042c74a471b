//! Loading triples from files and in-memory sources.
//!
//! Knowledge graph datasets usually ship as headerless separated-values files,
//! one `(subject, predicate, object)` triple per line. This crate recognizes
//! what a source is and picks a loader for it:
//!
//! ```text
//! "train.csv"  -> csv  -> load_csv
//! "train.txt"  -> txt  -> load_csv
//! "train.gz"   -> gz   -> load_gz   (not implemented)
//! "train.tar"  -> tar  -> load_tar  (not implemented)
//! rows         -> iter -> chunks
//! ```
//!
//! Loaders return the data as an `ndarray::Array2<String>`, or as a lazy
//! iterator of such arrays when a chunk size is given.
//!
//! # Example
//!
//! ```rust,ignore
//! use trellis_data::{DataSourceIdentifier, LoaderOptions};
//!
//! let options = LoaderOptions::default().with_chunk_size(10_000);
//! let loaded = DataSourceIdentifier::new("fb15k/train.txt").load(&options)?;
//! ```

mod error;
mod identifier;
pub mod loaders;
mod options;
mod source;

pub use error::{Error, Result};
pub use identifier::{identify, DataSourceIdentifier};
pub use loaders::{Loaded, Loader, SUPPORTED_TYPES};
pub use options::LoaderOptions;
pub use source::{DataSource, SourceType};
