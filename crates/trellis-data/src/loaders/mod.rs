//! Loaders and the static type → loader table.
//!
//! | Tag | Loader | Status |
//! |-----|--------|--------|
//! | `csv` | [`Loader::Csv`] | Working |
//! | `txt` | [`Loader::Csv`] | Working |
//! | `gz` | [`Loader::Gz`] | Not implemented |
//! | `tar` | [`Loader::Tar`] | Not implemented |
//! | `iter` | [`Loader::Chunks`] | Working |
//!
//! To support a new type, add a [`SourceType`] variant and a row here.

mod archive;
mod chunks;
mod csv;

pub use self::archive::{load_gz, load_tar};
pub use self::chunks::{chunks, rows_to_array, Chunks};
pub use self::csv::{load_csv, read_csv, CsvChunks};

use crate::error::{Error, Result};
use crate::options::LoaderOptions;
use crate::source::{DataSource, SourceType};
use ndarray::{Array2, Axis};
use std::fmt;

/// Supported source types and the loader bound to each.
pub const SUPPORTED_TYPES: &[(SourceType, Loader)] = &[
    (SourceType::Csv, Loader::Csv),
    (SourceType::Txt, Loader::Csv),
    (SourceType::Gz, Loader::Gz),
    (SourceType::Tar, Loader::Tar),
    (SourceType::Iter, Loader::Chunks),
];

/// Comma-joined list of supported tags, for log lines.
pub fn supported_tags() -> String {
    SUPPORTED_TYPES
        .iter()
        .map(|(ty, _)| ty.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Look up the loader bound to a type tag.
pub fn loader_for(ty: SourceType) -> Option<Loader> {
    SUPPORTED_TYPES
        .iter()
        .find(|(t, _)| *t == ty)
        .map(|(_, loader)| *loader)
}

/// A loading routine from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loader {
    /// Separated-values reader ([`load_csv`]).
    Csv,
    /// gzip reader ([`load_gz`]).
    Gz,
    /// tar reader ([`load_tar`]).
    Tar,
    /// Groups an in-memory iterator into arrays ([`chunks`]).
    Chunks,
}

impl Loader {
    /// Name of the routine.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Csv => "load_csv",
            Self::Gz => "load_gz",
            Self::Tar => "load_tar",
            Self::Chunks => "chunks",
        }
    }

    /// Run the loader on a source.
    pub fn load(&self, source: DataSource, options: &LoaderOptions) -> Result<Loaded> {
        match (self, source) {
            (Self::Csv, DataSource::Path(path)) => load_csv(path, options),
            (Self::Gz, source) => load_gz(&source, options),
            (Self::Tar, source) => load_tar(&source, options),
            (Self::Chunks, DataSource::Rows(rows)) => {
                let size = options.chunk_size.unwrap_or(1);
                Ok(Loaded::Chunks(Box::new(chunks(rows, size)?)))
            }
            (loader, source) => Err(Error::SourceMismatch(format!(
                "{} cannot read {}",
                loader.name(),
                source.describe()
            ))),
        }
    }
}

/// Output of a loader.
pub enum Loaded {
    /// Entire source as a (rows × columns) array.
    Array(Array2<String>),
    /// Lazy chunks of at most `chunk_size` rows each.
    Chunks(Box<dyn Iterator<Item = Result<Array2<String>>> + Send>),
}

impl Loaded {
    /// Whether rows are produced lazily.
    pub fn is_lazy(&self) -> bool {
        matches!(self, Self::Chunks(_))
    }

    /// Drain into a single array, stacking chunks row-wise.
    pub fn into_array(self) -> Result<Array2<String>> {
        match self {
            Self::Array(a) => Ok(a),
            Self::Chunks(iter) => {
                let parts = iter.collect::<Result<Vec<_>>>()?;
                if parts.is_empty() {
                    return Ok(Array2::from_shape_vec((0, 0), Vec::new())?);
                }
                let views: Vec<_> = parts.iter().map(|p| p.view()).collect();
                Ok(ndarray::concatenate(Axis(0), &views)?)
            }
        }
    }
}

impl fmt::Debug for Loaded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Array(a) => f.debug_tuple("Array").field(&a.dim()).finish(),
            Self::Chunks(_) => f.write_str("Chunks(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_bindings() {
        assert_eq!(loader_for(SourceType::Csv), Some(Loader::Csv));
        assert_eq!(loader_for(SourceType::Txt), Some(Loader::Csv));
        assert_eq!(loader_for(SourceType::Gz), Some(Loader::Gz));
        assert_eq!(loader_for(SourceType::Tar), Some(Loader::Tar));
        assert_eq!(loader_for(SourceType::Iter), Some(Loader::Chunks));
        assert_eq!(supported_tags(), "csv, txt, gz, tar, iter");
    }

    #[test]
    fn test_csv_loader_rejects_rows() {
        let source = DataSource::rows(vec![vec!["a", "r", "b"]]);
        let err = Loader::Csv.load(source, &LoaderOptions::default()).unwrap_err();
        assert!(matches!(err, Error::SourceMismatch(_)));
    }

    #[test]
    fn test_chunks_into_array() {
        let source = DataSource::rows(vec![
            vec!["a", "r", "b"],
            vec!["b", "r", "c"],
            vec!["c", "r", "d"],
        ]);
        let options = LoaderOptions::default().with_chunk_size(2);
        let loaded = Loader::Chunks.load(source, &options).unwrap();
        assert!(loaded.is_lazy());

        let all = loaded.into_array().unwrap();
        assert_eq!(all.dim(), (3, 3));
        assert_eq!(all[[2, 0]], "c");
    }

    #[test]
    fn test_empty_chunks_into_array() {
        let source = DataSource::rows(Vec::<Vec<String>>::new());
        let loaded = Loader::Chunks.load(source, &LoaderOptions::default()).unwrap();
        assert_eq!(loaded.into_array().unwrap().dim(), (0, 0));
    }
}
