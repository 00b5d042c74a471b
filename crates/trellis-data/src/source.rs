//! Source descriptors and the type tags they resolve to.

use std::any::Any;
use std::fmt;
use std::path::{Path, PathBuf};

/// Something triples can be read from.
///
/// Paths are classified by extension. Row iterators are accepted as-is and
/// chunked into arrays. Anything else is `Opaque` and has no loader.
pub enum DataSource {
    /// A file name or path.
    Path(String),
    /// In-memory rows, one `Vec<String>` per triple (or per record).
    Rows(Box<dyn Iterator<Item = Vec<String>> + Send>),
    /// An object that cannot be iterated as rows.
    Opaque(Box<dyn Any + Send>),
}

impl DataSource {
    /// Wrap any iterable of rows.
    ///
    /// ```rust,ignore
    /// let source = DataSource::rows(vec![
    ///     vec!["Einstein", "won", "NobelPrize"],
    ///     vec!["Paris", "capitalOf", "France"],
    /// ]);
    /// ```
    pub fn rows<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        I::IntoIter: Send + 'static,
        R: IntoIterator<Item = S> + 'static,
        S: Into<String> + 'static,
    {
        Self::Rows(Box::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect::<Vec<String>>()),
        ))
    }

    /// Wrap a value that is not row-iterable.
    pub fn opaque<T: Any + Send>(value: T) -> Self {
        Self::Opaque(Box::new(value))
    }

    /// Short description for log lines and error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Path(p) => format!("path '{}'", p),
            Self::Rows(_) => "row iterator".to_string(),
            Self::Opaque(_) => "opaque object".to_string(),
        }
    }
}

impl fmt::Debug for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(p) => f.debug_tuple("Path").field(p).finish(),
            Self::Rows(_) => f.write_str("Rows(..)"),
            Self::Opaque(_) => f.write_str("Opaque(..)"),
        }
    }
}

impl From<&str> for DataSource {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for DataSource {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for DataSource {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_string_lossy().into_owned())
    }
}

impl From<PathBuf> for DataSource {
    fn from(path: PathBuf) -> Self {
        Self::from(path.as_path())
    }
}

/// Type tag of an identified source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceType {
    /// Comma/tab separated values.
    Csv,
    /// Plain text, read as separated values.
    Txt,
    /// gzip-compressed file.
    Gz,
    /// tar archive.
    Tar,
    /// In-memory iterable.
    Iter,
}

impl SourceType {
    /// The tag as written in file extensions and the loader table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Txt => "txt",
            Self::Gz => "gz",
            Self::Tar => "tar",
            Self::Iter => "iter",
        }
    }

    /// Look up a tag by its exact name. Matching is case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        crate::loaders::SUPPORTED_TYPES
            .iter()
            .map(|(ty, _)| *ty)
            .find(|ty| ty.as_str() == tag)
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip_through_table() {
        for ty in [
            SourceType::Csv,
            SourceType::Txt,
            SourceType::Gz,
            SourceType::Tar,
            SourceType::Iter,
        ] {
            assert_eq!(SourceType::from_tag(ty.as_str()), Some(ty));
        }
        assert_eq!(SourceType::from_tag("CSV"), None);
        assert_eq!(SourceType::from_tag("parquet"), None);
    }

    #[test]
    fn test_rows_converts_items() {
        let source = DataSource::rows(vec![vec!["a", "r", "b"]]);
        match source {
            DataSource::Rows(mut rows) => {
                assert_eq!(rows.next(), Some(vec!["a".to_string(), "r".into(), "b".into()]));
                assert_eq!(rows.next(), None);
            }
            other => panic!("expected rows, got {:?}", other),
        }
    }
}
