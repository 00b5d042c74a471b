//! Data source identification.
//!
//! [`DataSourceIdentifier`] looks at a descriptor once, at construction, and
//! records its type tag. Identification never fails: anything it cannot
//! classify gets no tag, and the failure surfaces when a loader is requested.
//!
//! # Example
//!
//! ```rust,ignore
//! use trellis_data::{DataSourceIdentifier, LoaderOptions};
//!
//! let identifier = DataSourceIdentifier::new("data.csv");
//! let loader = identifier.fetch_loader()?;
//! let triples = loader.load("data.csv".into(), &LoaderOptions::default())?;
//! ```

use crate::error::{Error, Result};
use crate::loaders::{loader_for, supported_tags, Loaded, Loader};
use crate::options::LoaderOptions;
use crate::source::{DataSource, SourceType};
use tracing::{debug, error};

/// Recognizes the type of a data source and hands out the matching loader.
#[derive(Debug)]
pub struct DataSourceIdentifier {
    source: DataSource,
    src: Option<SourceType>,
}

impl DataSourceIdentifier {
    /// Identify a source.
    pub fn new(source: impl Into<DataSource>) -> Self {
        let source = source.into();
        let src = identify(&source);
        Self { source, src }
    }

    /// The identified type tag, or `None` if unsupported.
    pub fn get_src(&self) -> Option<SourceType> {
        self.src
    }

    /// The descriptor this identifier was built from.
    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Loader bound to the identified type.
    pub fn fetch_loader(&self) -> Result<Loader> {
        debug!("returning loader for data source");
        self.src
            .and_then(loader_for)
            .ok_or_else(|| Error::UnsupportedSource(self.source.describe()))
    }

    /// Fetch the loader and run it on the identified source.
    pub fn load(self, options: &LoaderOptions) -> Result<Loaded> {
        let loader = self.fetch_loader()?;
        loader.load(self.source, options)
    }
}

/// Type tag of a descriptor.
///
/// Paths use the text after the last `.`; a name without a `.` has no tag.
pub fn identify(source: &DataSource) -> Option<SourceType> {
    match source {
        DataSource::Path(path) => {
            let (_, ext) = path.rsplit_once('.')?;
            let ty = SourceType::from_tag(ext);
            if ty.is_none() {
                debug!(
                    extension = ext,
                    "File type not supported! Supported types: {}",
                    supported_tags()
                );
            }
            ty
        }
        DataSource::Rows(_) => {
            debug!("data source is an iterable");
            Some(SourceType::Iter)
        }
        DataSource::Opaque(_) => {
            error!("Object type not supported");
            None
        }
    }
}
