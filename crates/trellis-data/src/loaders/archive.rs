//! Compressed-file loaders. Both are placeholders in the type table.

use crate::error::{Error, Result};
use crate::loaders::Loaded;
use crate::options::LoaderOptions;
use crate::source::DataSource;
use tracing::error;

/// gzip loader. Not implemented.
pub fn load_gz(source: &DataSource, _options: &LoaderOptions) -> Result<Loaded> {
    error!(source = %source.describe(), "gzip loading is not implemented");
    Err(Error::NotImplemented("load_gz"))
}

/// tar loader. Not implemented.
pub fn load_tar(source: &DataSource, _options: &LoaderOptions) -> Result<Loaded> {
    error!(source = %source.describe(), "tar loading is not implemented");
    Err(Error::NotImplemented("load_tar"))
}
