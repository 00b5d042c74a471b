/// Options passed to every loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Rows per chunk. `None` materializes the whole source (default: None).
    pub chunk_size: Option<usize>,
    /// Field separator (default: tab).
    pub sep: char,
    /// Log row and chunk counts at info level (default: false).
    pub verbose: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            chunk_size: None,
            sep: '\t',
            verbose: false,
        }
    }
}

impl LoaderOptions {
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = Some(chunk_size);
        self
    }

    pub fn with_sep(mut self, sep: char) -> Self {
        self.sep = sep;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
