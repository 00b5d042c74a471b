//! Separated-values loader.
//!
//! Files are headerless: every line is a record, e.g. `subject\tpredicate\tobject`.
//! Any single-byte separator works (tab by default, comma for `.csv` exports).

use crate::error::{Error, Result};
use crate::loaders::{rows_to_array, Loaded};
use crate::options::LoaderOptions;
use ndarray::Array2;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Read a separated-values file.
///
/// Without `chunk_size` the file is read into a single (rows × columns)
/// array. With it, a lazy iterator of chunks is returned and the file is
/// read as the iterator is consumed.
pub fn load_csv(path: impl AsRef<Path>, options: &LoaderOptions) -> Result<Loaded> {
    let path = path.as_ref();
    debug!(path = %path.display(), ?options, "loading separated values");
    let file = File::open(path)?;
    read_csv(file, options)
}

/// Read separated values from any reader.
pub fn read_csv<R: Read + Send + 'static>(reader: R, options: &LoaderOptions) -> Result<Loaded> {
    let reader = reader_builder(options.sep)?.from_reader(reader);

    match options.chunk_size {
        None => {
            let mut rows = Vec::new();
            for result in reader.into_records() {
                let record = result?;
                rows.push(record.iter().map(str::to_string).collect());
            }
            let data = rows_to_array(rows)?;
            if options.verbose {
                info!(rows = data.nrows(), cols = data.ncols(), "loaded separated values");
            }
            debug!("data type: array");
            Ok(Loaded::Array(data))
        }
        Some(0) => Err(Error::Validation("chunk_size must be positive".into())),
        Some(chunk_size) => {
            debug!(chunk_size, "data type: chunk iterator");
            Ok(Loaded::Chunks(Box::new(CsvChunks {
                records: reader.into_records(),
                chunk_size,
                verbose: options.verbose,
                emitted: 0,
                failed: None,
                done: false,
            })))
        }
    }
}

fn reader_builder(sep: char) -> Result<csv::ReaderBuilder> {
    if !sep.is_ascii() {
        return Err(Error::Validation(format!(
            "Separator {:?} is not a single-byte character",
            sep
        )));
    }
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).delimiter(sep as u8);
    Ok(builder)
}

/// Lazy chunked reader over a separated-values source.
///
/// A bad record ends the stream. Rows read before it in the same chunk are
/// yielded first, then the error, then `None`.
pub struct CsvChunks<R> {
    records: csv::StringRecordsIntoIter<R>,
    chunk_size: usize,
    verbose: bool,
    emitted: usize,
    failed: Option<Error>,
    done: bool,
}

impl<R: Read> Iterator for CsvChunks<R> {
    type Item = Result<Array2<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(e) = self.failed.take() {
            self.done = true;
            return Some(Err(e));
        }
        if self.done {
            return None;
        }

        let mut rows: Vec<Vec<String>> = Vec::new();
        for result in self.records.by_ref().take(self.chunk_size) {
            match result {
                Ok(record) => rows.push(record.iter().map(str::to_string).collect()),
                Err(e) if rows.is_empty() => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
                Err(e) => {
                    self.failed = Some(e.into());
                    break;
                }
            }
        }
        if rows.is_empty() {
            return None;
        }

        self.emitted += 1;
        if self.verbose {
            info!(chunk = self.emitted, rows = rows.len(), "read chunk");
        }
        Some(rows_to_array(rows))
    }
}
