//! Chunking for in-memory row iterators.

use crate::error::{Error, Result};
use ndarray::Array2;
use tracing::debug;

/// Assemble rows into a rectangular (rows × columns) array.
///
/// Every row must have as many fields as the first. No rows gives a 0×0 array.
pub fn rows_to_array(rows: Vec<Vec<String>>) -> Result<Array2<String>> {
    let n_rows = rows.len();
    let n_cols = rows.first().map(|r| r.len()).unwrap_or(0);

    let mut flat = Vec::with_capacity(n_rows * n_cols);
    for (i, row) in rows.into_iter().enumerate() {
        if row.len() != n_cols {
            return Err(Error::Validation(format!(
                "Row {} has {} fields but expected {}",
                i,
                row.len(),
                n_cols
            )));
        }
        flat.extend(row);
    }

    Ok(Array2::from_shape_vec((n_rows, n_cols), flat)?)
}

/// Lazily groups rows into arrays of `chunk_size` rows.
///
/// The last chunk holds whatever is left and may be shorter.
#[derive(Debug)]
pub struct Chunks<I> {
    rows: I,
    chunk_size: usize,
}

/// Chunk an iterable of rows. `chunk_size` must be positive.
pub fn chunks<I>(rows: I, chunk_size: usize) -> Result<Chunks<I::IntoIter>>
where
    I: IntoIterator<Item = Vec<String>>,
{
    if chunk_size == 0 {
        return Err(Error::Validation("chunk_size must be positive".into()));
    }
    debug!(chunk_size, "chunking in-memory rows");
    Ok(Chunks {
        rows: rows.into_iter(),
        chunk_size,
    })
}

impl<I> Iterator for Chunks<I>
where
    I: Iterator<Item = Vec<String>>,
{
    type Item = Result<Array2<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rows.next()?;
        let batch: Vec<Vec<String>> = std::iter::once(first)
            .chain(self.rows.by_ref().take(self.chunk_size - 1))
            .collect();
        Some(rows_to_array(batch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_chunk_sizes() {
        let rows: Vec<_> = (0..5).map(|i| row(&[i.to_string().as_str(), "r", "x"])).collect();
        let sizes: Vec<_> = chunks(rows, 2)
            .unwrap()
            .map(|c| c.unwrap().nrows())
            .collect();
        assert_eq!(sizes, vec![2, 2, 1]);
    }

    #[test]
    fn test_default_chunk_of_one() {
        let rows = vec![row(&["a", "r", "b"]), row(&["b", "r", "c"])];
        let all: Vec<_> = chunks(rows, 1).unwrap().collect::<Result<_>>().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].dim(), (1, 3));
        assert_eq!(all[1][[0, 2]], "c");
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        assert!(matches!(
            chunks(Vec::<Vec<String>>::new(), 0),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_ragged_chunk_is_error() {
        let rows = vec![row(&["a", "r", "b"]), row(&["b", "r"])];
        let mut it = chunks(rows, 2).unwrap();
        assert!(matches!(it.next(), Some(Err(Error::Validation(_)))));
        assert!(it.next().is_none());
    }

    #[test]
    fn test_huge_chunk_size() {
        let rows = vec![row(&["a", "r", "b"])];
        let all: Vec<_> = chunks(rows, usize::MAX)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].dim(), (1, 3));
    }

    #[test]
    fn test_rows_to_array_empty() {
        assert_eq!(rows_to_array(Vec::new()).unwrap().dim(), (0, 0));
    }
}
