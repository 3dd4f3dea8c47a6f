//! Plain-text rendering of matrices for debugging.

use std::fmt;

use ndperm_layout::{NdPermError, Result};

/// Field width of one rendered element.
const CELL_WIDTH: usize = 8;

/// Write `rows` lines of `cols` right-aligned cells, each followed by a space.
pub(crate) fn write_grid<'a, T, F>(
    f: &mut fmt::Formatter<'_>,
    rows: usize,
    cols: usize,
    at: F,
) -> fmt::Result
where
    T: fmt::Display + 'a,
    F: Fn(usize, usize) -> &'a T,
{
    for r in 0..rows {
        for c in 0..cols {
            write!(f, "{:>width$} ", at(r, c), width = CELL_WIDTH)?;
        }
        writeln!(f)?;
    }
    Ok(())
}

/// Display adapter for a row-major `rows × cols` buffer.
#[derive(Debug, Clone, Copy)]
pub struct Matrix2d<'a, T> {
    rows: usize,
    cols: usize,
    data: &'a [T],
}

impl<'a, T> Matrix2d<'a, T> {
    /// # Errors
    /// [`NdPermError::LengthMismatch`] if `data` holds fewer than `rows * cols`
    /// elements, [`NdPermError::SizeOverflow`] if that product overflows.
    pub fn new(rows: usize, cols: usize, data: &'a [T]) -> Result<Self> {
        let len = rows
            .checked_mul(cols)
            .ok_or_else(|| NdPermError::SizeOverflow(vec![rows, cols]))?;
        if data.len() < len {
            return Err(NdPermError::LengthMismatch {
                expected: len,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }
}

impl<T: fmt::Display> fmt::Display for Matrix2d<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.cols;
        write_grid(f, self.rows, cols, |r, c| &self.data[r * cols + c])
    }
}

/// Render a row-major `rows × cols` buffer, one line per row.
pub fn format_2d<T: fmt::Display>(rows: usize, cols: usize, data: &[T]) -> Result<String> {
    Ok(Matrix2d::new(rows, cols, data)?.to_string())
}
