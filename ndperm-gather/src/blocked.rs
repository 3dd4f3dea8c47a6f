//! Cache-blocked 2-D transpose of a row-major matrix.
//!
//! The destination is split into bands of [`BLOCK`] rows (one band per group
//! of source columns). Inside a band the source rows are walked in tiles of
//! `BLOCK`, so both the strided reads and the contiguous writes of a tile stay
//! within a handful of cache lines. Bands are independent and run on the
//! rayon pool for large matrices.

use ndperm_layout::{NdPermError, Result};

use crate::gather::GatherOptions;

#[cfg(feature = "parallel")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "parallel")]
use rayon::slice::ParallelSliceMut;

/// Tile side length.
pub const BLOCK: usize = 16;

/// Transpose the row-major `rows × cols` matrix `src` into the row-major
/// `cols × rows` matrix `dst`: `dst[c * rows + r] = src[r * cols + c]`.
pub fn transpose_2d_blocked_into<T>(dst: &mut [T], src: &[T], rows: usize, cols: usize) -> Result<()>
where
    T: Copy + Send + Sync,
{
    let len = rows
        .checked_mul(cols)
        .ok_or_else(|| NdPermError::SizeOverflow(vec![rows, cols]))?;
    for actual in [src.len(), dst.len()] {
        if actual != len {
            return Err(NdPermError::LengthMismatch {
                expected: len,
                actual,
            });
        }
    }
    if len == 0 {
        return Ok(());
    }
    // A single row or column reads the same either way.
    if rows == 1 || cols == 1 {
        tracing::debug!(rows, cols, "transpose_2d_blocked: vector copy");
        dst.copy_from_slice(src);
        return Ok(());
    }

    let band = BLOCK * rows;
    let parallel = GatherOptions::default().runs_parallel(len);
    tracing::debug!(rows, cols, parallel, "transpose_2d_blocked");

    #[cfg(feature = "parallel")]
    {
        if parallel {
            dst.par_chunks_mut(band)
                .enumerate()
                .for_each(|(b, out)| transpose_band(out, src, rows, cols, b * BLOCK));
            return Ok(());
        }
    }

    for (b, out) in dst.chunks_mut(band).enumerate() {
        transpose_band(out, src, rows, cols, b * BLOCK);
    }
    Ok(())
}

/// Fill destination rows `c0..c0 + out.len() / rows`.
#[inline]
fn transpose_band<T: Copy>(out: &mut [T], src: &[T], rows: usize, cols: usize, c0: usize) {
    let width = out.len() / rows;
    for r0 in (0..rows).step_by(BLOCK) {
        let r1 = (r0 + BLOCK).min(rows);
        for dc in 0..width {
            let c = c0 + dc;
            let tile_row = &mut out[dc * rows + r0..dc * rows + r1];
            for (k, o) in tile_row.iter_mut().enumerate() {
                *o = src[(r0 + k) * cols + c];
            }
        }
    }
}
