//! Transpose drivers built on the gather engine.

use ndperm_layout::{NdPermError, Permutation, Result, Shape, TransposeIndex, TransposeIndex2d};

use crate::gather::gather_into;

fn ensure_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(NdPermError::LengthMismatch { expected, actual });
    }
    Ok(())
}

/// Transpose `src` into `dst` as described by `index`.
///
/// Both buffers must hold exactly `index.size()` elements. The identity
/// permutation is a plain copy; everything else goes through the gather engine.
pub fn transpose_nd_into<T, const N: usize>(
    dst: &mut [T],
    src: &[T],
    index: &TransposeIndex<N>,
) -> Result<()>
where
    T: Copy + Send + Sync,
{
    let size = index.source_shape().checked_size()?;
    ensure_len(size, src.len())?;
    ensure_len(size, dst.len())?;

    if index.is_identity() {
        tracing::debug!(size, "transpose_nd: identity copy");
        dst.copy_from_slice(src);
        return Ok(());
    }

    tracing::debug!(
        size,
        src = ?index.source_shape().extents(),
        perm = ?index.permutation().axes(),
        layout = ?index.layout(),
        "transpose_nd: gather"
    );
    gather_into(dst, src, index)
}

/// Allocate and return the column-major transpose of `src` together with its shape.
pub fn transpose_nd<T, const N: usize>(
    src: &[T],
    shape: &Shape<N>,
    perm: &Permutation<N>,
) -> Result<(Vec<T>, Shape<N>)>
where
    T: Copy + Send + Sync,
{
    let index = TransposeIndex::new(*shape, *perm);
    let mut dst = src.to_vec();
    transpose_nd_into(&mut dst, src, &index)?;
    Ok((dst, *index.dest_shape()))
}

/// Transpose a row-major `rows × cols` matrix through [`TransposeIndex2d`].
pub fn transpose_2d_into<T>(dst: &mut [T], src: &[T], rows: usize, cols: usize) -> Result<()>
where
    T: Copy + Send + Sync,
{
    let size = rows
        .checked_mul(cols)
        .ok_or_else(|| NdPermError::SizeOverflow(vec![rows, cols]))?;
    ensure_len(size, src.len())?;
    ensure_len(size, dst.len())?;
    tracing::debug!(rows, cols, "transpose_2d: gather");
    gather_into(dst, src, &TransposeIndex2d::new(rows, cols))
}
