//! Index functors driving a gather-style transpose.
//!
//! A functor maps each destination linear index to the source linear index
//! it copies from, so `dst[i] = src[f.source_index(i)]` for every `i`
//! produces the transposed buffer. Evaluations share no mutable state and can
//! run in any order on any number of workers.

use crate::layout::{flatten_in, unflatten_in, Layout};
use crate::permutation::Permutation;
use crate::shape::Shape;
use crate::{NdPermError, Result};

/// A destination-to-source index map consumed by a gather engine.
pub trait IndexMap: Sync {
    /// Source linear index feeding destination linear index `dest`.
    fn source_index(&self, dest: usize) -> usize;
}

impl<F> IndexMap for F
where
    F: Fn(usize) -> usize + Sync,
{
    #[inline]
    fn source_index(&self, dest: usize) -> usize {
        self(dest)
    }
}

/// N-dimensional transpose as a composition of unflatten, permute and flatten.
///
/// Source and destination buffers share one [`Layout`] (column-major unless
/// built with [`TransposeIndex::with_layout`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransposeIndex<const N: usize> {
    src: Shape<N>,
    dst: Shape<N>,
    perm: Permutation<N>,
    inv: Permutation<N>,
    layout: Layout,
}

impl<const N: usize> TransposeIndex<N> {
    /// Column-major transpose of `src` by `perm`; the destination shape is derived.
    pub fn new(src: Shape<N>, perm: Permutation<N>) -> Self {
        Self::with_layout(src, perm, Layout::ColMajor)
    }

    /// Like [`new`](Self::new) with an explicitly supplied destination shape,
    /// which must satisfy `dst[perm[k]] == src[k]`.
    pub fn with_dest(src: Shape<N>, dst: Shape<N>, perm: Permutation<N>) -> Result<Self> {
        let expected = perm.apply_shape(&src);
        if expected != dst {
            return Err(NdPermError::ShapeMismatch(
                expected.extents().to_vec(),
                dst.extents().to_vec(),
            ));
        }
        Ok(Self::new(src, perm))
    }

    /// Transpose of a buffer stored with `layout`. Shapes and axes are given in
    /// the caller's own axis numbering.
    ///
    /// `RowMajor` uses row-major strides directly. This is the column-major
    /// map on `src.reversed()` and `perm.reverse_axes()`.
    pub fn with_layout(src: Shape<N>, perm: Permutation<N>, layout: Layout) -> Self {
        Self {
            src,
            dst: perm.apply_shape(&src),
            perm,
            inv: perm.inverse(),
            layout,
        }
    }

    #[inline]
    pub fn source_shape(&self) -> &Shape<N> {
        &self.src
    }

    #[inline]
    pub fn dest_shape(&self) -> &Shape<N> {
        &self.dst
    }

    #[inline]
    pub fn permutation(&self) -> &Permutation<N> {
        &self.perm
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Number of elements in either buffer.
    #[inline]
    pub fn size(&self) -> usize {
        self.src.size()
    }

    /// Rank 0, rank 1 and the identity permutation all map every index to itself.
    pub fn is_identity(&self) -> bool {
        self.perm.is_identity()
    }

    /// Functor of the reverse transpose (destination back to source).
    pub fn inverse(&self) -> Self {
        Self::with_layout(self.dst, self.inv, self.layout)
    }

    /// Gather map: source offset of the element written to destination offset `dest`.
    #[inline]
    pub fn source_index(&self, dest: usize) -> usize {
        let d = unflatten_in(dest, &self.dst, self.layout);
        flatten_in(&self.inv.apply(&d), &self.src, self.layout)
    }

    /// Scatter map: destination offset the source element at `src` lands on.
    ///
    /// Computed as `flatten(permute(unflatten(src, src_shape)), dst_shape)`;
    /// inverse bijection of [`source_index`](Self::source_index).
    #[inline]
    pub fn dest_index(&self, src: usize) -> usize {
        let s = unflatten_in(src, &self.src, self.layout);
        flatten_in(&self.perm.apply(&s), &self.dst, self.layout)
    }
}

impl<const N: usize> IndexMap for TransposeIndex<N> {
    #[inline]
    fn source_index(&self, dest: usize) -> usize {
        TransposeIndex::source_index(self, dest)
    }
}

/// Closed-form transpose of a row-major `rows × cols` matrix.
///
/// Unlike [`TransposeIndex`], both buffers are row-major (last axis fastest).
/// The destination is the row-major `cols × rows` matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransposeIndex2d {
    rows: usize,
    cols: usize,
}

impl TransposeIndex2d {
    /// `rows` and `cols` describe the source matrix.
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub const fn size(&self) -> usize {
        self.rows * self.cols
    }

    /// `(rows, cols)` of the destination matrix.
    #[inline]
    pub const fn dest_dims(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Destination element `(c, r)` sits at `c * rows + r` and reads source `r * cols + c`.
    #[inline]
    pub const fn source_index(&self, dest: usize) -> usize {
        self.cols * (dest % self.rows) + dest / self.rows
    }

    /// Functor transposing the destination back into the source.
    #[inline]
    pub const fn inverse(&self) -> Self {
        Self::new(self.cols, self.rows)
    }

    /// The same map on the column-major engine.
    ///
    /// A row-major `rows × cols` buffer is the column-major `[cols, rows]`
    /// buffer, so transposing it is swapping those two axes.
    pub fn as_nd(&self) -> TransposeIndex<2> {
        TransposeIndex::new(
            Shape::new([self.cols, self.rows]),
            Permutation::new_unchecked([1, 0]),
        )
    }
}

impl IndexMap for TransposeIndex2d {
    #[inline]
    fn source_index(&self, dest: usize) -> usize {
        TransposeIndex2d::source_index(self, dest)
    }
}
