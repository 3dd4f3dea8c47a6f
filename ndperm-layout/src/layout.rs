//! Mixed-radix flatten / unflatten transforms.
//!
//! Each axis is a digit whose radix is its extent and whose place value is
//! its stride. With [`Layout::ColMajor`] the place values grow with the axis
//! index; with [`Layout::RowMajor`] they shrink.

use crate::shape::{Coord, Shape};

/// Which axis varies fastest in the flat buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Axis 0 varies fastest (Fortran / Julia order). The engine's canonical layout.
    #[default]
    ColMajor,
    /// Last axis varies fastest (C order).
    RowMajor,
}

/// Column-major strides: `[1, d0, d0*d1, ...]`.
pub fn col_major_strides<const N: usize>(shape: &Shape<N>) -> [usize; N] {
    let mut strides = [1usize; N];
    for i in 1..N {
        strides[i] = strides[i - 1] * shape[i - 1];
    }
    strides
}

/// Row-major strides: `[..., d(n-2)*d(n-1), d(n-1), 1]`.
pub fn row_major_strides<const N: usize>(shape: &Shape<N>) -> [usize; N] {
    let mut strides = [1usize; N];
    for i in (0..N.saturating_sub(1)).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Linear offset of `coord` under the column-major convention.
///
/// `flatten([1, 2, 3, 4], [10, 10, 10, 10]) == 4321`.
///
/// Components outside `[0, shape[k])` are a contract violation: debug builds
/// assert, release builds return an unspecified offset.
#[inline]
pub fn flatten<const N: usize>(coord: &Coord<N>, shape: &Shape<N>) -> usize {
    flatten_in(coord, shape, Layout::ColMajor)
}

/// Coordinate stored at `offset` under the column-major convention.
///
/// Exact inverse of [`flatten`] for `offset < shape.size()`.
#[inline]
pub fn unflatten<const N: usize>(offset: usize, shape: &Shape<N>) -> Coord<N> {
    unflatten_in(offset, shape, Layout::ColMajor)
}

/// [`flatten`] with an explicit layout.
#[inline]
pub fn flatten_in<const N: usize>(coord: &Coord<N>, shape: &Shape<N>, layout: Layout) -> usize {
    debug_assert!(
        shape.contains(coord),
        "coordinate {:?} out of range for shape {:?}",
        coord.as_array(),
        shape.extents()
    );
    let strides = shape.strides(layout);
    coord
        .as_array()
        .iter()
        .zip(strides.iter())
        .map(|(&c, &s)| c * s)
        .sum()
}

/// [`unflatten`] with an explicit layout.
///
/// Digits are extracted most-significant first: highest axis first for
/// column-major, axis 0 first for row-major. Every extent must be positive.
#[inline]
pub fn unflatten_in<const N: usize>(offset: usize, shape: &Shape<N>, layout: Layout) -> Coord<N> {
    let strides = shape.strides(layout);
    let mut coord = Coord::default();
    let mut remaining = offset;
    let mut extract = |axis: usize| {
        let digit = remaining / strides[axis];
        remaining -= digit * strides[axis];
        coord[axis] = digit;
    };
    match layout {
        Layout::ColMajor => (0..N).rev().for_each(&mut extract),
        Layout::RowMajor => (0..N).for_each(&mut extract),
    }
    coord
}
