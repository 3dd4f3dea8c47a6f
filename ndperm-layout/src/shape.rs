//! Fixed-rank extents and points.

use std::ops::{Index, IndexMut};

use crate::layout::{col_major_strides, row_major_strides, Layout};
use crate::{NdPermError, Result};

/// Per-axis extents of a dense array. `shape[k]` is the extent of axis `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape<const N: usize>([usize; N]);

impl<const N: usize> Shape<N> {
    /// Build a shape from its extents. No validation is performed.
    #[inline]
    pub const fn new(extents: [usize; N]) -> Self {
        Self(extents)
    }

    /// Build a shape from a run-time extent list.
    ///
    /// Fails with [`NdPermError::RankMismatch`] when `extents.len() != N`.
    pub fn try_from_slice(extents: &[usize]) -> Result<Self> {
        let arr: [usize; N] = extents
            .try_into()
            .map_err(|_| NdPermError::RankMismatch(N, extents.len()))?;
        Ok(Self(arr))
    }

    #[inline]
    pub const fn rank(&self) -> usize {
        N
    }

    #[inline]
    pub const fn extents(&self) -> &[usize; N] {
        &self.0
    }

    #[inline]
    pub fn extent(&self, axis: usize) -> usize {
        self.0[axis]
    }

    /// Number of elements (the empty product is 1, so a rank-0 shape holds one element).
    #[inline]
    pub fn size(&self) -> usize {
        self.0.iter().product()
    }

    /// Like [`size`](Self::size) but reports overflow instead of wrapping.
    pub fn checked_size(&self) -> Result<usize> {
        self.0
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| NdPermError::SizeOverflow(self.0.to_vec()))
    }

    /// Place values of every axis under `layout`.
    #[inline]
    pub fn strides(&self, layout: Layout) -> [usize; N] {
        match layout {
            Layout::ColMajor => col_major_strides(self),
            Layout::RowMajor => row_major_strides(self),
        }
    }

    /// Whether every component of `coord` lies in `[0, shape[k])`.
    #[inline]
    pub fn contains(&self, coord: &Coord<N>) -> bool {
        coord.0.iter().zip(self.0.iter()).all(|(&c, &d)| c < d)
    }

    /// Same extents in reverse axis order.
    ///
    /// A row-major buffer of shape `s` is the column-major buffer of `s.reversed()`.
    pub fn reversed(&self) -> Self {
        let mut out = self.0;
        out.reverse();
        Self(out)
    }

    /// Every valid coordinate, in column-major offset order.
    pub fn coords(&self) -> Coords<N> {
        Coords {
            shape: *self,
            next: (self.size() > 0).then(|| Coord([0; N])),
        }
    }
}

impl<const N: usize> From<[usize; N]> for Shape<N> {
    fn from(extents: [usize; N]) -> Self {
        Self(extents)
    }
}

impl<const N: usize> Index<usize> for Shape<N> {
    type Output = usize;

    #[inline]
    fn index(&self, axis: usize) -> &usize {
        &self.0[axis]
    }
}

/// A point in an N-dimensional array, one index per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord<const N: usize>([usize; N]);

impl<const N: usize> Coord<N> {
    #[inline]
    pub const fn new(indices: [usize; N]) -> Self {
        Self(indices)
    }

    /// Build a coordinate from a run-time index list.
    pub fn try_from_slice(indices: &[usize]) -> Result<Self> {
        let arr: [usize; N] = indices
            .try_into()
            .map_err(|_| NdPermError::RankMismatch(N, indices.len()))?;
        Ok(Self(arr))
    }

    #[inline]
    pub const fn as_array(&self) -> &[usize; N] {
        &self.0
    }

    #[inline]
    pub fn into_array(self) -> [usize; N] {
        self.0
    }
}

impl<const N: usize> Default for Coord<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> From<[usize; N]> for Coord<N> {
    fn from(indices: [usize; N]) -> Self {
        Self(indices)
    }
}

impl<const N: usize> Index<usize> for Coord<N> {
    type Output = usize;

    #[inline]
    fn index(&self, axis: usize) -> &usize {
        &self.0[axis]
    }
}

impl<const N: usize> IndexMut<usize> for Coord<N> {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut usize {
        &mut self.0[axis]
    }
}

/// Odometer over the coordinates of a [`Shape`], axis 0 fastest.
#[derive(Debug, Clone)]
pub struct Coords<const N: usize> {
    shape: Shape<N>,
    next: Option<Coord<N>>,
}

impl<const N: usize> Iterator for Coords<N> {
    type Item = Coord<N>;

    fn next(&mut self) -> Option<Coord<N>> {
        let current = self.next?;
        let mut succ = current;
        let mut carried_out = true;
        for axis in 0..N {
            succ.0[axis] += 1;
            if succ.0[axis] < self.shape.0[axis] {
                carried_out = false;
                break;
            }
            succ.0[axis] = 0;
        }
        self.next = (!carried_out).then_some(succ);
        Some(current)
    }
}
