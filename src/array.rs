//! Owned column-major N-dimensional array.

use std::fmt;
use std::ops::{Index, IndexMut};

use ndperm_gather::{transpose_2d_blocked_into, transpose_nd_into};
use ndperm_layout::{flatten, Coord, NdPermError, Permutation, Result, Shape, TransposeIndex};

use crate::format::write_grid;

/// Dense array: a flat column-major buffer plus its [`Shape`].
#[derive(Debug, Clone, PartialEq)]
pub struct NdArray<T, const N: usize> {
    data: Vec<T>,
    shape: Shape<N>,
}

impl<T, const N: usize> NdArray<T, N> {
    /// Wrap an existing column-major buffer.
    pub fn from_vec(shape: Shape<N>, data: Vec<T>) -> Result<Self> {
        let size = shape.checked_size()?;
        if data.len() != size {
            return Err(NdPermError::LengthMismatch {
                expected: size,
                actual: data.len(),
            });
        }
        Ok(Self { data, shape })
    }

    /// Build an array by evaluating `f` at every coordinate.
    pub fn from_fn(shape: Shape<N>, mut f: impl FnMut(&Coord<N>) -> T) -> Self {
        let data = shape.coords().map(|c| f(&c)).collect();
        Self { data, shape }
    }

    #[inline]
    pub fn shape(&self) -> &Shape<N> {
        &self.shape
    }

    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `coord`, or `None` if any component is out of range.
    pub fn get(&self, coord: &Coord<N>) -> Option<&T> {
        if !self.shape.contains(coord) {
            return None;
        }
        self.data.get(flatten(coord, &self.shape))
    }

    pub fn get_mut(&mut self, coord: &Coord<N>) -> Option<&mut T> {
        if !self.shape.contains(coord) {
            return None;
        }
        self.data.get_mut(flatten(coord, &self.shape))
    }

    fn offset_of(&self, idx: [usize; N]) -> usize {
        let coord = Coord::new(idx);
        assert!(
            self.shape.contains(&coord),
            "index {idx:?} out of bounds for shape {:?}",
            self.shape.extents()
        );
        flatten(&coord, &self.shape)
    }
}

impl<T: Clone, const N: usize> NdArray<T, N> {
    pub fn filled(shape: Shape<N>, value: T) -> Self {
        Self {
            data: vec![value; shape.size()],
            shape,
        }
    }
}

impl<T: Clone + Default, const N: usize> NdArray<T, N> {
    pub fn zeros(shape: Shape<N>) -> Self {
        Self::filled(shape, T::default())
    }
}

impl<T: Copy + Send + Sync, const N: usize> NdArray<T, N> {
    /// New array whose axis `perm[k]` is this array's axis `k`.
    ///
    /// The identity permutation clones; a rank-2 swap uses the cache-blocked
    /// matrix kernel; everything else goes through the index-mapped gather.
    pub fn transpose(&self, perm: &Permutation<N>) -> Result<Self> {
        if perm.is_identity() {
            tracing::debug!(rank = N, "NdArray::transpose: identity");
            return Ok(self.clone());
        }

        let index = TransposeIndex::new(self.shape, *perm);
        let mut data = self.data.clone();
        if N == 2 {
            // Column-major [a, b] is the row-major b x a matrix.
            let (a, b) = (self.shape[0], self.shape[1]);
            tracing::debug!(a, b, "NdArray::transpose: blocked 2-D");
            transpose_2d_blocked_into(&mut data, &self.data, b, a)?;
        } else {
            transpose_nd_into(&mut data, &self.data, &index)?;
        }
        Ok(Self {
            data,
            shape: *index.dest_shape(),
        })
    }
}

impl<T, const N: usize> Index<[usize; N]> for NdArray<T, N> {
    type Output = T;

    fn index(&self, idx: [usize; N]) -> &T {
        let offset = self.offset_of(idx);
        &self.data[offset]
    }
}

impl<T, const N: usize> IndexMut<[usize; N]> for NdArray<T, N> {
    fn index_mut(&mut self, idx: [usize; N]) -> &mut T {
        let offset = self.offset_of(idx);
        &mut self.data[offset]
    }
}

/// Renders axis 0 as rows and axis 1 as columns.
impl<T: fmt::Display> fmt::Display for NdArray<T, 2> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.shape[0];
        write_grid(f, rows, self.shape[1], |r, c| &self.data[r + rows * c])
    }
}
