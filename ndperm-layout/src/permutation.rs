//! Axis permutations.

use crate::shape::{Coord, Shape};
use crate::{NdPermError, Result};

/// A bijection on the axes `0..N`.
///
/// `perm[k]` is the destination axis that receives the value at source axis `k`,
/// so applying it to a coordinate `c` yields `c'` with `c'[perm[k]] == c[k]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permutation<const N: usize>([usize; N]);

fn is_bijection(axes: &[usize]) -> bool {
    let mut seen = vec![false; axes.len()];
    for &a in axes {
        if a >= axes.len() || seen[a] {
            return false;
        }
        seen[a] = true;
    }
    true
}

impl<const N: usize> Permutation<N> {
    /// Validated constructor.
    pub fn new(axes: [usize; N]) -> Result<Self> {
        if !is_bijection(&axes) {
            return Err(NdPermError::InvalidPermutation(axes.to_vec()));
        }
        Ok(Self(axes))
    }

    /// Build without validating. The caller guarantees `axes` is a bijection;
    /// otherwise every derived index is unspecified. Checked only in debug builds.
    #[inline]
    pub fn new_unchecked(axes: [usize; N]) -> Self {
        debug_assert!(is_bijection(&axes), "invalid permutation {axes:?}");
        Self(axes)
    }

    /// Validated constructor from a run-time axis list.
    pub fn try_from_slice(axes: &[usize]) -> Result<Self> {
        let arr: [usize; N] = axes
            .try_into()
            .map_err(|_| NdPermError::RankMismatch(N, axes.len()))?;
        Self::new(arr)
    }

    pub fn identity() -> Self {
        Self(std::array::from_fn(|k| k))
    }

    /// Axis `k` goes to `N - 1 - k`.
    pub fn reversed() -> Self {
        Self(std::array::from_fn(|k| N - 1 - k))
    }

    #[inline]
    pub const fn axes(&self) -> &[usize; N] {
        &self.0
    }

    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(k, &a)| k == a)
    }

    /// The permutation that undoes `self`.
    pub fn inverse(&self) -> Self {
        let mut inv = [0usize; N];
        for (k, &a) in self.0.iter().enumerate() {
            inv[a] = k;
        }
        Self(inv)
    }

    /// Apply `self` first, then `next`; the result is `next ∘ self`.
    pub fn then(&self, next: &Permutation<N>) -> Self {
        Self(std::array::from_fn(|k| next.0[self.0[k]]))
    }

    /// Relabel the axes of `coord`. Values are moved, never changed.
    #[inline]
    pub fn apply(&self, coord: &Coord<N>) -> Coord<N> {
        let mut out = Coord::default();
        for (k, &dest) in self.0.iter().enumerate() {
            out[dest] = coord[k];
        }
        out
    }

    /// Destination shape: `dest[perm[k]] = src[k]`.
    pub fn apply_shape(&self, shape: &Shape<N>) -> Shape<N> {
        let mut out = [0usize; N];
        for (k, &dest) in self.0.iter().enumerate() {
            out[dest] = shape[k];
        }
        Shape::new(out)
    }

    /// The same relabeling described on reversed axes (`R ∘ self ∘ R`).
    ///
    /// Translates a permutation of a row-major array into one of the
    /// column-major array sharing its buffer.
    pub fn reverse_axes(&self) -> Self {
        Self(std::array::from_fn(|k| N - 1 - self.0[N - 1 - k]))
    }
}

impl<const N: usize> Default for Permutation<N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<const N: usize> TryFrom<[usize; N]> for Permutation<N> {
    type Error = NdPermError;

    fn try_from(axes: [usize; N]) -> Result<Self> {
        Self::new(axes)
    }
}

/// Free-function form of [`Permutation::apply`].
#[inline]
pub fn apply_permutation<const N: usize>(coord: &Coord<N>, perm: &Permutation<N>) -> Coord<N> {
    perm.apply(coord)
}
