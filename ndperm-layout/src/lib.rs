//! Coordinate / linear-offset index math for dense N-dimensional buffers.
//!
//! A dense array is a flat contiguous buffer plus a [`Shape`]. This crate maps
//! between a [`Coord`] and the linear offset that stores it, and composes
//! those maps with an axis [`Permutation`] into a [`TransposeIndex`]: a pure
//! function from a destination offset to the source offset it must copy from.
//!
//! Everything here is allocation-free and reentrant, so an index functor can
//! be evaluated for every output position independently and in any order.
//!
//! # Layout
//!
//! The canonical convention is [`Layout::ColMajor`]: axis 0 varies fastest,
//! `stride[i] = shape[0] * ... * shape[i - 1]`.
//!
//! ```rust
//! use ndperm_layout::{flatten, unflatten, Coord, Shape};
//!
//! let shape = Shape::new([10, 10, 10, 10]);
//! let coord = Coord::new([1, 2, 3, 4]);
//! assert_eq!(flatten(&coord, &shape), 4321);
//! assert_eq!(unflatten(4321, &shape), coord);
//! ```
//!
//! # Rank
//!
//! Rank is a const generic, so a `Shape<3>` cannot be combined with a
//! `Permutation<4>`. Run-time descriptions go through the `try_from_slice`
//! constructors, which reject a rank mismatch before any transform runs.

pub mod layout;
pub mod permutation;
pub mod shape;
pub mod transpose_index;

pub use layout::{
    col_major_strides, flatten, flatten_in, row_major_strides, unflatten, unflatten_in, Layout,
};
pub use permutation::{apply_permutation, Permutation};
pub use shape::{Coord, Coords, Shape};
pub use transpose_index::{IndexMap, TransposeIndex, TransposeIndex2d};

/// Errors reported by constructors and buffer drivers.
///
/// Index evaluation itself never fails; these only surface where a caller's
/// run-time description is turned into typed values, or where a buffer is
/// paired with a shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NdPermError {
    /// Ranks do not match.
    #[error("rank mismatch: {0} vs {1}")]
    RankMismatch(usize, usize),

    /// Shapes are incompatible for the operation.
    #[error("shape mismatch: {0:?} vs {1:?}")]
    ShapeMismatch(Vec<usize>, Vec<usize>),

    /// Axis ordering is not a bijection on `0..rank`.
    #[error("invalid permutation {0:?}")]
    InvalidPermutation(Vec<usize>),

    /// Product of extents does not fit in `usize`.
    #[error("size overflow for shape {0:?}")]
    SizeOverflow(Vec<usize>),

    /// Buffer length disagrees with the shape or with the other buffer.
    #[error("buffer length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Result type for layout and transpose operations.
pub type Result<T> = std::result::Result<T, NdPermError>;
