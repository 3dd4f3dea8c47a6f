//! Arbitrary-axis transpose of dense N-dimensional arrays stored as flat buffers.
//!
//! The crate is a facade over two layers:
//!
//! - [`ndperm_layout`]: the coordinate / linear-offset transforms, axis
//!   [`Permutation`]s and the [`TransposeIndex`] functor mapping each
//!   destination offset to the source offset it copies from
//! - [`ndperm_gather`]: the engine applying such a functor over a whole
//!   buffer (serially or on the rayon pool), plus a cache-blocked 2-D path
//!
//! and adds [`NdArray`], an owned column-major container.
//!
//! # Example
//!
//! ```rust
//! use ndperm::{NdArray, Permutation, Shape};
//!
//! // 2 x 3 x 4 array whose elements record their own coordinate.
//! let a = NdArray::from_fn(Shape::new([2, 3, 4]), |c| (c[0], c[1], c[2]));
//!
//! // Axis 0 -> 2, 1 -> 0, 2 -> 1.
//! let t = a.transpose(&Permutation::new([2, 0, 1]).unwrap()).unwrap();
//! assert_eq!(t.shape(), &Shape::new([3, 4, 2]));
//! assert_eq!(t[[2, 3, 1]], (1, 2, 3));
//! ```
//!
//! # Layout
//!
//! Buffers are column-major (axis 0 fastest) throughout, except for the
//! row-major 2-D helpers [`TransposeIndex2d`], [`transpose_2d_into`] and
//! [`transpose_2d_blocked_into`]. [`TransposeIndex::with_layout`] adapts the
//! generic engine to row-major buffers.

pub mod array;
pub mod format;

pub use array::NdArray;
pub use format::{format_2d, Matrix2d};

pub use ndperm_gather::{
    gather_into, gather_into_with, transpose_2d_blocked_into, transpose_2d_into, transpose_nd,
    transpose_nd_into, GatherOptions,
};
pub use ndperm_layout::{
    apply_permutation, col_major_strides, flatten, flatten_in, row_major_strides, unflatten,
    unflatten_in, Coord, IndexMap, Layout, NdPermError, Permutation, Result, Shape,
    TransposeIndex, TransposeIndex2d,
};
