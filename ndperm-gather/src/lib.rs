//! Gather-based transpose over flat buffers.
//!
//! This crate is the execution side of `ndperm-layout`: it drives an
//! [`IndexMap`](ndperm_layout::IndexMap) over every destination position,
//! serially or on the rayon pool, and offers a cache-blocked 2-D transpose
//! for the common matrix case.
//!
//! # Dependency graph
//!
//! ```text
//! ndperm-layout -> ndperm-gather -> ndperm
//! ```
//!
//! # Features
//!
//! - `parallel` (default): split large gathers across rayon workers.

pub mod blocked;
pub mod gather;
pub mod transpose;

pub use blocked::{transpose_2d_blocked_into, BLOCK};
pub use gather::{gather_into, gather_into_with, GatherOptions, CHUNK_LEN, MIN_PARALLEL_LEN};
pub use transpose::{transpose_2d_into, transpose_nd, transpose_nd_into};

pub use ndperm_layout::{NdPermError, Result};
