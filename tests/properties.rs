//! Property-based tests for `NdArray::transpose` and the matrix printer.
//!
//! # Key invariants
//! - element `c` of the source is element `perm(c)` of the transpose
//! - transposing by `perm` then `perm.inverse()` restores the array
//! - the rank-2 blocked dispatch agrees with the generic N-D gather
//! - `format_2d` renders one line per row with `cols` cells each

use ndperm::{format_2d, transpose_nd, NdArray, NdPermError, Permutation, Shape};
use proptest::prelude::*;

fn perm4() -> impl Strategy<Value = Permutation<4>> {
    Just(vec![0usize, 1, 2, 3])
        .prop_shuffle()
        .prop_map(|axes| Permutation::try_from_slice(&axes).unwrap())
}

fn tagged<const N: usize>(extents: [usize; N]) -> NdArray<u64, N> {
    // Every element encodes its own column-major offset.
    let shape = Shape::new(extents);
    NdArray::from_fn(shape, |c| ndperm::flatten(c, &shape) as u64)
}

proptest! {
    #[test]
    fn prop_transpose_reads_permuted_coordinate(
        extents in prop::array::uniform4(1usize..6),
        perm in perm4(),
    ) {
        let a = tagged(extents);
        let t = a.transpose(&perm).unwrap();
        prop_assert_eq!(t.shape(), &perm.apply_shape(a.shape()));
        for c in a.shape().coords() {
            prop_assert_eq!(t.get(&perm.apply(&c)), a.get(&c));
        }
    }

    #[test]
    fn prop_transpose_then_inverse_restores(
        extents in prop::array::uniform4(1usize..6),
        perm in perm4(),
    ) {
        let a = tagged(extents);
        let back = a.transpose(&perm).unwrap().transpose(&perm.inverse()).unwrap();
        prop_assert_eq!(back, a);
    }

    #[test]
    fn prop_rank2_dispatch_matches_gather(rows in 1usize..40, cols in 1usize..40) {
        let a = tagged([rows, cols]);
        let perm = Permutation::new([1, 0]).unwrap();
        let t = a.transpose(&perm).unwrap();
        let (gathered, shape) = transpose_nd(a.data(), a.shape(), &perm).unwrap();
        prop_assert_eq!(t.shape(), &shape);
        prop_assert_eq!(t.data(), gathered.as_slice());
    }

    #[test]
    fn prop_format_2d_grid(rows in 0usize..6, cols in 0usize..6) {
        let data: Vec<i32> = (0..(rows * cols) as i32).collect();
        let text = format_2d(rows, cols, &data).unwrap();
        prop_assert_eq!(text.lines().count(), rows);
        for line in text.lines() {
            prop_assert_eq!(line.len(), cols * 9);
        }
    }

    #[test]
    fn prop_format_2d_rejects_short_buffer(rows in 1usize..6, cols in 1usize..6) {
        let data = vec![0u8; rows * cols - 1];
        prop_assert_eq!(
            format_2d(rows, cols, &data),
            Err(NdPermError::LengthMismatch { expected: rows * cols, actual: rows * cols - 1 })
        );
    }
}
