//! Property-based tests for the flatten / unflatten / permutation algebra.
//!
//! # Key invariants
//! - `unflatten(flatten(c)) == c` for every valid coordinate
//! - `flatten(unflatten(o)) == o` and unflatten covers `0..size` exactly once
//! - the identity permutation yields the identity index map
//! - applying P then Q equals applying `P.then(Q)` once

use std::collections::HashSet;

use ndperm_layout::{
    flatten, flatten_in, unflatten, unflatten_in, Coord, Layout, Permutation, Shape,
    TransposeIndex,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn shape4() -> impl Strategy<Value = Shape<4>> {
    prop::array::uniform4(1usize..7).prop_map(Shape::new)
}

fn shape_and_coord4() -> impl Strategy<Value = (Shape<4>, Coord<4>)> {
    prop::array::uniform4(1usize..7).prop_flat_map(|ext| {
        (0..ext[0], 0..ext[1], 0..ext[2], 0..ext[3])
            .prop_map(move |(a, b, c, d)| (Shape::new(ext), Coord::new([a, b, c, d])))
    })
}

fn shape_and_offset3() -> impl Strategy<Value = (Shape<3>, usize)> {
    prop::array::uniform3(1usize..9).prop_flat_map(|ext| {
        let size = ext.iter().product::<usize>();
        (Just(Shape::new(ext)), 0..size)
    })
}

fn perm4() -> impl Strategy<Value = Permutation<4>> {
    Just(vec![0usize, 1, 2, 3])
        .prop_shuffle()
        .prop_map(|axes| Permutation::try_from_slice(&axes).unwrap())
}

fn layout() -> impl Strategy<Value = Layout> {
    prop_oneof![Just(Layout::ColMajor), Just(Layout::RowMajor)]
}

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_unflatten_inverts_flatten((shape, coord) in shape_and_coord4()) {
        let offset = flatten(&coord, &shape);
        prop_assert!(offset < shape.size());
        prop_assert_eq!(unflatten(offset, &shape), coord);
    }

    #[test]
    fn prop_flatten_inverts_unflatten((shape, offset) in shape_and_offset3(), layout in layout()) {
        let coord = unflatten_in(offset, &shape, layout);
        prop_assert!(shape.contains(&coord), "{:?} outside {:?}", coord, shape);
        prop_assert_eq!(flatten_in(&coord, &shape, layout), offset);
    }

    #[test]
    fn prop_unflatten_covers_every_offset_once(shape in shape4()) {
        let coords: HashSet<Coord<4>> = (0..shape.size()).map(|o| unflatten(o, &shape)).collect();
        prop_assert_eq!(coords.len(), shape.size());
        prop_assert!(coords.iter().all(|c| shape.contains(c)));
    }
}

// ---------------------------------------------------------------------------
// Permutations and the transpose functor
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_identity_permutation_is_identity_map(shape in shape4(), layout in layout()) {
        let idx = TransposeIndex::with_layout(shape, Permutation::identity(), layout);
        for i in 0..idx.size() {
            prop_assert_eq!(idx.source_index(i), i);
        }
    }

    #[test]
    fn prop_composition((_, coord) in shape_and_coord4(), p in perm4(), q in perm4()) {
        let sequential = q.apply(&p.apply(&coord));
        prop_assert_eq!(p.then(&q).apply(&coord), sequential);
    }

    #[test]
    fn prop_source_index_is_bijection(shape in shape4(), p in perm4()) {
        let idx = TransposeIndex::new(shape, p);
        let sources: HashSet<usize> = (0..idx.size()).map(|i| idx.source_index(i)).collect();
        prop_assert_eq!(sources.len(), idx.size());
        prop_assert!(sources.iter().all(|&s| s < idx.size()));
    }

    #[test]
    fn prop_source_index_reads_permuted_coordinate(shape in shape4(), p in perm4()) {
        // The element written at destination coordinate perm(c) is source coordinate c.
        let idx = TransposeIndex::new(shape, p);
        for c in shape.coords() {
            let dest = flatten(&p.apply(&c), idx.dest_shape());
            prop_assert_eq!(idx.source_index(dest), flatten(&c, &shape));
        }
    }

    #[test]
    fn prop_inverse_functor_round_trips(shape in shape4(), p in perm4(), layout in layout()) {
        let fwd = TransposeIndex::with_layout(shape, p, layout);
        let back = fwd.inverse();
        prop_assert_eq!(back.dest_shape(), &shape);
        for i in 0..fwd.size() {
            prop_assert_eq!(fwd.source_index(back.source_index(i)), i);
        }
    }
}
