use ndperm::{
    flatten, format_2d, transpose_2d_blocked_into, transpose_2d_into, unflatten, Coord, NdArray,
    Permutation, Shape, TransposeIndex,
};

/// 5 x 4 row-major matrix of ones with 2.0 at (0, 1) and 3.0 at (0, 3).
fn marked_matrix() -> Vec<f64> {
    let mut data = vec![1.0; 5 * 4];
    data[1] = 2.0;
    data[3] = 3.0;
    data
}

fn assert_marked_transpose(out: &[f64]) {
    // 4 x 5 row-major result
    for r in 0..4 {
        for c in 0..5 {
            let expected = match (r, c) {
                (1, 0) => 2.0,
                (3, 0) => 3.0,
                _ => 1.0,
            };
            assert_eq!(out[r * 5 + c], expected, "at row {r}, col {c}");
        }
    }
}

#[test]
fn test_rank2_scenario_gather() {
    let data = marked_matrix();
    let mut out = vec![0.0; 20];
    transpose_2d_into(&mut out, &data, 5, 4).unwrap();
    assert_marked_transpose(&out);
}

#[test]
fn test_rank2_scenario_blocked() {
    let data = marked_matrix();
    let mut out = vec![0.0; 20];
    transpose_2d_blocked_into(&mut out, &data, 5, 4).unwrap();
    assert_marked_transpose(&out);
}

#[test]
fn test_rank2_scenario_ndarray() {
    // The row-major 5 x 4 buffer is the column-major [4, 5] array.
    let a = NdArray::from_vec(Shape::new([4, 5]), marked_matrix()).unwrap();
    let t = a.transpose(&Permutation::new([1, 0]).unwrap()).unwrap();
    assert_eq!(t.shape(), &Shape::new([5, 4]));
    assert_marked_transpose(t.data());
}

#[test]
fn test_rank2_scenario_printout() {
    let mut out = vec![0.0; 20];
    transpose_2d_into(&mut out, &marked_matrix(), 5, 4).unwrap();
    let text = format_2d(4, 5, &out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "       2        1        1        1        1 ");
    assert_eq!(lines[3], "       3        1        1        1        1 ");
}

#[test]
fn test_known_flatten_value() {
    let shape = Shape::new([10, 10, 10, 10]);
    assert_eq!(flatten(&Coord::new([1, 2, 3, 4]), &shape), 4321);
    assert_eq!(unflatten(4321, &shape), Coord::new([1, 2, 3, 4]));
}

#[test]
fn test_identity_functor() {
    let idx = TransposeIndex::new(Shape::new([3, 1, 4, 2]), Permutation::identity());
    assert!((0..idx.size()).all(|i| idx.source_index(i) == i));
}

fn round_trip<const N: usize>(extents: [usize; N], axes: [usize; N]) {
    let a = NdArray::from_fn(Shape::new(extents), |c| flatten(c, &Shape::new(extents)) as f64);
    let perm = Permutation::new(axes).unwrap();
    let t = a.transpose(&perm).unwrap();
    assert_eq!(t.shape(), &perm.apply_shape(a.shape()));
    for c in a.shape().coords() {
        assert_eq!(t.get(&perm.apply(&c)), a.get(&c));
    }
    let back = t.transpose(&perm.inverse()).unwrap();
    assert_eq!(back, a);
}

#[test]
fn test_ndarray_self_inverse() {
    round_trip([3, 5], [1, 0]);
    round_trip([2, 3, 4], [1, 2, 0]);
    round_trip([2, 3, 4, 5], [2, 3, 1, 0]);
    round_trip([2, 3, 4, 5], [0, 1, 3, 2]);
}

#[test]
fn test_large_ndarray_transpose_parallel_path() {
    let shape = Shape::new([40, 30, 50]);
    let a = NdArray::from_fn(shape, |c| (c[0] * 10_000 + c[1] * 100 + c[2]) as u32);
    let perm = Permutation::new([2, 1, 0]).unwrap();
    let t = a.transpose(&perm).unwrap();
    assert_eq!(t.shape(), &Shape::new([50, 30, 40]));
    for (i, j, k) in [(0, 0, 0), (39, 29, 49), (7, 13, 21), (39, 0, 1)] {
        assert_eq!(t[[k, j, i]], a[[i, j, k]]);
    }
}
