//! End-to-end scenarios across static and dynamic shapes.

use lamina::{binary_dim, ops, reduce, Array, Mat, Shape, DYN};

#[test]
fn fill_5x6_and_compare_against_reference() {
    let mut dst = Mat::zeros(5, 6);
    ops::fill(&mut dst, 3.0);
    assert_eq!(dst.nelems(), 30);
    assert!(dst.iter().all(|&x| x == 3.0));

    let reference = Mat::filled(5, 6, 3.0);
    assert!(ops::is_equal(&dst, &reference));
}

#[test]
fn copy_then_is_equal_roundtrip() {
    let src = Mat::from_fn(4, 7, |i, j| (i * 7 + j) as f64);
    let mut dst = Mat::zeros(4, 7);
    ops::copy(&src, &mut dst);
    assert!(ops::is_equal(&src, &dst));

    // Same property across a static/dynamic pair
    let s: Array<f64, 4, 7> = src.try_cast().unwrap();
    let mut d = Mat::zeros(4, 7);
    ops::copy(&s, &mut d);
    assert!(ops::is_equal(&s, &d));
}

#[test]
fn comparison_mismatch_is_a_value_copy_mismatch_is_an_error() {
    let a = Mat::filled(5, 6, 1.0);
    let b = Mat::filled(5, 5, 1.0);

    // Comparison: a result, no panic
    assert!(!ops::is_equal(&a, &b));

    // Copy: a contract violation
    let result = std::panic::catch_unwind(|| {
        let mut dst = Mat::zeros(5, 5);
        ops::copy(&a, &mut dst);
    });
    assert!(result.is_err());
}

#[test]
fn shapes_agree_across_parameterizations() {
    let s_static: Shape<5, 6> = Shape::new(5, 6);
    let s_dyn: Shape<DYN, DYN> = Shape::new(5, 6);
    let s_mixed: Shape<5, DYN> = Shape::new(5, 6);
    assert!(s_static == s_dyn);
    assert!(s_static == s_mixed);
    assert!(s_dyn == s_mixed);

    // The unified spec keeps the static side
    let unified: Shape<{ binary_dim(5, DYN) }, { binary_dim(DYN, 6) }> = Shape::new(5, 6);
    assert!(unified == s_static);
    assert!(unified == s_dyn);
}

#[test]
fn static_arrays_interoperate_with_dynamic_ones() {
    let s: Array<f64, 3, 3> = Array::eye(3);
    let d = Mat::eye(3);

    assert!(ops::is_equal(&s, &d));
    assert_eq!(reduce::sum(&s), reduce::sum(&d));
    assert_eq!(reduce::dot(&s, &d), 3.0);

    let mut acc = Mat::zeros(3, 3);
    reduce::axpy(2.0, &s, &mut acc);
    reduce::axpy(1.0, &d, &mut acc);
    let mut expected = Mat::zeros(3, 3);
    ops::copy(&(d * 3.0), &mut expected);
    assert!(ops::is_equal(&acc, &expected));
}

#[test]
fn empty_shapes_are_noops_everywhere() {
    let mut a = Mat::zeros(0, 4);
    let b = Mat::zeros(0, 4);
    assert!(a.is_empty());
    assert_eq!(a.nelems(), 0);

    ops::fill(&mut a, 1.0);
    ops::zero(&mut a);
    assert!(ops::is_equal(&a, &b));
    assert!(ops::elems_equal(&a, 123.0));
    assert_eq!(reduce::sum(&a), 0.0);

    let mut m0 = Mat::zeros(3, 0);
    assert!(m0.is_empty());
    ops::fill(&mut m0, 1.0);
}

#[test]
fn resize_protocol() {
    let mut m = Mat::filled(2, 3, 1.0);
    m.require_shape(3, 4);
    assert_eq!((m.nrows(), m.ncols()), (3, 4));

    // Shrinking keeps the prefix of the storage
    m.require_shape(2, 2);
    assert_eq!(m.nelems(), 4);
}

#[test]
fn scalar_shaped_arrays() {
    let mut s: Array<f64, 1, 1> = Array::zeros(1, 1);
    ops::fill(&mut s, 4.0);
    assert_eq!(s[(0, 0)], 4.0);
    assert_eq!(s[0], 4.0);

    let other: Array<f64, 1, 1> = Array::filled(1, 1, 4.0);
    assert!(ops::is_equal(&s, &other));
    assert_eq!(reduce::sum(&s), 4.0);
}

#[test]
fn vector_shaped_arrays() {
    let mut col: Array<f64, DYN, 1> = Array::zeros(5, 1);
    ops::fill(&mut col, 2.0);
    assert!(ops::elems_equal(&col, 2.0));
    assert_eq!(col[4], 2.0);

    let mut row: Array<f64, 1, DYN> = Array::zeros(1, 5);
    ops::copy_from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0], &mut row);
    assert_eq!(row[(0, 2)], 3.0);
    assert_eq!(reduce::sum(&row), 15.0);
}
