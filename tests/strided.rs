//! Strided views over padded buffers: writes must land exactly on the
//! logical elements and never touch the padding between columns.

use lamina::{ops, ArrayView, ArrayViewMut, Dense, Layout, Mat, DYN};

/// The padding positions of a 5×6 region with lead dimension 7 inside a
/// buffer of 42: the last two slots of each 7-element column chunk.
const PADDING: [usize; 12] = [5, 6, 12, 13, 19, 20, 26, 27, 33, 34, 40, 41];

#[test]
fn fill_never_touches_padding() {
    let mut buf = [-1.0_f64; 42];
    {
        let mut v: ArrayViewMut<f64, DYN, DYN> = ArrayViewMut::with_lead_dim(&mut buf, 5, 6, 7);
        ops::fill(&mut v, 3.0);
    }
    for (k, &x) in buf.iter().enumerate() {
        if PADDING.contains(&k) {
            assert_eq!(x, -1.0, "padding position {} was written", k);
        } else {
            assert_eq!(x, 3.0, "logical position {} was not filled", k);
        }
    }
}

#[test]
fn offsets_cover_exactly_the_non_padding_positions() {
    let buf = [0.0_f64; 42];
    let v: ArrayView<f64, DYN, DYN> = ArrayView::with_lead_dim(&buf, 5, 6, 7);
    let mut touched = [false; 42];
    for j in 0..6 {
        for i in 0..5 {
            let off = v.layout().offset(i, j);
            assert_eq!(off, i + 7 * j);
            touched[off] = true;
        }
    }
    for (k, &t) in touched.iter().enumerate() {
        assert_eq!(t, !PADDING.contains(&k));
    }
}

#[test]
fn copy_into_strided_destination() {
    let src = Mat::from_fn(5, 6, |i, j| (i * 6 + j) as f64);
    let mut buf = [-1.0_f64; 42];
    {
        let mut v: ArrayViewMut<f64, DYN, DYN> = ArrayViewMut::with_lead_dim(&mut buf, 5, 6, 7);
        ops::copy(&src, &mut v);
    }
    let v: ArrayView<f64, DYN, DYN> = ArrayView::with_lead_dim(&buf, 5, 6, 7);
    assert!(ops::is_equal(&v, &src));
    for &k in &PADDING {
        assert_eq!(buf[k], -1.0);
    }
}

#[test]
fn copy_out_of_strided_source() {
    let mut buf = [0.0_f64; 42];
    for j in 0..6 {
        for i in 0..5 {
            buf[i + 7 * j] = (j * 5 + i) as f64;
        }
    }
    let v: ArrayView<f64, DYN, DYN> = ArrayView::with_lead_dim(&buf, 5, 6, 7);

    let mut dst = Mat::zeros(5, 6);
    ops::copy(&v, &mut dst);
    assert_eq!(dst.as_slice(), (0..30).map(|k| k as f64).collect::<Vec<_>>());

    let mut flat = [0.0; 30];
    ops::copy_to_slice(&v, &mut flat);
    assert_eq!(&flat[..], dst.as_slice());
}

#[test]
fn strided_to_strided_copy() {
    let mut sbuf = [0.0_f64; 11];
    {
        let mut s: ArrayViewMut<f64, DYN, DYN> = ArrayViewMut::with_lead_dim(&mut sbuf, 3, 3, 4);
        ops::fill(&mut s, 2.0);
    }
    let s: ArrayView<f64, DYN, DYN> = ArrayView::with_lead_dim(&sbuf, 3, 3, 4);

    let mut dbuf = [-1.0_f64; 13];
    {
        let mut d: ArrayViewMut<f64, DYN, DYN> = ArrayViewMut::with_lead_dim(&mut dbuf, 3, 3, 5);
        ops::copy(&s, &mut d);
        assert!(ops::elems_equal(&d, 2.0));
    }
    // Destination padding untouched
    assert_eq!(dbuf[3], -1.0);
    assert_eq!(dbuf[4], -1.0);
}

#[test]
fn row_and_column_views_of_an_array() {
    let m = Mat::from_fn(4, 5, |i, j| (10 * i + j) as f64);

    let r = m.row_view(2);
    assert_eq!(r.ncols(), 5);
    for j in 0..5 {
        assert_eq!(r[(0, j)], m[(2, j)]);
        assert_eq!(r[j], m[(2, j)]);
    }
    assert!(!r.is_continuous());
    assert_eq!(r.lead_dim(), 4);

    let c = m.col_view(3);
    assert_eq!(c.nrows(), 4);
    assert!(c.is_continuous());
    for i in 0..4 {
        assert_eq!(c[i], m[(i, 3)]);
    }
}

#[test]
fn comparison_sees_through_layouts() {
    // Same logical content, different physical layouts
    let packed = Mat::from_fn(3, 4, |i, j| (i + 10 * j) as f64);

    let mut buf = [99.0_f64; 19];
    {
        let mut v: ArrayViewMut<f64, DYN, DYN> = ArrayViewMut::with_lead_dim(&mut buf, 3, 4, 5);
        ops::copy(&packed, &mut v);
    }
    let v: ArrayView<f64, DYN, DYN> = ArrayView::with_lead_dim(&buf, 3, 4, 5);

    assert!(ops::is_equal(&packed, &v));
    assert!(ops::is_equal(&v, &packed));
    assert!(ops::is_approx(&v, &packed, 0.0));
}

#[test]
fn zero_through_view_is_idempotent() {
    let mut buf = [7.0_f64; 11];
    let mut v: ArrayViewMut<f64, DYN, DYN> = ArrayViewMut::with_lead_dim(&mut buf, 3, 3, 4);
    ops::zero(&mut v);
    ops::zero(&mut v);
    assert!(ops::elems_equal(&v, 0.0));
    // Padding keeps its old value
    assert_eq!(buf[3], 7.0);
}
