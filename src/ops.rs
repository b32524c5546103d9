//! Bulk operations over dense arrays: zero, fill, copy, compare.
//!
//! Every operation consults the kernel selector with the operands'
//! compile-time shape specs (inside an inline `const` block, so the
//! decision is made at monomorphization) and falls back to a single
//! runtime contiguity branch only where the shape is not statically
//! known. None of these routines allocate; binary forms require
//! pre-sized destinations.
//!
//! Size mismatches in `copy` are contract violations and panic; shape
//! mismatches in the comparison operations are ordinary `false` results.

use crate::check::check_arg;
use crate::kernel::{self, Variant};
use crate::layout::Layout;
use crate::traits::{Dense, DenseMut, NormedScalar, Scalar};

const SIZE_MISMATCH: &str = "copy: inconsistent sizes of src and dst.";

#[inline]
fn same_shape<T, A: Dense<T>, B: Dense<T>>(a: &A, b: &B) -> bool {
    a.nrows() == b.nrows() && a.ncols() == b.ncols()
}

/// Set every element of `dst` to zero.
///
/// ```
/// use lamina::{ops, Mat};
///
/// let mut m = Mat::filled(2, 3, 5.0);
/// ops::zero(&mut m);
/// assert!(ops::elems_equal(&m, 0.0));
/// ```
#[inline]
pub fn zero<T: Scalar, A: DenseMut<T>>(dst: &mut A) {
    fill(dst, T::zero());
}

/// Set every element of `dst` to `v`.
///
/// ```
/// use lamina::{ops, Mat};
///
/// let mut m = Mat::zeros(5, 6);
/// ops::fill(&mut m, 3.0);
/// assert!(ops::elems_equal(&m, 3.0));
/// ```
pub fn fill<T: Scalar, A: DenseMut<T>>(dst: &mut A, v: T) {
    let m = dst.nrows();
    let n = dst.ncols();
    if m == 0 || n == 0 {
        return;
    }
    // Variant choice is a monomorphization-time decision; dead arms drop.
    let variant =
        const { kernel::select(<A::Layout as Layout>::CT_ROWS, <A::Layout as Layout>::CT_COLS) };
    match variant {
        Variant::Scalar => dst.data_mut()[0] = v,
        Variant::Col => kernel::fill::dense(v, &mut dst.data_mut()[..m]),
        Variant::Row => {
            if dst.is_continuous() {
                kernel::fill::dense(v, &mut dst.data_mut()[..n]);
            } else {
                let inc = dst.lead_dim();
                kernel::fill::row(v, n, dst.data_mut(), inc);
            }
        }
        Variant::Fixed => {
            // Const bounds; the loops unroll after monomorphization.
            let cm = <A::Layout as Layout>::CT_ROWS;
            let cn = <A::Layout as Layout>::CT_COLS;
            if dst.is_continuous() {
                kernel::fill::dense(v, &mut dst.data_mut()[..cm * cn]);
            } else {
                let ld = dst.lead_dim();
                kernel::fill::strided(v, cm, cn, dst.data_mut(), ld);
            }
        }
        Variant::Generic => {
            if dst.is_continuous() {
                kernel::fill::dense(v, &mut dst.data_mut()[..m * n]);
            } else {
                let ld = dst.lead_dim();
                kernel::fill::strided(v, m, n, dst.data_mut(), ld);
            }
        }
    }
}

/// Copy a packed column-major slice into `dst`.
///
/// # Panics
///
/// Panics if `src.len() != dst.nelems()`.
pub fn copy_from_slice<T: Scalar, A: DenseMut<T>>(src: &[T], dst: &mut A) {
    check_arg(src.len() == dst.nelems(), SIZE_MISMATCH);
    let m = dst.nrows();
    let n = dst.ncols();
    if m == 0 || n == 0 {
        return;
    }
    // Variant choice is a monomorphization-time decision; dead arms drop.
    let variant =
        const { kernel::select(<A::Layout as Layout>::CT_ROWS, <A::Layout as Layout>::CT_COLS) };
    match variant {
        Variant::Scalar => dst.data_mut()[0] = src[0],
        Variant::Col => kernel::copy::dense(src, &mut dst.data_mut()[..m]),
        Variant::Row => {
            if dst.is_continuous() {
                kernel::copy::dense(src, &mut dst.data_mut()[..n]);
            } else {
                let inc = dst.lead_dim();
                kernel::copy::row(n, src, 1, dst.data_mut(), inc);
            }
        }
        Variant::Fixed | Variant::Generic => {
            if dst.is_continuous() {
                kernel::copy::dense(src, &mut dst.data_mut()[..m * n]);
            } else {
                let ld = dst.lead_dim();
                kernel::copy::dense_to_strided(m, n, src, dst.data_mut(), ld);
            }
        }
    }
}

/// Copy `src` into a packed column-major slice.
///
/// # Panics
///
/// Panics if `dst.len() != src.nelems()`.
pub fn copy_to_slice<T: Scalar, A: Dense<T>>(src: &A, dst: &mut [T]) {
    check_arg(dst.len() == src.nelems(), SIZE_MISMATCH);
    let m = src.nrows();
    let n = src.ncols();
    if m == 0 || n == 0 {
        return;
    }
    // Variant choice is a monomorphization-time decision; dead arms drop.
    let variant =
        const { kernel::select(<A::Layout as Layout>::CT_ROWS, <A::Layout as Layout>::CT_COLS) };
    match variant {
        Variant::Scalar => dst[0] = src.data()[0],
        Variant::Col => kernel::copy::dense(&src.data()[..m], dst),
        Variant::Row => {
            if src.is_continuous() {
                kernel::copy::dense(&src.data()[..n], dst);
            } else {
                kernel::copy::row(n, src.data(), src.lead_dim(), dst, 1);
            }
        }
        Variant::Fixed | Variant::Generic => {
            if src.is_continuous() {
                kernel::copy::dense(&src.data()[..m * n], dst);
            } else {
                kernel::copy::strided_to_dense(m, n, src.data(), src.lead_dim(), dst);
            }
        }
    }
}

/// Copy `src` into `dst` element by element.
///
/// The variant is selected from the unified compile-time shape of both
/// operands, so one statically-shaped side specializes the whole copy.
/// Statically incompatible operand shapes fail to compile.
///
/// # Panics
///
/// Panics if the runtime shapes differ.
///
/// ```
/// use lamina::{ops, Array, Mat, DYN};
///
/// let src: Array<f64, 2, 3> = Array::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// let mut dst = Mat::zeros(2, 3);
/// ops::copy(&src, &mut dst);
/// assert!(ops::is_equal(&src, &dst));
/// ```
pub fn copy<T: Scalar, A: Dense<T>, B: DenseMut<T>>(src: &A, dst: &mut B) {
    check_arg(same_shape(src, dst), SIZE_MISMATCH);
    let m = src.nrows();
    let n = src.ncols();
    if m == 0 || n == 0 {
        return;
    }
    let variant = const {
        kernel::select_binary(
            <A::Layout as Layout>::CT_ROWS,
            <B::Layout as Layout>::CT_ROWS,
            <A::Layout as Layout>::CT_COLS,
            <B::Layout as Layout>::CT_COLS,
        )
    };
    match variant {
        Variant::Scalar => dst.data_mut()[0] = src.data()[0],
        Variant::Col => kernel::copy::dense(&src.data()[..m], &mut dst.data_mut()[..m]),
        Variant::Row => {
            let sinc = src.lead_dim();
            let dinc = dst.lead_dim();
            kernel::copy::row(n, src.data(), sinc, dst.data_mut(), dinc);
        }
        Variant::Fixed | Variant::Generic => {
            match (src.is_continuous(), dst.is_continuous()) {
                (true, true) => {
                    kernel::copy::dense(&src.data()[..m * n], &mut dst.data_mut()[..m * n])
                }
                (true, false) => {
                    let ld = dst.lead_dim();
                    kernel::copy::dense_to_strided(m, n, &src.data()[..m * n], dst.data_mut(), ld);
                }
                (false, true) => {
                    let ld = src.lead_dim();
                    kernel::copy::strided_to_dense(m, n, src.data(), ld, &mut dst.data_mut()[..m * n]);
                }
                (false, false) => {
                    let sld = src.lead_dim();
                    let dld = dst.lead_dim();
                    kernel::copy::strided(m, n, src.data(), sld, dst.data_mut(), dld);
                }
            }
        }
    }
}

/// Whether `a` and `b` have equal shapes and equal elements.
///
/// A shape mismatch — including between operands whose static shapes can
/// never match — is a `false` result, not an error.
///
/// ```
/// use lamina::{ops, Mat};
///
/// let a = Mat::filled(5, 6, 3.0);
/// let b = Mat::filled(5, 5, 3.0);
/// assert!(!ops::is_equal(&a, &b));
/// ```
pub fn is_equal<T: Scalar, A: Dense<T>, B: Dense<T>>(a: &A, b: &B) -> bool {
    if !same_shape(a, b) {
        return false;
    }
    let m = a.nrows();
    let n = a.ncols();
    if m == 0 || n == 0 {
        return true;
    }
    let variant = const {
        kernel::select_lenient(
            <A::Layout as Layout>::CT_ROWS,
            <B::Layout as Layout>::CT_ROWS,
            <A::Layout as Layout>::CT_COLS,
            <B::Layout as Layout>::CT_COLS,
        )
    };
    match variant {
        Variant::Scalar => a.data()[0] == b.data()[0],
        Variant::Col => kernel::compare::dense(&a.data()[..m], &b.data()[..m]),
        Variant::Row => kernel::compare::row(n, a.data(), a.lead_dim(), b.data(), b.lead_dim()),
        Variant::Fixed | Variant::Generic => {
            if a.is_continuous() && b.is_continuous() {
                kernel::compare::dense(&a.data()[..m * n], &b.data()[..m * n])
            } else {
                kernel::compare::strided(m, n, a.data(), a.lead_dim(), b.data(), b.lead_dim())
            }
        }
    }
}

/// Scalar form of [`is_approx`]: `|a - b| <= tol`.
#[inline]
pub fn is_approx_scalar<T: NormedScalar>(a: T, b: T, tol: T::Real) -> bool {
    (a - b).modulus() <= tol
}

/// Whether `a` and `b` have equal shapes and elementwise
/// `|a - b| <= tol`. Shape mismatch is a `false` result.
pub fn is_approx<T: NormedScalar, A: Dense<T>, B: Dense<T>>(a: &A, b: &B, tol: T::Real) -> bool {
    if !same_shape(a, b) {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    let m = a.nrows();
    let n = a.ncols();
    if n == 1 {
        a.data()[..m]
            .iter()
            .zip(&b.data()[..m])
            .all(|(&x, &y)| is_approx_scalar(x, y, tol))
    } else {
        (0..n).all(|j| {
            a.col(j)
                .iter()
                .zip(b.col(j))
                .all(|(&x, &y)| is_approx_scalar(x, y, tol))
        })
    }
}

/// Whether every element of `a` equals `v`.
pub fn elems_equal<T: Scalar, A: Dense<T>>(a: &A, v: T) -> bool {
    let m = a.nrows();
    let n = a.ncols();
    if m == 0 || n == 0 {
        return true;
    }
    // Variant choice is a monomorphization-time decision; dead arms drop.
    let variant =
        const { kernel::select(<A::Layout as Layout>::CT_ROWS, <A::Layout as Layout>::CT_COLS) };
    match variant {
        Variant::Scalar => a.data()[0] == v,
        Variant::Col => kernel::compare::dense_val(&a.data()[..m], &v),
        Variant::Row => kernel::compare::row_val(n, a.data(), a.lead_dim(), &v),
        Variant::Fixed | Variant::Generic => {
            if a.is_continuous() {
                kernel::compare::dense_val(&a.data()[..m * n], &v)
            } else {
                kernel::compare::strided_val(m, n, a.data(), a.lead_dim(), &v)
            }
        }
    }
}

/// Whether the elements of `a` equal a packed column-major slice.
/// A length mismatch is a `false` result.
pub fn elems_equal_slice<T: Scalar, A: Dense<T>>(a: &A, s: &[T]) -> bool {
    if s.len() != a.nelems() {
        return false;
    }
    let m = a.nrows();
    let n = a.ncols();
    if m == 0 || n == 0 {
        return true;
    }
    // Variant choice is a monomorphization-time decision; dead arms drop.
    let variant =
        const { kernel::select(<A::Layout as Layout>::CT_ROWS, <A::Layout as Layout>::CT_COLS) };
    match variant {
        Variant::Scalar => a.data()[0] == s[0],
        Variant::Col => kernel::compare::dense(&a.data()[..m], s),
        Variant::Row => kernel::compare::row(n, a.data(), a.lead_dim(), s, 1),
        Variant::Fixed | Variant::Generic => {
            if a.is_continuous() {
                kernel::compare::dense(&a.data()[..m * n], s)
            } else {
                kernel::compare::strided(m, n, a.data(), a.lead_dim(), s, m)
            }
        }
    }
}
