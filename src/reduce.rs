//! Vector-style reductions over dense arrays.
//!
//! An array of any shape is treated as a flat vector of its elements.
//! The access path is selected from the layout's compile-time knowledge,
//! mirroring the kernel dispatch in [`crate::ops`]:
//!
//! - layout known contiguous → one stride-1 pass over the packed data;
//! - compile-time row → one pass stepped by `lead_dim`;
//! - otherwise → a runtime contiguity branch, falling back to per-column
//!   passes.
//!
//! Downstream BLAS bindings choose stride-1 vs strided call forms from
//! the same capability queries; these routines are their pure-Rust
//! equivalent and allocate nothing.

use crate::check::check_arg;
use crate::layout::Layout;
use crate::traits::{Dense, DenseMut, FloatScalar, Scalar};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Path {
    Unit,
    Row,
    General,
}

const fn path<L: Layout>() -> Path {
    if L::CT_CONTINUOUS {
        Path::Unit
    } else if L::CT_ROWS == 1 {
        Path::Row
    } else {
        Path::General
    }
}

fn fold<T: Scalar, A: Dense<T>, B, F: FnMut(B, T) -> B>(x: &A, init: B, mut f: F) -> B {
    if x.is_empty() {
        return init;
    }
    let n = x.ncols();
    let p = const { path::<A::Layout>() };
    match p {
        Path::Unit => x.data()[..x.nelems()].iter().fold(init, |acc, &v| f(acc, v)),
        Path::Row => x
            .data()
            .iter()
            .step_by(x.lead_dim())
            .take(n)
            .fold(init, |acc, &v| f(acc, v)),
        Path::General => {
            if x.is_continuous() {
                x.data()[..x.nelems()].iter().fold(init, |acc, &v| f(acc, v))
            } else {
                let mut acc = init;
                for j in 0..n {
                    for &v in x.col(j) {
                        acc = f(acc, v);
                    }
                }
                acc
            }
        }
    }
}

/// Sum of all elements.
///
/// ```
/// use lamina::{reduce, Mat};
///
/// let m = Mat::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(reduce::sum(&m), 10.0);
/// ```
pub fn sum<T: Scalar, A: Dense<T>>(x: &A) -> T {
    fold(x, T::zero(), |acc, v| acc + v)
}

/// Sum of absolute values.
pub fn asum<T: FloatScalar, A: Dense<T>>(x: &A) -> T {
    fold(x, T::zero(), |acc, v| acc + v.abs())
}

/// Euclidean norm of the elements.
pub fn nrm2<T: FloatScalar, A: Dense<T>>(x: &A) -> T {
    fold(x, T::zero(), |acc, v| acc + v * v).sqrt()
}

/// Dot product of two arrays of equal shape.
///
/// # Panics
///
/// Panics if the shapes differ.
pub fn dot<T: Scalar, A: Dense<T>, B: Dense<T>>(x: &A, y: &B) -> T {
    check_arg(
        x.nrows() == y.nrows() && x.ncols() == y.ncols(),
        "dot: inconsistent sizes of operands.",
    );
    if x.is_empty() {
        return T::zero();
    }
    let n = x.ncols();
    if x.is_continuous() && y.is_continuous() {
        let ne = x.nelems();
        x.data()[..ne]
            .iter()
            .zip(&y.data()[..ne])
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    } else {
        let mut acc = T::zero();
        for j in 0..n {
            for (&a, &b) in x.col(j).iter().zip(y.col(j)) {
                acc = acc + a * b;
            }
        }
        acc
    }
}

/// `y += alpha * x` over arrays of equal shape.
///
/// # Panics
///
/// Panics if the shapes differ.
pub fn axpy<T: Scalar, A: Dense<T>, B: DenseMut<T>>(alpha: T, x: &A, y: &mut B) {
    check_arg(
        x.nrows() == y.nrows() && x.ncols() == y.ncols(),
        "axpy: inconsistent sizes of x and y.",
    );
    if x.is_empty() {
        return;
    }
    let n = x.ncols();
    if x.is_continuous() && y.is_continuous() {
        let ne = x.nelems();
        let src = &x.data()[..ne];
        for (d, &s) in y.data_mut()[..ne].iter_mut().zip(src) {
            *d = *d + alpha * s;
        }
    } else {
        for j in 0..n {
            // Columns are packed in both layouts; only the strides differ.
            let xs = x.col(j);
            for (d, &s) in y.col_mut(j).iter_mut().zip(xs) {
                *d = *d + alpha * s;
            }
        }
    }
}
