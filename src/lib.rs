//! # lamina
//!
//! Layout-polymorphic dense 2D arrays, no-std compatible. Shapes carry
//! optional compile-time dimensions (const parameters, with [`DYN`] = 0 as
//! the runtime sentinel), layouts map logical indices to column-major
//! offsets, and every bulk operation dispatches at monomorphization to the
//! tightest access pattern the static shape knowledge allows, falling back
//! to a single runtime contiguity branch otherwise.
//!
//! ## Quick start
//!
//! ```
//! use lamina::{ops, Array, Mat};
//!
//! // Static shape: dispatch specializes at compile time.
//! let a: Array<f64, 2, 3> = Array::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//!
//! // Dynamic shape: same operations, runtime-selected access pattern.
//! let mut b = Mat::zeros(2, 3);
//! ops::copy(&a, &mut b);
//! assert!(ops::is_equal(&a, &b));
//! ```
//!
//! ## Modules
//!
//! - [`shape`] — [`Shape<M, N>`](Shape) with compile-time or runtime
//!   extents, and the const shape algebra ([`compatible_dims`],
//!   [`binary_dim`]) used to unify binary operands at the type level.
//!
//! - [`layout`] — the [`Layout`] trait with [`ContinuousLayout`] (packed
//!   column-major) and [`StridedLayout`] (runtime leading dimension).
//!   Degenerate row/column/scalar shapes collapse to single-index
//!   arithmetic at compile time.
//!
//! - [`meta`] — compile-time capability queries (`ct_is_row`,
//!   `ct_has_continuous_layout`, compatible/unified shape specs) consumed
//!   by the dispatch and by collaborators specializing further.
//!
//! - [`ops`] — bulk operations: `zero`, `fill`, `copy` (slice↔array and
//!   array↔array), `is_equal`, `is_approx`, `elems_equal`. Size
//!   mismatches in `copy` panic; shape mismatches in comparisons are
//!   `false` results.
//!
//! - [`array`] — owned [`Array<T, M, N>`](Array) (requires `alloc`), with
//!   constructors, resizing, static/dynamic casts, sub-views, and eager
//!   elementwise arithmetic. [`Mat`], [`Col`], [`Row`] and friends are
//!   aliases.
//!
//! - [`view`] — borrowed [`ArrayView`]/[`ArrayViewMut`] over external
//!   buffers, with arbitrary leading dimension. Core-only.
//!
//! - [`reduce`] — vector-style reductions (`sum`, `asum`, `nrm2`, `dot`,
//!   `axpy`) with the same compile-time access-path selection.
//!
//! ## Cargo features
//!
//! | Feature        | Default  | Description |
//! |----------------|----------|-------------|
//! | `std`          | yes      | Implies `alloc` |
//! | `alloc`        | via std  | Owned `Array` (heap-backed storage) |
//! | `libm`         | no       | Pure-Rust float fallback for no-std |
//! | `complex`      | no       | `Complex<f32>` / `Complex<f64>` elements via `num-complex` |
//! | `index-checks` | no       | Keep logical subscript checks in release builds |
//!
//! Subscript checks are always active under `debug_assertions`; without
//! them and without `index-checks`, only safe Rust's slice bounds checks
//! remain.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod array;
mod check;
mod kernel;
pub mod layout;
pub mod meta;
pub mod ops;
pub mod reduce;
pub mod shape;
pub mod traits;
pub mod view;

#[cfg(feature = "alloc")]
pub use array::{
    Array, Col, Col2, Col3, Col4, DimensionMismatch, Mat, Mat1, Mat2, Mat2x3, Mat3, Mat3x2,
    Mat3x4, Mat4, Mat4x3, Row, Row2, Row3, Row4, SCol, SRow,
};
pub use layout::{ContinuousLayout, Layout, StridedLayout};
pub use shape::{binary_dim, compatible_dims, Shape, DYN};
pub use traits::{Dense, DenseMut, FloatScalar, NormedScalar, Scalar};
pub use view::{ArrayView, ArrayViewMut};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
