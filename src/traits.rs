use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

#[cfg(feature = "complex")]
use num_complex::Complex;

use crate::layout::Layout;

/// Trait for types that can be used as array elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, all integer types, and (with the `complex`
/// feature) `Complex<f32>` / `Complex<f64>`.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for real floating-point array elements.
///
/// Required by operations that need `abs`, `sqrt`, or ordered comparison
/// (absolute-sum and norm reductions).
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Trait for elements with a modulus, used by approximate comparison.
///
/// Covers real floats (modulus = absolute value) and, with the `complex`
/// feature, complex numbers (modulus = `|z|`).
pub trait NormedScalar: Scalar {
    /// The real magnitude type (`Self` for reals, `T` for `Complex<T>`).
    type Real: FloatScalar;

    /// Absolute value / modulus.
    fn modulus(self) -> Self::Real;
}

macro_rules! impl_normed_scalar_real {
    ($($t:ty),*) => {
        $(
            impl NormedScalar for $t {
                type Real = $t;

                #[inline]
                fn modulus(self) -> $t {
                    Float::abs(self)
                }
            }
        )*
    };
}

impl_normed_scalar_real!(f32, f64);

#[cfg(feature = "complex")]
impl<T: FloatScalar> NormedScalar for Complex<T> {
    type Real = T;

    #[inline]
    fn modulus(self) -> T {
        self.norm()
    }
}

/// Read-only access to a dense array: a layout plus a backing storage
/// window starting at the array's origin.
///
/// This trait lets the bulk operations in [`crate::ops`] and the
/// reductions in [`crate::reduce`] run generically over owned arrays and
/// borrowed views. The layout's associated consts carry the compile-time
/// shape knowledge the kernel selector dispatches on.
pub trait Dense<T> {
    /// The physical addressing scheme.
    type Layout: Layout;

    fn layout(&self) -> &Self::Layout;

    /// The backing storage window. For strided layouts this includes the
    /// padding gaps; elements are located through the layout's offsets.
    fn data(&self) -> &[T];

    /// Number of rows.
    #[inline]
    fn nrows(&self) -> usize {
        self.layout().nrows()
    }

    /// Number of columns.
    #[inline]
    fn ncols(&self) -> usize {
        self.layout().ncols()
    }

    /// Total number of elements.
    #[inline]
    fn nelems(&self) -> usize {
        self.layout().nelems()
    }

    /// Whether either dimension is zero.
    #[inline]
    fn is_empty(&self) -> bool {
        self.layout().is_empty()
    }

    /// Stride between the starts of consecutive columns.
    #[inline]
    fn lead_dim(&self) -> usize {
        self.layout().lead_dim()
    }

    /// Whether the physical layout has no gaps.
    #[inline]
    fn is_continuous(&self) -> bool {
        self.layout().is_continuous()
    }

    /// Element at `(i, j)`.
    #[inline]
    fn get(&self, i: usize, j: usize) -> &T {
        &self.data()[self.layout().offset(i, j)]
    }

    /// Element at linear index `i`, where the layout permits linear
    /// addressing.
    #[inline]
    fn get_linear(&self, i: usize) -> &T {
        &self.data()[self.layout().linear_offset(i)]
    }

    /// Column `j` as a slice. Columns are always packed in column-major
    /// layouts.
    #[inline]
    fn col(&self, j: usize) -> &[T] {
        let start = self.layout().col_start(j);
        let m = self.nrows();
        &self.data()[start..start + m]
    }
}

/// Mutable access to a dense array.
pub trait DenseMut<T>: Dense<T> {
    /// The backing storage window, mutably.
    fn data_mut(&mut self) -> &mut [T];

    /// Element at `(i, j)`, mutably.
    #[inline]
    fn get_mut(&mut self, i: usize, j: usize) -> &mut T {
        let off = self.layout().offset(i, j);
        &mut self.data_mut()[off]
    }

    /// Column `j` as a mutable slice.
    #[inline]
    fn col_mut(&mut self, j: usize) -> &mut [T] {
        let start = self.layout().col_start(j);
        let m = self.nrows();
        &mut self.data_mut()[start..start + m]
    }
}
