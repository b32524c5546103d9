pub mod aliases;
mod ops;

pub use aliases::*;

use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::check::check_range;
use crate::layout::{ContinuousLayout, Layout};
use crate::shape::{Shape, DYN};
use crate::traits::{Dense, DenseMut, Scalar};
use crate::view::{ArrayView, ArrayViewMut};

/// Dimension mismatch error for fallible conversions.
///
/// Returned by [`Array::try_cast`] when the runtime dimensions don't
/// match the target's compile-time dimensions.
///
/// # Example
///
/// ```
/// use lamina::{Array, Mat};
///
/// let d = Mat::zeros(2, 3);
/// let r: Result<Array<f64, 2, 2>, _> = d.try_cast();
/// assert!(r.is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionMismatch {
    /// Expected `(rows, cols)` specs; [`DYN`] marks an unconstrained dim.
    pub expected: (usize, usize),
    /// Got `(rows, cols)`.
    pub got: (usize, usize),
}

impl fmt::Display for DimensionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn dim(f: &mut fmt::Formatter<'_>, d: usize) -> fmt::Result {
            if d == DYN {
                write!(f, "dyn")
            } else {
                write!(f, "{}", d)
            }
        }
        write!(f, "dimension mismatch: expected ")?;
        dim(f, self.expected.0)?;
        write!(f, "x")?;
        dim(f, self.expected.1)?;
        write!(
            f,
            ", got {}x{}",
            self.got.0, self.got.1
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DimensionMismatch {}

/// Dense column-major 2D array with compile-time or runtime dimensions.
///
/// `M` and `N` are dimension specs; [`DYN`] marks a dimension as
/// runtime-determined, any other value is enforced at construction and
/// folded into the generated code. Storage is a packed column-major
/// `Vec<T>` behind a [`ContinuousLayout`], so linear indexing is always
/// available.
///
/// # Examples
///
/// ```
/// use lamina::{Array, Mat, DYN};
///
/// // Static 2×2: the shape is part of the type.
/// let a: Array<f64, 2, 2> = Array::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(a[(0, 1)], 2.0);
///
/// // Dynamic: extents are runtime values.
/// let b = Mat::filled(3, 4, 1.5);
/// assert_eq!(b.nrows(), 3);
/// assert_eq!(b[(2, 3)], 1.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Array<T, const M: usize, const N: usize> {
    data: Vec<T>,
    layout: ContinuousLayout<M, N>,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Array<T, M, N> {
    /// Create an `m × n` array of zeros.
    ///
    /// # Panics
    ///
    /// Panics with `"Invalid input dimensions."` if a static dimension
    /// disagrees with its runtime value (as do all constructors).
    pub fn zeros(m: usize, n: usize) -> Self {
        Self {
            data: alloc::vec![T::zero(); m * n],
            layout: ContinuousLayout::new(m, n),
        }
    }

    /// Create an `m × n` array filled with `value`.
    ///
    /// ```
    /// use lamina::Mat;
    /// let m = Mat::filled(2, 3, 7.0);
    /// assert_eq!(m[(1, 2)], 7.0);
    /// ```
    pub fn filled(m: usize, n: usize, value: T) -> Self {
        Self {
            data: alloc::vec![value; m * n],
            layout: ContinuousLayout::new(m, n),
        }
    }

    /// Create an array from a flat slice in column-major order.
    ///
    /// # Panics
    ///
    /// Panics if `slice.len() != m * n`.
    ///
    /// ```
    /// use lamina::Mat;
    /// // Column-major: col0=[1,3], col1=[2,4]
    /// let m = Mat::from_col_major(2, 2, &[1.0, 3.0, 2.0, 4.0]);
    /// assert_eq!(m[(1, 0)], 3.0);
    /// assert_eq!(m[(0, 1)], 2.0);
    /// ```
    pub fn from_col_major(m: usize, n: usize, slice: &[T]) -> Self {
        assert_eq!(
            slice.len(),
            m * n,
            "slice length {} does not match {}x{} array",
            slice.len(),
            m,
            n,
        );
        Self {
            data: slice.to_vec(),
            layout: ContinuousLayout::new(m, n),
        }
    }

    /// Create an array from a flat slice in row-major order.
    ///
    /// Transposes the input into column-major internal storage.
    ///
    /// # Panics
    ///
    /// Panics if `row_major.len() != m * n`.
    ///
    /// ```
    /// use lamina::Mat;
    /// let m = Mat::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_rows(m: usize, n: usize, row_major: &[T]) -> Self {
        assert_eq!(
            row_major.len(),
            m * n,
            "slice length {} does not match {}x{} array",
            row_major.len(),
            m,
            n,
        );
        let mut data = alloc::vec![T::zero(); m * n];
        for i in 0..m {
            for j in 0..n {
                data[j * m + i] = row_major[i * n + j];
            }
        }
        Self {
            data,
            layout: ContinuousLayout::new(m, n),
        }
    }

    /// Create an array from an owned `Vec<T>` in column-major order.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != m * n`.
    pub fn from_vec(m: usize, n: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            m * n,
            "vec length {} does not match {}x{} array",
            data.len(),
            m,
            n,
        );
        Self {
            data,
            layout: ContinuousLayout::new(m, n),
        }
    }
}

impl<T, const M: usize, const N: usize> Array<T, M, N> {
    /// Create an array by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use lamina::Mat;
    /// let m = Mat::from_fn(3, 3, |i, j| if i == j { 1.0 } else { 0.0 });
    /// assert_eq!(m[(1, 1)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(m: usize, n: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(m * n);
        for j in 0..n {
            for i in 0..m {
                data.push(f(i, j));
            }
        }
        Self {
            data,
            layout: ContinuousLayout::new(m, n),
        }
    }
}

impl<T: Scalar, const D: usize> Array<T, D, D> {
    /// Create an `n × n` identity array (square parameterizations only).
    ///
    /// ```
    /// use lamina::Mat;
    /// let id = Mat::<f64>::eye(3);
    /// assert_eq!(id[(0, 0)], 1.0);
    /// assert_eq!(id[(0, 1)], 0.0);
    /// ```
    pub fn eye(n: usize) -> Self {
        let mut a = Self::zeros(n, n);
        for i in 0..n {
            a[(i, i)] = T::one();
        }
        a
    }
}

// ── Queries and raw access ──────────────────────────────────────────

impl<T, const M: usize, const N: usize> Array<T, M, N> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.layout.nrows()
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.layout.ncols()
    }

    /// Total number of elements.
    #[inline]
    pub fn nelems(&self) -> usize {
        self.layout.nelems()
    }

    /// Whether either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    /// The logical shape.
    #[inline]
    pub fn shape(&self) -> &Shape<M, N> {
        self.layout.shape()
    }

    /// The physical layout.
    #[inline]
    pub fn layout(&self) -> &ContinuousLayout<M, N> {
        &self.layout
    }

    /// The elements as a flat column-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The elements as a mutable flat column-major slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Column `j` as a slice. Zero-cost — columns are packed.
    #[inline]
    pub fn col_slice(&self, j: usize) -> &[T] {
        let m = self.nrows();
        &self.data[j * m..j * m + m]
    }

    /// Column `j` as a mutable slice.
    #[inline]
    pub fn col_slice_mut(&mut self, j: usize) -> &mut [T] {
        let m = self.nrows();
        &mut self.data[j * m..j * m + m]
    }

    /// Iterate over all elements in column-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in column-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

// ── Resizing ────────────────────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Array<T, M, N> {
    /// Ensure the array has extents `m × n`, reallocating only when the
    /// element count changes. Newly exposed elements are zero; existing
    /// elements keep their storage order, not their logical positions.
    ///
    /// # Panics
    ///
    /// Panics with `"Invalid input dimensions."` if the new extents
    /// violate the static dimensions — a fully static array can only be
    /// "resized" to its own shape.
    pub fn require_shape(&mut self, m: usize, n: usize) {
        let new_shape = Shape::<M, N>::new(m, n);
        if new_shape != *self.layout.shape() {
            let ne = new_shape.nelems();
            if ne != self.data.len() {
                self.data.resize(ne, T::zero());
            }
            self.layout.set_shape(new_shape);
        }
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl<T, const M: usize, const N: usize> Array<T, M, N> {
    /// Discard the static dimension information, reusing the storage.
    ///
    /// ```
    /// use lamina::{Array, Mat};
    /// let a: Array<f64, 2, 2> = Array::zeros(2, 2);
    /// let d: Mat<f64> = a.into_dyn();
    /// assert_eq!(d.nrows(), 2);
    /// ```
    pub fn into_dyn(self) -> Array<T, DYN, DYN> {
        let (m, n) = (self.nrows(), self.ncols());
        Array {
            data: self.data,
            layout: ContinuousLayout::new(m, n),
        }
    }

    /// Re-type the array under different dimension specs.
    ///
    /// Succeeds iff the runtime extents satisfy the target's static
    /// dimensions; the elements are cloned into the result.
    ///
    /// ```
    /// use lamina::{Array, Mat};
    /// let d = Mat::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let s: Array<f64, 2, 2> = d.try_cast().unwrap();
    /// assert_eq!(s[(1, 1)], 4.0);
    /// ```
    pub fn try_cast<const M2: usize, const N2: usize>(
        &self,
    ) -> Result<Array<T, M2, N2>, DimensionMismatch>
    where
        T: Clone,
    {
        let (m, n) = (self.nrows(), self.ncols());
        if (M2 != DYN && M2 != m) || (N2 != DYN && N2 != n) {
            return Err(DimensionMismatch {
                expected: (M2, N2),
                got: (m, n),
            });
        }
        Ok(Array {
            data: self.data.clone(),
            layout: ContinuousLayout::new(m, n),
        })
    }
}

// ── Views ───────────────────────────────────────────────────────────

impl<T, const M: usize, const N: usize> Array<T, M, N> {
    /// Borrow the whole array as a read-only view.
    #[inline]
    pub fn view(&self) -> ArrayView<'_, T, M, N> {
        let (m, n) = (self.nrows(), self.ncols());
        ArrayView::with_lead_dim(&self.data, m, n, m.max(1))
    }

    /// Borrow the whole array as a mutable view.
    #[inline]
    pub fn view_mut(&mut self) -> ArrayViewMut<'_, T, M, N> {
        let (m, n) = (self.nrows(), self.ncols());
        ArrayViewMut::with_lead_dim(&mut self.data, m, n, m.max(1))
    }

    /// Borrow column `j` as a column view.
    #[inline]
    pub fn col_view(&self, j: usize) -> ArrayView<'_, T, DYN, 1> {
        ArrayView::new(self.col_slice(j), self.nrows(), 1)
    }

    /// Borrow row `i` as a strided row view (stride = `nrows`).
    #[inline]
    pub fn row_view(&self, i: usize) -> ArrayView<'_, T, 1, DYN> {
        let (m, n) = (self.nrows(), self.ncols());
        check_range(i < m, "Subscript out of range.");
        ArrayView::with_lead_dim(&self.data[i..], 1, n, m)
    }

    /// Borrow the `bm × bn` block at `(i, j)` as a strided view.
    ///
    /// # Panics
    ///
    /// Panics with `"Subscript out of range."` if the block extends
    /// beyond the array bounds.
    pub fn block_view(&self, i: usize, j: usize, bm: usize, bn: usize) -> ArrayView<'_, T, DYN, DYN> {
        let (m, n) = (self.nrows(), self.ncols());
        check_range(i + bm <= m && j + bn <= n, "Subscript out of range.");
        let ld = m.max(1);
        let (start, span) = if bm == 0 || bn == 0 {
            (0, 0)
        } else {
            (i + m * j, ld * (bn - 1) + bm)
        };
        ArrayView::with_lead_dim(&self.data[start..start + span], bm, bn, ld)
    }

    /// Borrow the `bm × bn` block at `(i, j)` as a mutable strided view.
    ///
    /// Same contract as [`Array::block_view`].
    pub fn block_view_mut(
        &mut self,
        i: usize,
        j: usize,
        bm: usize,
        bn: usize,
    ) -> ArrayViewMut<'_, T, DYN, DYN> {
        let (m, n) = (self.nrows(), self.ncols());
        check_range(i + bm <= m && j + bn <= n, "Subscript out of range.");
        let ld = m.max(1);
        let (start, span) = if bm == 0 || bn == 0 {
            (0, 0)
        } else {
            (i + m * j, ld * (bn - 1) + bm)
        };
        ArrayViewMut::with_lead_dim(&mut self.data[start..start + span], bm, bn, ld)
    }
}

// ── Dense / DenseMut ────────────────────────────────────────────────

impl<T, const M: usize, const N: usize> Dense<T> for Array<T, M, N> {
    type Layout = ContinuousLayout<M, N>;

    #[inline]
    fn layout(&self) -> &ContinuousLayout<M, N> {
        &self.layout
    }

    #[inline]
    fn data(&self) -> &[T] {
        &self.data
    }
}

impl<T, const M: usize, const N: usize> DenseMut<T> for Array<T, M, N> {
    #[inline]
    fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

// ── Indexing ────────────────────────────────────────────────────────

impl<T, const M: usize, const N: usize> Index<(usize, usize)> for Array<T, M, N> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[self.layout.offset(i, j)]
    }
}

impl<T, const M: usize, const N: usize> IndexMut<(usize, usize)> for Array<T, M, N> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        let off = self.layout.offset(i, j);
        &mut self.data[off]
    }
}

/// Linear indexing in column-major order. Always available: the layout
/// is continuous.
impl<T, const M: usize, const N: usize> Index<usize> for Array<T, M, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[self.layout.linear_offset(i)]
    }
}

impl<T, const M: usize, const N: usize> IndexMut<usize> for Array<T, M, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        let off = self.layout.linear_offset(i);
        &mut self.data[off]
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display, const M: usize, const N: usize> fmt::Display for Array<T, M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use core::fmt::Write as _;

        let (m, n) = (self.nrows(), self.ncols());
        // Max width per column for alignment
        let mut widths = alloc::vec![0usize; n];
        for (j, w) in widths.iter_mut().enumerate() {
            for i in 0..m {
                let c = WriteCounting::count(|wc| write!(wc, "{}", self[(i, j)]));
                if c > *w {
                    *w = c;
                }
            }
        }

        for i in 0..m {
            write!(f, "│")?;
            for j in 0..n {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", self[(i, j)], width = widths[j])?;
            }
            write!(f, "│")?;
            if i + 1 < m {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Helper to count characters written, without allocating.
struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops;

    type Mat = Array<f64, DYN, DYN>;

    #[test]
    fn zeros_and_filled() {
        let z = Mat::zeros(3, 4);
        assert_eq!(z.nrows(), 3);
        assert_eq!(z.ncols(), 4);
        assert!(ops::elems_equal(&z, 0.0));

        let f = Mat::filled(2, 3, 7.0);
        assert!(ops::elems_equal(&f, 7.0));
    }

    #[test]
    fn static_construction_checks_dims() {
        let a: Array<f64, 2, 3> = Array::zeros(2, 3);
        assert_eq!(a.nelems(), 6);
    }

    #[test]
    #[should_panic(expected = "Invalid input dimensions.")]
    fn static_construction_rejects_wrong_dims() {
        let _: Array<f64, 2, 3> = Array::zeros(3, 3);
    }

    #[test]
    fn from_rows_transposes() {
        let m = Mat::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        // Storage is column-major
        assert_eq!(m.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn eye() {
        let id: Array<f64, 3, 3> = Array::eye(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(id[(i, j)], if i == j { 1.0 } else { 0.0 });
            }
        }

        let dyn_id = Mat::eye(2);
        assert_eq!(dyn_id[(0, 0)], 1.0);
        assert_eq!(dyn_id[(1, 0)], 0.0);
    }

    #[test]
    fn linear_indexing_is_column_major() {
        let m = Mat::from_col_major(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m[0], 1.0);
        assert_eq!(m[1], 2.0);
        assert_eq!(m[2], 3.0);
        assert_eq!(m[3], 4.0);
    }

    #[test]
    fn col_slices() {
        let m = Mat::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.col_slice(0), &[1.0, 4.0]);
        assert_eq!(m.col_slice(2), &[3.0, 6.0]);
    }

    #[test]
    fn require_shape_dynamic() {
        let mut m = Mat::zeros(2, 3);
        m.require_shape(4, 5);
        assert_eq!((m.nrows(), m.ncols()), (4, 5));
        assert_eq!(m.nelems(), 20);
    }

    #[test]
    fn require_shape_static_same_is_noop() {
        let mut a: Array<f64, 2, 3> = Array::zeros(2, 3);
        a.require_shape(2, 3);
        assert_eq!(a.nelems(), 6);
    }

    #[test]
    #[should_panic(expected = "Invalid input dimensions.")]
    fn require_shape_static_mismatch_panics() {
        let mut a: Array<f64, 2, 3> = Array::zeros(2, 3);
        a.require_shape(3, 3);
    }

    #[test]
    fn cast_roundtrip() {
        let d = Mat::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let s: Array<f64, 2, 2> = d.try_cast().unwrap();
        assert!(ops::is_equal(&d, &s));

        let back = s.into_dyn();
        assert!(ops::is_equal(&back, &d));
    }

    #[test]
    fn cast_rejects_wrong_dims() {
        let d = Mat::zeros(2, 3);
        let r: Result<Array<f64, 2, 2>, _> = d.try_cast();
        let err = r.unwrap_err();
        assert_eq!(err.expected, (2, 2));
        assert_eq!(err.got, (2, 3));

        // Partially constrained target: only the static dim must match
        let ok: Array<f64, 2, DYN> = d.try_cast().unwrap();
        assert_eq!(ok.ncols(), 3);
    }

    #[test]
    fn whole_array_view() {
        let m = Mat::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let v = m.view();
        assert!(v.is_continuous());
        assert_eq!(v[(1, 2)], 6.0);
        assert!(ops::is_equal(&m, &v));
    }

    #[test]
    fn col_and_row_views() {
        let m = Mat::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        let c = m.col_view(1);
        assert_eq!(c.nrows(), 2);
        assert_eq!(c[(0, 0)], 2.0);
        assert_eq!(c[1], 5.0);

        let r = m.row_view(1);
        assert_eq!(r.ncols(), 3);
        assert_eq!(r[0], 4.0);
        assert_eq!(r[2], 6.0);
        assert!(!r.is_continuous());
    }

    #[test]
    fn block_views() {
        let m = Mat::from_fn(4, 4, |i, j| (i * 4 + j) as f64);
        let b = m.block_view(1, 1, 2, 2);
        assert_eq!(b[(0, 0)], m[(1, 1)]);
        assert_eq!(b[(1, 1)], m[(2, 2)]);
        assert!(!b.is_continuous());
        assert_eq!(b.lead_dim(), 4);
    }

    #[test]
    fn block_view_mut_writes_through() {
        let mut m = Mat::zeros(3, 3);
        {
            let mut b = m.block_view_mut(1, 1, 2, 2);
            ops::fill(&mut b, 5.0);
        }
        assert_eq!(m[(0, 0)], 0.0);
        assert_eq!(m[(1, 1)], 5.0);
        assert_eq!(m[(2, 2)], 5.0);
        assert_eq!(m[(0, 1)], 0.0);
    }

    #[test]
    #[should_panic(expected = "Subscript out of range.")]
    fn block_view_out_of_range() {
        let m = Mat::zeros(3, 3);
        let _ = m.block_view(2, 2, 2, 2);
    }

    #[test]
    fn display_alignment() {
        let m = Mat::from_rows(2, 2, &[1.0, 22.0, 333.0, 4.0]);
        let s = alloc::format!("{}", m);
        assert!(s.contains("22"));
        assert!(s.contains("333"));
        assert!(s.contains('│'));
    }

    #[test]
    fn clone_eq() {
        let a = Mat::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = a.clone();
        assert_eq!(a, b);
    }
}
