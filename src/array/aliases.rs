//! Pre-defined type aliases for common array shapes.

use crate::shape::DYN;

use super::Array;

// ── Fully dynamic ───────────────────────────────────────────────────

/// Array with runtime row and column counts.
pub type Mat<T> = Array<T, DYN, DYN>;

/// Column vector with a runtime length.
pub type Col<T> = Array<T, DYN, 1>;

/// Row vector with a runtime length.
pub type Row<T> = Array<T, 1, DYN>;

// ── Static square ───────────────────────────────────────────────────

/// 1×1 array.
pub type Mat1<T> = Array<T, 1, 1>;
/// 2×2 array.
pub type Mat2<T> = Array<T, 2, 2>;
/// 3×3 array.
pub type Mat3<T> = Array<T, 3, 3>;
/// 4×4 array.
pub type Mat4<T> = Array<T, 4, 4>;

// ── Static rectangular ──────────────────────────────────────────────

/// 2×3 array.
pub type Mat2x3<T> = Array<T, 2, 3>;
/// 3×2 array.
pub type Mat3x2<T> = Array<T, 3, 2>;
/// 3×4 array.
pub type Mat3x4<T> = Array<T, 3, 4>;
/// 4×3 array.
pub type Mat4x3<T> = Array<T, 4, 3>;

// ── Static vectors ──────────────────────────────────────────────────

/// Column vector with a static length.
pub type SCol<T, const M: usize> = Array<T, M, 1>;
/// Row vector with a static length.
pub type SRow<T, const N: usize> = Array<T, 1, N>;

/// 2-element column vector.
pub type Col2<T> = Array<T, 2, 1>;
/// 3-element column vector.
pub type Col3<T> = Array<T, 3, 1>;
/// 4-element column vector.
pub type Col4<T> = Array<T, 4, 1>;

/// 2-element row vector.
pub type Row2<T> = Array<T, 1, 2>;
/// 3-element row vector.
pub type Row3<T> = Array<T, 1, 3>;
/// 4-element row vector.
pub type Row4<T> = Array<T, 1, 4>;
