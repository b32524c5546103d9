//! Compile-time capability queries over layout types.
//!
//! These `const fn`s read the associated consts of a [`Layout`] type and
//! are the interface the kernel selector, the reductions, and downstream
//! collaborators (e.g. BLAS wrappers choosing stride-1 vs strided call
//! forms) use to specialize on static shape knowledge.

use crate::layout::Layout;
use crate::shape::{binary_dim, compatible_dims, ct_nelems_of};

/// Compile-time row spec of a layout type ([`DYN`](crate::shape::DYN)
/// when runtime-determined).
#[inline]
pub const fn ct_nrows<L: Layout>() -> usize {
    L::CT_ROWS
}

/// Compile-time column spec of a layout type.
#[inline]
pub const fn ct_ncols<L: Layout>() -> usize {
    L::CT_COLS
}

/// Compile-time element count: `rows * cols` when both are static,
/// [`DYN`](crate::shape::DYN) otherwise.
#[inline]
pub const fn ct_nelems<L: Layout>() -> usize {
    ct_nelems_of(L::CT_ROWS, L::CT_COLS)
}

/// Whether the layout is a compile-time row.
#[inline]
pub const fn ct_is_row<L: Layout>() -> bool {
    L::CT_ROWS == 1
}

/// Whether the layout is a compile-time column.
#[inline]
pub const fn ct_is_column<L: Layout>() -> bool {
    L::CT_COLS == 1
}

/// Whether the layout is a compile-time row or column.
#[inline]
pub const fn ct_is_vector<L: Layout>() -> bool {
    ct_is_row::<L>() || ct_is_column::<L>()
}

/// Whether the layout is compile-time 1×1.
#[inline]
pub const fn ct_is_scalar<L: Layout>() -> bool {
    ct_is_row::<L>() && ct_is_column::<L>()
}

/// Whether contiguity is a compile-time fact for the layout type.
#[inline]
pub const fn ct_has_continuous_layout<L: Layout>() -> bool {
    L::CT_CONTINUOUS
}

/// Whether two layout types could ever describe equal shapes: each
/// dimension pair is equal or has a [`DYN`](crate::shape::DYN) side.
#[inline]
pub const fn are_compatible_shapes<A: Layout, B: Layout>() -> bool {
    compatible_dims(A::CT_ROWS, B::CT_ROWS) && compatible_dims(A::CT_COLS, B::CT_COLS)
}

/// Unified compile-time row spec of a binary operation's operands.
/// Const-evaluation error for statically incompatible operands.
#[inline]
pub const fn binary_ct_rows<A: Layout, B: Layout>() -> usize {
    binary_dim(A::CT_ROWS, B::CT_ROWS)
}

/// Unified compile-time column spec of a binary operation's operands.
/// Const-evaluation error for statically incompatible operands.
#[inline]
pub const fn binary_ct_cols<A: Layout, B: Layout>() -> usize {
    binary_dim(A::CT_COLS, B::CT_COLS)
}
