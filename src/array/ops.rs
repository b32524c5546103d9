use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::Scalar;

use super::Array;

macro_rules! check_operand_shapes {
    ($lhs:expr, $rhs:expr, $op:literal) => {
        assert_eq!(
            ($lhs.nrows(), $lhs.ncols()),
            ($rhs.nrows(), $rhs.ncols()),
            concat!("dimension mismatch: {}x{} ", $op, " {}x{}"),
            $lhs.nrows(),
            $lhs.ncols(),
            $rhs.nrows(),
            $rhs.ncols(),
        );
    };
}

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Add for Array<T, M, N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += &rhs;
        self
    }
}

impl<T: Scalar, const M: usize, const N: usize> Add<&Array<T, M, N>> for Array<T, M, N> {
    type Output = Array<T, M, N>;

    fn add(mut self, rhs: &Array<T, M, N>) -> Array<T, M, N> {
        self += rhs;
        self
    }
}

impl<T: Scalar, const M: usize, const N: usize> AddAssign<&Array<T, M, N>> for Array<T, M, N> {
    fn add_assign(&mut self, rhs: &Array<T, M, N>) {
        check_operand_shapes!(self, rhs, "+");
        for (d, &s) in self.data.iter_mut().zip(rhs.data.iter()) {
            *d = *d + s;
        }
    }
}

impl<T: Scalar, const M: usize, const N: usize> AddAssign for Array<T, M, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Sub for Array<T, M, N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= &rhs;
        self
    }
}

impl<T: Scalar, const M: usize, const N: usize> Sub<&Array<T, M, N>> for Array<T, M, N> {
    type Output = Array<T, M, N>;

    fn sub(mut self, rhs: &Array<T, M, N>) -> Array<T, M, N> {
        self -= rhs;
        self
    }
}

impl<T: Scalar, const M: usize, const N: usize> SubAssign<&Array<T, M, N>> for Array<T, M, N> {
    fn sub_assign(&mut self, rhs: &Array<T, M, N>) {
        check_operand_shapes!(self, rhs, "-");
        for (d, &s) in self.data.iter_mut().zip(rhs.data.iter()) {
            *d = *d - s;
        }
    }
}

impl<T: Scalar, const M: usize, const N: usize> SubAssign for Array<T, M, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self -= &rhs;
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Neg for Array<T, M, N> {
    type Output = Self;

    fn neg(mut self) -> Self {
        for d in self.data.iter_mut() {
            *d = T::zero() - *d;
        }
        self
    }
}

// ── Scalar multiplication and division ──────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Mul<T> for Array<T, M, N> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

impl<T: Scalar, const M: usize, const N: usize> MulAssign<T> for Array<T, M, N> {
    fn mul_assign(&mut self, rhs: T) {
        for d in self.data.iter_mut() {
            *d = *d * rhs;
        }
    }
}

impl<T: Scalar, const M: usize, const N: usize> Div<T> for Array<T, M, N> {
    type Output = Self;

    fn div(mut self, rhs: T) -> Self {
        self /= rhs;
        self
    }
}

impl<T: Scalar, const M: usize, const N: usize> DivAssign<T> for Array<T, M, N> {
    fn div_assign(&mut self, rhs: T) {
        for d in self.data.iter_mut() {
            *d = *d / rhs;
        }
    }
}
