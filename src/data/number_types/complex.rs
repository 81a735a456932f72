//! # Complex numbers
//!
//! A pair of values of an underlying field, with the arithmetic built from that field's operations
//! only. When the underlying field is an exact rational type, so is the complex type, with the same
//! degradation behavior per component.
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use crate::data::number_types::traits::Field;

/// A complex number `re + im * i`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Complex<F> {
    re: F,
    im: F,
}

impl<F: Field> Complex<F> {
    /// Create a complex number from its real and imaginary part.
    pub fn new(re: F, im: F) -> Self {
        Self { re, im }
    }

    /// Real part.
    pub fn real(&self) -> &F {
        &self.re
    }

    /// Imaginary part.
    pub fn imag(&self) -> &F {
        &self.im
    }

    /// Complex conjugate.
    #[must_use]
    pub fn conj(&self) -> Self {
        Self::new(self.re.clone(), -self.im.clone())
    }

    /// Whether the imaginary part is zero.
    pub fn is_real(&self) -> bool {
        self.im.is_zero()
    }
}

impl<F: Field> From<F> for Complex<F> {
    fn from(re: F) -> Self {
        Self::new(re, F::zero())
    }
}

impl<F: Field> PartialEq for Complex<F> {
    fn eq(&self, other: &Self) -> bool {
        self.re == other.re && self.im == other.im
    }
}

/// Only the real parts are compared.
impl<F: Field> PartialOrd for Complex<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.re.to_real().partial_cmp(&other.re.to_real())
    }
}

impl<F: Field> Zero for Complex<F> {
    fn zero() -> Self {
        Self::new(F::zero(), F::zero())
    }

    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }
}

impl<F: Field> One for Complex<F> {
    fn one() -> Self {
        Self::new(F::one(), F::zero())
    }
}

impl<F: Field> Neg for Complex<F> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.re, -self.im)
    }
}

impl<F: Field> Add for Complex<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<F: Field> Sub for Complex<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<F: Field> Mul for Complex<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.im.is_zero() && rhs.im.is_zero() {
            return Self::from(self.re * rhs.re);
        }

        let re = self.re.clone() * rhs.re.clone() - self.im.clone() * rhs.im.clone();
        let im = self.im * rhs.re + self.re * rhs.im;
        Self::new(re, im)
    }
}

/// Panics when the underlying field panics on division by zero.
impl<F: Field> Div for Complex<F> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        if self.im.is_zero() && rhs.im.is_zero() {
            return Self::from(self.re / rhs.re);
        }

        let norm = rhs.re.clone() * rhs.re.clone() + rhs.im.clone() * rhs.im.clone();
        let re = (self.re.clone() * rhs.re.clone() + self.im.clone() * rhs.im.clone()) / norm.clone();
        let im = (self.im * rhs.re - self.re * rhs.im) / norm;
        Self::new(re, im)
    }
}

macro_rules! assign_via_binary {
    ($assign_trait:ident, $assign_method:ident, $method:ident) => {
        impl<F: Field> $assign_trait for Complex<F> {
            fn $assign_method(&mut self, rhs: Self) {
                *self = self.clone().$method(rhs);
            }
        }
    };
}
assign_via_binary!(AddAssign, add_assign, add);
assign_via_binary!(SubAssign, sub_assign, sub);
assign_via_binary!(MulAssign, mul_assign, mul);
assign_via_binary!(DivAssign, div_assign, div);

impl<F: Field> Field for Complex<F> {
    fn to_real(&self) -> f64 {
        self.re.to_real()
    }

    fn from_real(value: f64) -> Self {
        Self::from(F::from_real(value))
    }

    fn to_approximate(&self) -> Self {
        Self::new(self.re.to_approximate(), self.im.to_approximate())
    }
}
