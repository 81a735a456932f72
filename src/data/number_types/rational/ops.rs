//! # Arithmetic
//!
//! Every exact operation is preceded by the same computation in floating point. When that
//! estimate, or one of the intermediate values of the exact computation, can't be represented in
//! the backing integer type, the result is approximate. The integer operations are checked as
//! well, the float estimate is not trusted near the edges of the range.
use log::trace;

use crate::data::number_types::rational::{Backing, ExactRational, Inner, out_of_range};

/// Sum of two rationals.
fn sum<I: Backing>(left: ExactRational<I>, right: ExactRational<I>) -> ExactRational<I> {
    let estimate = left.to_float() + right.to_float();

    match (left.inner, right.inner) {
        (
            Inner::Exact { numerator: n1, denominator: d1 },
            Inner::Exact { numerator: n2, denominator: d2 },
        ) => {
            let (n1f, d1f, n2f, d2f) = (n1.to_float(), d1.to_float(), n2.to_float(), d2.to_float());
            let intermediates = [estimate, n1f * d2f, n2f * d1f, n1f * d2f + n2f * d1f, d1f * d2f];
            if intermediates.into_iter().any(out_of_range::<I>) {
                trace!("Sum of {:?} and {:?} degrades to {}", left, right, estimate);
                return ExactRational::approximate(estimate);
            }

            let exact = n1.checked_mul(&d2)
                .zip(n2.checked_mul(&d1))
                .and_then(|(a, b)| a.checked_add(&b))
                .zip(d1.checked_mul(&d2));
            match exact {
                Some((numerator, denominator)) => ExactRational::normalized(numerator, denominator),
                None => {
                    trace!("Sum of {:?} and {:?} overflowed, degrading to {}", left, right, estimate);
                    ExactRational::approximate(estimate)
                },
            }
        },
        _ => ExactRational::approximate(estimate),
    }
}

/// Product of two rationals.
fn product<I: Backing>(left: ExactRational<I>, right: ExactRational<I>) -> ExactRational<I> {
    let estimate = left.to_float() * right.to_float();

    match (left.inner, right.inner) {
        (
            Inner::Exact { numerator: n1, denominator: d1 },
            Inner::Exact { numerator: n2, denominator: d2 },
        ) => {
            let intermediates = [
                estimate,
                n1.to_float() * n2.to_float(),
                d1.to_float() * d2.to_float(),
            ];
            if intermediates.into_iter().any(out_of_range::<I>) {
                trace!("Product of {:?} and {:?} degrades to {}", left, right, estimate);
                return ExactRational::approximate(estimate);
            }

            match n1.checked_mul(&n2).zip(d1.checked_mul(&d2)) {
                Some((numerator, denominator)) => ExactRational::normalized(numerator, denominator),
                None => {
                    trace!("Product of {:?} and {:?} overflowed, degrading to {}", left, right, estimate);
                    ExactRational::approximate(estimate)
                },
            }
        },
        _ => ExactRational::approximate(estimate),
    }
}

mod field {
    mod neg {
        use std::ops::Neg;

        use crate::data::number_types::rational::{Backing, ExactRational, Inner};

        impl<I: Backing> Neg for ExactRational<I> {
            type Output = Self;

            fn neg(self) -> Self::Output {
                match self.inner {
                    // The minimum value is never stored, so this doesn't overflow
                    Inner::Exact { numerator, denominator } => Self {
                        inner: Inner::Exact { numerator: -numerator, denominator },
                    },
                    Inner::Approximate(value) => Self { inner: Inner::Approximate(-value) },
                }
            }
        }

        impl<I: Backing> Neg for &ExactRational<I> {
            type Output = ExactRational<I>;

            fn neg(self) -> Self::Output {
                -*self
            }
        }
    }

    mod add {
        use std::iter::Sum;
        use std::ops::{Add, AddAssign, Sub, SubAssign};

        use num_traits::Zero;

        use crate::data::number_types::rational::{Backing, ExactRational};
        use crate::data::number_types::rational::ops::sum;

        impl<I: Backing> Add for ExactRational<I> {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                sum(self, rhs)
            }
        }

        impl<I: Backing> Add<&ExactRational<I>> for ExactRational<I> {
            type Output = Self;

            fn add(self, rhs: &Self) -> Self::Output {
                sum(self, *rhs)
            }
        }

        impl<I: Backing> AddAssign for ExactRational<I> {
            fn add_assign(&mut self, rhs: Self) {
                *self = sum(*self, rhs);
            }
        }

        impl<I: Backing> AddAssign<&ExactRational<I>> for ExactRational<I> {
            fn add_assign(&mut self, rhs: &Self) {
                *self = sum(*self, *rhs);
            }
        }

        impl<I: Backing> Sub for ExactRational<I> {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                sum(self, -rhs)
            }
        }

        impl<I: Backing> Sub<&ExactRational<I>> for ExactRational<I> {
            type Output = Self;

            fn sub(self, rhs: &Self) -> Self::Output {
                sum(self, -*rhs)
            }
        }

        impl<I: Backing> SubAssign for ExactRational<I> {
            fn sub_assign(&mut self, rhs: Self) {
                *self = sum(*self, -rhs);
            }
        }

        impl<I: Backing> SubAssign<&ExactRational<I>> for ExactRational<I> {
            fn sub_assign(&mut self, rhs: &Self) {
                *self = sum(*self, -*rhs);
            }
        }

        impl<I: Backing> Sum for ExactRational<I> {
            fn sum<T: Iterator<Item=Self>>(iter: T) -> Self {
                iter.fold(Self::zero(), sum)
            }
        }
    }

    mod mul {
        use std::iter::Product;
        use std::ops::{Div, DivAssign, Mul, MulAssign};

        use num_traits::One;

        use crate::data::number_types::rational::{Backing, ExactRational};
        use crate::data::number_types::rational::ops::product;

        impl<I: Backing> Mul for ExactRational<I> {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self::Output {
                product(self, rhs)
            }
        }

        impl<I: Backing> Mul<&ExactRational<I>> for ExactRational<I> {
            type Output = Self;

            fn mul(self, rhs: &Self) -> Self::Output {
                product(self, *rhs)
            }
        }

        impl<I: Backing> MulAssign for ExactRational<I> {
            fn mul_assign(&mut self, rhs: Self) {
                *self = product(*self, rhs);
            }
        }

        impl<I: Backing> MulAssign<&ExactRational<I>> for ExactRational<I> {
            fn mul_assign(&mut self, rhs: &Self) {
                *self = product(*self, *rhs);
            }
        }

        impl<I: Backing> Product for ExactRational<I> {
            fn product<T: Iterator<Item=Self>>(iter: T) -> Self {
                iter.fold(Self::one(), product)
            }
        }

        /// Panics when dividing by the exact zero, use `checked_div` to avoid that.
        impl<I: Backing> Div for ExactRational<I> {
            type Output = Self;

            fn div(self, rhs: Self) -> Self::Output {
                match self.checked_div(rhs) {
                    Ok(quotient) => quotient,
                    Err(error) => panic!("{}: {:?} / {:?}", error, self, rhs),
                }
            }
        }

        impl<I: Backing> Div<&ExactRational<I>> for ExactRational<I> {
            type Output = Self;

            fn div(self, rhs: &Self) -> Self::Output {
                self / *rhs
            }
        }

        impl<I: Backing> DivAssign for ExactRational<I> {
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }

        impl<I: Backing> DivAssign<&ExactRational<I>> for ExactRational<I> {
            fn div_assign(&mut self, rhs: &Self) {
                *self = *self / *rhs;
            }
        }
    }
}
