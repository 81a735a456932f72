//! # Rational numbers
//!
//! Exact as long as possible, approximate afterwards.
//!
//! A rational is stored as a numerator and denominator in a fixed size integer type. Before an
//! arithmetic operation is performed exactly, its result is estimated in floating point. If that
//! estimate, or any of the intermediate products needed for the exact computation, is out of the
//! range of the integer type, the exact computation is not attempted and the result is stored as a
//! floating point value instead. Once a value is approximate, everything computed from it is
//! approximate too.
//!
//! Equality is approximate: values are compared through their floating point projection, with a
//! small absolute tolerance. This is also the case for two exact values.
use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use log::debug;
use num_traits::{FromPrimitive, One, PrimInt, Signed, ToPrimitive, Zero};

use crate::data::number_types::{DEFAULT_PRECISION, equality_tolerance};
use crate::data::number_types::rational::conversion::float_to_rational;
use crate::data::number_types::rational::gcd::gcd;
use crate::data::number_types::traits::Field;
use crate::error::{Error, Result};

pub mod conversion;
pub mod gcd;
mod ops;
mod macros;

/// Rational backed by an `i8`.
pub type Rational8 = ExactRational<i8>;
/// Rational backed by an `i16`.
pub type Rational16 = ExactRational<i16>;
/// Rational backed by an `i32`.
pub type Rational32 = ExactRational<i32>;
/// Rational backed by an `i64`.
pub type Rational64 = ExactRational<i64>;
/// Rational backed by an `i128`.
pub type Rational128 = ExactRational<i128>;

/// Integer types that can hold the numerator and denominator of an `ExactRational`.
pub trait Backing: PrimInt + Signed + FromPrimitive + Debug + Display {
    /// Number of decimal digits that can be represented without change.
    const DIGITS10: i32;

    /// Nearest floating point value.
    fn to_float(self) -> f64;
}

macro_rules! impl_backing {
    ($t:ty, $digits:expr) => {
        impl Backing for $t {
            const DIGITS10: i32 = $digits;

            fn to_float(self) -> f64 {
                self as f64
            }
        }
    };
}
impl_backing!(i8, 2);
impl_backing!(i16, 4);
impl_backing!(i32, 9);
impl_backing!(i64, 18);
impl_backing!(i128, 38);

/// Whether a value can't safely be stored in `I`.
///
/// Both extremes count as out of range, the minimum value can't be negated.
pub(crate) fn out_of_range<I: Backing>(value: f64) -> bool {
    !value.is_finite()
        || value <= I::min_value().to_float()
        || value >= I::max_value().to_float()
}

/// A rational number that is exact until that can't be guaranteed anymore.
#[derive(Copy, Clone, Debug)]
pub struct ExactRational<I> {
    inner: Inner<I>,
}

/// Either of the two representations.
///
/// Invariant for `Exact`: the denominator is positive, the numerator and denominator are coprime
/// and neither equals the minimum value of `I`. Invariant for `Approximate`: the value is nonzero,
/// zero is always represented exactly.
#[derive(Copy, Clone, Debug)]
enum Inner<I> {
    Exact { numerator: I, denominator: I },
    Approximate(f64),
}

impl<I: Backing> ExactRational<I> {
    /// Create a new exact rational.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Any value.
    /// * `denominator`: Any nonzero value.
    ///
    /// # Return value
    ///
    /// The value in lowest terms, with a positive denominator.
    ///
    /// # Errors
    ///
    /// `Error::DivisionByZero` if the denominator is zero.
    pub fn new(numerator: I, denominator: I) -> Result<Self> {
        if denominator.is_zero() {
            return Err(Error::DivisionByZero);
        }

        Ok(Self::normalized(numerator, denominator))
    }

    /// Create a value from a float.
    ///
    /// If the float can be written as a fraction with at most `precision` decimal digits after the
    /// point that fits in `I`, the value is exact. Otherwise, it is approximate.
    pub fn from_float(value: f64, precision: u32) -> Self {
        match float_to_rational::<I>(value, precision) {
            Some((numerator, denominator)) => Self::normalized(numerator, denominator),
            None => {
                debug!("Storing {} as an approximate value", value);
                Self::approximate(value)
            },
        }
    }

    /// Create an approximate value.
    ///
    /// Zero is always exact, so a zero value results in the exact zero.
    pub fn approximate(value: f64) -> Self {
        if value == 0_f64 {
            Self::zero()
        } else {
            Self { inner: Inner::Approximate(value) }
        }
    }

    /// Bring a fraction in lowest terms with a positive denominator.
    ///
    /// Fractions containing the minimum value of `I` can't be normalized without overflow, they
    /// are stored approximately.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Any value.
    /// * `denominator`: Any nonzero value.
    pub(crate) fn normalized(numerator: I, denominator: I) -> Self {
        debug_assert!(!denominator.is_zero());

        if numerator == I::min_value() || denominator == I::min_value() {
            return Self::approximate(numerator.to_float() / denominator.to_float());
        }

        let (numerator, denominator) = if denominator.is_negative() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };

        let divisor = gcd(numerator, denominator);
        Self {
            inner: Inner::Exact {
                numerator: numerator / divisor,
                denominator: denominator / divisor,
            },
        }
    }

    /// Whether the exact representation was abandoned.
    pub fn is_approximate(&self) -> bool {
        matches!(self.inner, Inner::Approximate(_))
    }

    /// Whether this is the exact zero.
    ///
    /// Unlike `Zero::is_zero`, this does not use any tolerance.
    pub fn is_exact_zero(&self) -> bool {
        match self.inner {
            Inner::Exact { numerator, .. } => numerator.is_zero(),
            Inner::Approximate(_) => false,
        }
    }

    /// Numerator and denominator, if the value is exact.
    ///
    /// The denominator is positive and the two are coprime.
    pub fn exact_parts(&self) -> Option<(I, I)> {
        match self.inner {
            Inner::Exact { numerator, denominator } => Some((numerator, denominator)),
            Inner::Approximate(_) => None,
        }
    }

    /// Floating point projection of the value.
    pub fn to_float(&self) -> f64 {
        match self.inner {
            Inner::Exact { numerator, denominator } => numerator.to_float() / denominator.to_float(),
            Inner::Approximate(value) => value,
        }
    }

    /// The numerator as a float, or the whole value if it is approximate.
    pub fn float_numerator(&self) -> f64 {
        match self.inner {
            Inner::Exact { numerator, .. } => numerator.to_float(),
            Inner::Approximate(value) => value,
        }
    }

    /// The denominator as a float, or one if the value is approximate.
    pub fn float_denominator(&self) -> f64 {
        match self.inner {
            Inner::Exact { denominator, .. } => denominator.to_float(),
            Inner::Approximate(_) => 1_f64,
        }
    }

    /// The same value, with its exact representation abandoned.
    pub fn to_approximate(&self) -> Self {
        Self::approximate(self.to_float())
    }

    /// Divide, failing rather than panicking when dividing by the exact zero.
    ///
    /// # Errors
    ///
    /// `Error::DivisionByZero` if `rhs` is the exact zero.
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        match rhs.inner {
            Inner::Exact { numerator, denominator } => {
                if numerator.is_zero() {
                    Err(Error::DivisionByZero)
                } else {
                    Ok(self * Self::normalized(denominator, numerator))
                }
            },
            Inner::Approximate(value) => Ok(self * Self::approximate(1_f64 / value)),
        }
    }
}

impl<I: Backing> Default for ExactRational<I> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<I: Backing> From<I> for ExactRational<I> {
    fn from(value: I) -> Self {
        Self::normalized(value, I::one())
    }
}

impl<I: Backing> Zero for ExactRational<I> {
    fn zero() -> Self {
        Self { inner: Inner::Exact { numerator: I::zero(), denominator: I::one() } }
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl<I: Backing> One for ExactRational<I> {
    fn one() -> Self {
        Self { inner: Inner::Exact { numerator: I::one(), denominator: I::one() } }
    }
}

impl<I: Backing> PartialEq for ExactRational<I> {
    fn eq(&self, other: &Self) -> bool {
        (self.to_float() - other.to_float()).abs() <= equality_tolerance()
    }
}

impl<I: Backing> PartialOrd for ExactRational<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_float().partial_cmp(&other.to_float())
    }
}

impl<I: Backing> FromPrimitive for ExactRational<I> {
    fn from_i64(n: i64) -> Option<Self> {
        Some(match I::from_i64(n) {
            Some(value) => Self::from(value),
            None => Self::approximate(n as f64),
        })
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(match I::from_u64(n) {
            Some(value) => Self::from(value),
            None => Self::approximate(n as f64),
        })
    }

    fn from_f64(n: f64) -> Option<Self> {
        if n.is_finite() {
            Some(Self::from_float(n, DEFAULT_PRECISION))
        } else {
            None
        }
    }
}

/// Integer conversions truncate towards zero.
impl<I: Backing> ToPrimitive for ExactRational<I> {
    fn to_i64(&self) -> Option<i64> {
        match self.inner {
            Inner::Exact { numerator, denominator } => (numerator / denominator).to_i64(),
            Inner::Approximate(value) => value.to_i64(),
        }
    }

    fn to_u64(&self) -> Option<u64> {
        match self.inner {
            Inner::Exact { numerator, denominator } => (numerator / denominator).to_u64(),
            Inner::Approximate(value) => value.to_u64(),
        }
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.to_float())
    }
}

impl<I: Backing> Field for ExactRational<I> {
    fn to_real(&self) -> f64 {
        self.to_float()
    }

    fn from_real(value: f64) -> Self {
        Self::from_float(value, DEFAULT_PRECISION)
    }

    fn to_approximate(&self) -> Self {
        ExactRational::to_approximate(self)
    }
}
