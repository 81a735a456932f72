//! Shorthands for creating rational numbers, mostly useful in tests.
//!
//! With a single argument, the value is converted from a float using the default precision. With
//! two arguments, it is the exact fraction; a zero denominator panics.

/// Shorthand for creating a `Rational8`.
#[macro_export]
macro_rules! R8 {
    ($value:expr) => {
        $crate::data::number_types::rational::Rational8::from_float(
            $value as f64,
            $crate::data::number_types::DEFAULT_PRECISION,
        )
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::Rational8::new($numer, $denom).unwrap()
    };
}

/// Shorthand for creating a `Rational16`.
#[macro_export]
macro_rules! R16 {
    ($value:expr) => {
        $crate::data::number_types::rational::Rational16::from_float(
            $value as f64,
            $crate::data::number_types::DEFAULT_PRECISION,
        )
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::Rational16::new($numer, $denom).unwrap()
    };
}

/// Shorthand for creating a `Rational32`.
#[macro_export]
macro_rules! R32 {
    ($value:expr) => {
        $crate::data::number_types::rational::Rational32::from_float(
            $value as f64,
            $crate::data::number_types::DEFAULT_PRECISION,
        )
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::Rational32::new($numer, $denom).unwrap()
    };
}

/// Shorthand for creating a `Rational64`.
#[macro_export]
macro_rules! R64 {
    ($value:expr) => {
        $crate::data::number_types::rational::Rational64::from_float(
            $value as f64,
            $crate::data::number_types::DEFAULT_PRECISION,
        )
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::Rational64::new($numer, $denom).unwrap()
    };
}

/// Shorthand for creating a `Rational128`.
#[macro_export]
macro_rules! R128 {
    ($value:expr) => {
        $crate::data::number_types::rational::Rational128::from_float(
            $value as f64,
            $crate::data::number_types::DEFAULT_PRECISION,
        )
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::Rational128::new($numer, $denom).unwrap()
    };
}

/// Shorthand for creating an exact complex number from one or two `Rational64` values.
#[macro_export]
macro_rules! C64 {
    ($re:expr) => {
        $crate::data::number_types::complex::Complex::from($re)
    };
    ($re:expr, $im:expr) => {
        $crate::data::number_types::complex::Complex::new($re, $im)
    };
}
