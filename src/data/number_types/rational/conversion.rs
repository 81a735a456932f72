//! # Floating point to fraction conversion
//!
//! Decimal scaling heuristic: a float is read as a decimal number with a bounded amount of digits
//! after the point, which is then written as a fraction with a power of ten as denominator.
use log::debug;
use num_traits::Zero;

use crate::data::number_types::rational::Backing;

/// Try to represent a floating point value as a fraction of two integers of type `I`.
///
/// The fraction is found by scaling the value with a power of ten and rounding. That power is the
/// largest one that still fits in `I` when multiplied by the value, but it never exceeds the
/// requested `precision`, nor the number of decimal digits that `f64` can express. Limiting the
/// scale to `precision` digits suppresses floating point noise for "round" values like `0.1`.
///
/// # Arguments
///
/// * `value`: Value to convert.
/// * `precision`: Maximum number of decimal digits after the point that are kept.
///
/// # Return value
///
/// `None` if the integer part of the value doesn't fit in `I` (or the value is not finite).
/// Otherwise, a numerator and a positive denominator. They are not necessarily coprime.
pub fn float_to_rational<I: Backing>(value: f64, precision: u32) -> Option<(I, I)> {
    if !value.is_finite() {
        debug!("Can't represent {} as a fraction", value);
        return None;
    }

    let negative = value < 0_f64;
    let magnitude = value.abs();
    let integer_part = magnitude.trunc();
    let fractional_part = magnitude.fract();

    if fractional_part.is_zero() {
        // This includes a magnitude of zero or one
        if integer_part >= I::max_value().to_float() {
            debug!("Integer value {} doesn't fit in a fraction", value);
            return None;
        }

        let numerator = I::from_f64(integer_part)?;
        let numerator = if negative { -numerator } else { numerator };
        return Some((numerator, I::one()));
    }

    let order = magnitude.log10();
    let order = (if order >= 0_f64 { order.ceil() } else { order.floor() }) as i32;

    let mut exponent = f64::from(I::DIGITS10 - order.max(0));
    if exponent < 0_f64 {
        // The integer part alone is too big for `I`
        debug!("Value {} is too large to be written as a fraction", value);
        return None;
    }

    // Only relevant when `I` can represent more digits than the float
    let float_digits = f64::MAX.log10();
    if exponent >= float_digits {
        exponent = float_digits - 1_f64;
    }
    exponent = exponent.min(f64::from(precision));

    let scale = 10_f64.powf(exponent);
    let numerator = I::from_f64((magnitude * scale).round())?;
    let denominator = I::from_f64(scale.round())?;
    let numerator = if negative { -numerator } else { numerator };

    Some((numerator, denominator))
}
