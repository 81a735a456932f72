//! # Greatest common divisor
//!
//! Binary (Stein's) algorithm, which only needs shifts, subtractions and comparisons.
use num_traits::{PrimInt, Signed};

/// Greatest common divisor of the absolute values of two integers.
///
/// By convention, `gcd(0, x) = gcd(x, 0) = |x|`.
///
/// # Arguments
///
/// * `a`, `b`: Integers of which the absolute value can be represented, so not the minimum value
/// of the type.
///
/// # Return value
///
/// A non negative integer.
pub fn gcd<I: PrimInt + Signed>(a: I, b: I) -> I {
    debug_assert!(a != I::min_value() && b != I::min_value());

    let mut u = a.abs();
    let mut v = b.abs();

    if u.is_zero() || v.is_zero() {
        return u | v;
    }

    // Largest power of two dividing both
    let mut shift = 0_usize;
    while ((u | v) & I::one()).is_zero() {
        u = u >> 1_usize;
        v = v >> 1_usize;
        shift += 1;
    }

    while (u & I::one()).is_zero() {
        u = u >> 1_usize;
    }

    // From here on, `u` is always odd
    loop {
        while (v & I::one()).is_zero() {
            v = v >> 1_usize;
        }

        // Both odd, so the difference is even
        if u < v {
            v = v - u;
        } else {
            let difference = u - v;
            u = v;
            v = difference;
        }
        v = v >> 1_usize;

        if v.is_zero() {
            break;
        }
    }

    u << shift
}
