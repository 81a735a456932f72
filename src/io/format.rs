//! # Formatting
//!
//! Human readable representations of numbers and matrices, with a configurable number of decimals
//! for values that are not exact. Matrices can also be written in a form that Mathematica or MATLAB
//! can read.
use std::fmt;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::data::linear_algebra::matrix::Matrix;
use crate::data::number_types::DEFAULT_PRECISION;
use crate::data::number_types::complex::Complex;
use crate::data::number_types::rational::{Backing, ExactRational};
use crate::data::number_types::traits::Field;

/// Formatting with a bounded number of decimals.
pub trait ToStringWithPrecision {
    /// Represent this value as a string.
    ///
    /// # Arguments
    ///
    /// * `precision`: Maximum number of decimals shown for values that are not exact.
    fn to_string_with_precision(&self, precision: u32) -> String;

    /// Whether the value is written without a fraction bar.
    fn denominator_is_one(&self) -> bool {
        true
    }
}

/// Fixed notation without trailing zeros, unless the value is a very small or very large
/// non-integer, which is written in scientific notation.
impl ToStringWithPrecision for f64 {
    fn to_string_with_precision(&self, precision: u32) -> String {
        let value = *self;
        let is_integer = value.trunc() == value;
        if !is_integer && value.is_finite() && (value.abs() <= 1e-6 || value.abs() >= 1e12) {
            return format!("{:.3E}", value);
        }

        if precision == 0 {
            return format!("{:.0}", value);
        }

        let fixed = format!("{:.precision$}", value, precision = precision as usize);
        if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            fixed
        }
    }
}

/// Exact values are written as `numerator/denominator`, or just the numerator when the
/// denominator is one. Approximate values are written as floats.
impl<I: Backing> ToStringWithPrecision for ExactRational<I> {
    fn to_string_with_precision(&self, precision: u32) -> String {
        match self.exact_parts() {
            Some((numerator, denominator)) if denominator.is_one() => numerator.to_string(),
            Some((numerator, denominator)) => format!("{}/{}", numerator, denominator),
            None => self.to_float().to_string_with_precision(precision),
        }
    }

    fn denominator_is_one(&self) -> bool {
        self.exact_parts().is_none_or(|(_, denominator)| denominator.is_one())
    }
}

/// Zero parts are left out, an imaginary unit is written as just `i`.
impl<F: Field + ToStringWithPrecision> ToStringWithPrecision for Complex<F> {
    fn to_string_with_precision(&self, precision: u32) -> String {
        let tolerance = 10_f64.powi(-(precision as i32));
        let im = self.imag().to_real();

        let real = (self.real().to_real() != 0_f64)
            .then(|| self.real().to_string_with_precision(precision));

        // Whether the imaginary part is subtracted, and its absolute value
        let imaginary = if im == 0_f64 {
            None
        } else if (im - 1_f64).abs() < tolerance {
            Some((false, "i".to_string()))
        } else if (im + 1_f64).abs() < tolerance {
            match real {
                Some(_) => Some((true, "i".to_string())),
                None => Some((false, "-i".to_string())),
            }
        } else {
            let subtracted = im < 0_f64 && real.is_some();
            let value = if subtracted { -self.imag().clone() } else { self.imag().clone() };
            let text = value.to_string_with_precision(precision);
            let text = if value.denominator_is_one() {
                format!("{}i", text)
            } else {
                format!("({})i", text)
            };
            Some((subtracted, text))
        };

        match (real, imaginary) {
            (None, None) => "0".to_string(),
            (Some(real), None) => real,
            (None, Some((_, imaginary))) => imaginary,
            (Some(real), Some((true, imaginary))) => format!("{}-{}", real, imaginary),
            (Some(real), Some((false, imaginary))) => format!("{}+{}", real, imaginary),
        }
    }
}

impl<I: Backing> Display for ExactRational<I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with_precision(DEFAULT_PRECISION))
    }
}

impl<F: Field + ToStringWithPrecision> Display for Complex<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with_precision(DEFAULT_PRECISION))
    }
}

impl<F: Field + ToStringWithPrecision> Matrix<F> {
    /// A table with the values right aligned in columns of equal width.
    ///
    /// The first line contains the shape of the matrix.
    pub fn pretty(&self, precision: u32) -> String {
        let mut output = format!("matrix ({} x {})\n", self.nr_rows(), self.nr_columns());
        if self.size() == 0 {
            return output;
        }

        let cells = self.data().iter()
            .map(|value| value.to_string_with_precision(precision))
            .collect::<Vec<_>>();
        let width = cells.iter().map(String::len).max().unwrap_or(0);

        output.push('\n');
        for row in cells.chunks(self.nr_columns()) {
            let row = row.iter().map(|cell| format!("{:>width$}", cell, width = width)).join(" | ");
            output.push_str(&format!("| {} |\n", row));
        }

        output
    }

    /// Representation as a nested list, `{{a,b},\n{c,d}}`.
    pub fn mathematica_style(&self) -> String {
        let rows = (0..self.nr_rows())
            .map(|i| format!("{{{}}}", self.row(i).iter().map(|value| value.to_string_with_precision(DEFAULT_PRECISION)).join(",")))
            .join(",\n");

        format!("{{{}}}", rows)
    }

    /// Representation as a matrix literal, `[a b;\nc d]`, with all values approximated.
    pub fn matlab_style(&self) -> String {
        let approximate = self.approximate();
        let rows = (0..approximate.nr_rows())
            .map(|i| approximate.row(i).iter().map(|value| value.to_string_with_precision(DEFAULT_PRECISION)).join(" "))
            .join(";\n");

        format!("[{}]", rows)
    }
}

impl<F: Field + ToStringWithPrecision> Display for Matrix<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty(DEFAULT_PRECISION))
    }
}
