//! Scalar leaf values and their numeric text form.

use std::fmt;

use crate::emitter::Emitter;
use crate::encode::{Encode, Encoding};

/// Significant decimal digits written for a scalar.
///
/// This is the number of decimal digits an `f64` is guaranteed to carry
/// through a text round trip.
pub const SCALAR_DIGITS: usize = f64::DIGITS as usize;

/// A single double-precision number.
#[derive(Copy, Clone, Debug, Default)]
pub struct Scalar(f64);

impl Scalar {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Scalar(value)
    }

    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn set(&mut self, value: f64) {
        self.0 = value;
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar(value)
    }
}

impl From<Scalar> for f64 {
    fn from(scalar: Scalar) -> Self {
        scalar.0
    }
}

/// Numeric equality, except that a NaN equals a NaN with the same bits, so
/// a tree holding NaN still compares equal to its own clone. `0.0` and
/// `-0.0` stay equal.
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits() || self.0 == other.0
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_general(self.0, SCALAR_DIGITS))
    }
}

impl Encode for Scalar {
    fn encode(&self, encoding: Encoding, out: &mut dyn Emitter) {
        let text = format_general(self.0, SCALAR_DIGITS);
        match encoding {
            Encoding::Compact | Encoding::Debug => out.emit(&text),
            Encoding::Xml => {
                out.emit("<double>");
                out.emit(&text);
                out.emit("</double>");
            }
        }
    }
}

/// Format `value` with `precision` significant digits using the `%g` rules.
///
/// Fixed notation is used when the decimal exponent lies in
/// `-4..precision`, scientific notation otherwise. Trailing fractional
/// zeros are removed in both, and scientific exponents carry an explicit
/// sign and at least two digits (`1e+20`, `1.5e-07`).
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);
    // Rounding to `precision` digits can carry into the exponent
    // (9.99..e2 -> 1e3), so read the exponent after rounding.
    let scientific = format!("{value:.prec$e}", prec = precision - 1);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    let limit = i32::try_from(precision).unwrap_or(i32::MAX);
    if exponent < -4 || exponent >= limit {
        let sign = if exponent < 0 { '-' } else { '+' };
        let magnitude = exponent.unsigned_abs();
        format!("{}e{sign}{magnitude:02}", trim_fraction(mantissa))
    } else {
        let decimals = usize::try_from(limit - 1 - exponent).unwrap_or(0);
        let fixed = format!("{value:.decimals$}");
        trim_fraction(&fixed).to_string()
    }
}

/// Strip trailing zeros after a decimal point, then a dangling point.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
mod tests;
