use super::*;
use pretty_assertions::assert_eq;

fn g(value: f64) -> String {
    format_general(value, SCALAR_DIGITS)
}

#[test]
fn integral_values_have_no_fraction() {
    assert_eq!(g(1.0), "1");
    assert_eq!(g(3.0), "3");
    assert_eq!(g(-42.0), "-42");
    assert_eq!(g(100_000.0), "100000");
}

#[test]
fn fractions_are_trimmed() {
    assert_eq!(g(0.5), "0.5");
    assert_eq!(g(2.25), "2.25");
    assert_eq!(g(-0.125), "-0.125");
}

#[test]
fn fifteen_significant_digits() {
    assert_eq!(g(0.1), "0.1");
    assert_eq!(g(1.0 / 3.0), "0.333333333333333");
    assert_eq!(g(std::f64::consts::PI), "3.14159265358979");
    assert_eq!(g(0.1 + 0.2), "0.3");
}

#[test]
fn small_exponents_stay_fixed() {
    assert_eq!(g(0.0001), "0.0001");
    assert_eq!(g(0.000_123_4), "0.0001234");
}

#[test]
fn scientific_notation_outside_fixed_range() {
    assert_eq!(g(0.000_01), "1e-05");
    assert_eq!(g(1.5e-7), "1.5e-07");
    assert_eq!(g(1e15), "1e+15");
    assert_eq!(g(1e20), "1e+20");
    assert_eq!(g(-2.5e100), "-2.5e+100");
    assert_eq!(g(123_456_789_012_345_680.0), "1.23456789012346e+17");
}

#[test]
fn largest_fixed_value() {
    assert_eq!(g(100_000_000_000_000.0), "100000000000000");
}

#[test]
fn rounding_carries_into_exponent() {
    assert_eq!(g(9.999_999_999_999_999), "10");
    assert_eq!(g(999_999_999_999_999.9), "1e+15");
}

#[test]
fn zero_and_non_finite() {
    assert_eq!(g(0.0), "0");
    assert_eq!(g(-0.0), "-0");
    assert_eq!(g(f64::NAN), "nan");
    assert_eq!(g(f64::INFINITY), "inf");
    assert_eq!(g(f64::NEG_INFINITY), "-inf");
}

#[test]
fn explicit_precision() {
    assert_eq!(format_general(std::f64::consts::PI, 3), "3.14");
    assert_eq!(format_general(1234.0, 2), "1.2e+03");
    assert_eq!(format_general(0.5, 0), "0.5");
}

#[test]
fn encodings() {
    let s = Scalar::new(1.0);
    assert_eq!(s.to_compact_string(), "1");
    assert_eq!(s.to_debug_string(), "1");
    assert_eq!(s.to_xml_string(), "<double>1</double>");
    assert_eq!(Scalar::new(0.25).to_string(), "0.25");
}

#[test]
fn get_and_set() {
    let mut s = Scalar::from(2.0);
    s.set(4.5);
    assert_eq!(s.get(), 4.5);
    assert_eq!(f64::from(s), 4.5);
}

#[test]
fn nan_equals_itself() {
    let nan = Scalar::new(f64::NAN);
    assert_eq!(nan, nan);
    assert_ne!(nan, Scalar::new(0.0));
    assert_eq!(Scalar::new(0.0), Scalar::new(-0.0));
}
