// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Grammars and conversion for numeric literals:
//!
//! * float: `[+-]?\d*\.\d*` (the point is mandatory, no exponent)
//! * integer in base 2, 8, 10 or 16: `[+-]?` followed by one or more
//!   digits of that base
//! * rational: `[+-]?\d+/\d+`

use num::{BigInt, BigRational, Num, Zero};

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

fn all_digits(s: &str, radix: u32) -> bool {
    s.chars().all(|c| c.is_digit(radix))
}

pub fn is_float(s: &str) -> bool {
    let (_, body) = split_sign(s);
    if let Some((int, frac)) = body.split_once('.') {
        all_digits(int, 10) && all_digits(frac, 10)
    } else {
        false
    }
}

/// Parses a literal matching the float grammar. A missing integer or
/// fraction part counts as 0, thus `.` alone is 0.0. None also if the
/// value is out of range for f64.
pub fn parse_float(s: &str) -> Option<f64> {
    if !is_float(s) {
        return None
    }
    let (is_neg, body) = split_sign(s);
    let (int, frac) = body.split_once('.')?;
    let normalized = format!("{}.{}",
                             if int.is_empty() { "0" } else { int },
                             if frac.is_empty() { "0" } else { frac });
    let x: f64 = normalized.parse().ok()?;
    if !x.is_finite() {
        return None
    }
    Some(if is_neg { -x } else { x })
}

pub fn is_integer(s: &str, radix: u32) -> bool {
    let (_, digits) = split_sign(s);
    !digits.is_empty() && all_digits(digits, radix)
}

pub fn parse_integer(s: &str, radix: u32) -> Option<BigInt> {
    if !is_integer(s, radix) {
        return None
    }
    let (is_neg, digits) = split_sign(s);
    let n = BigInt::from_str_radix(digits, radix).ok()?;
    Some(if is_neg { -n } else { n })
}

/// Numerator and denominator texts if `s` matches the rational
/// grammar.
pub fn split_rational(s: &str) -> Option<(&str, &str)> {
    let (numer, denom) = s.split_once('/')?;
    if is_integer(numer, 10) && !denom.is_empty() && all_digits(denom, 10) {
        Some((numer, denom))
    } else {
        None
    }
}

/// None if `s` is not a rational or its denominator is zero.
pub fn parse_rational(s: &str) -> Option<BigRational> {
    let (numer, denom) = split_rational(s)?;
    let numer = parse_integer(numer, 10)?;
    let denom = parse_integer(denom, 10)?;
    if denom.is_zero() {
        return None
    }
    Some(BigRational::new(numer, denom))
}
