// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Runtime data type representing a parsed S-expression.

//! [Value](Value) is a closed sum type; lists are Rust vectors owned
//! by the caller once returned. Symbol and Uri carry text just like
//! String but stay distinguishable, e.g. so that writers don't quote
//! them.

use kstring::KString;
use num::{BigInt, BigRational};
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(BigInt),
    Float(f64),
    Rational(BigRational),
    String(KString),
    Symbol(KString),
    Uri(KString),
    List(Vec<Value>),
}

impl Value {
    pub fn symbol(s: &str) -> Value {
        Value::Symbol(KString::from_ref(s))
    }

    pub fn string(s: &str) -> Value {
        Value::String(KString::from_ref(s))
    }

    pub fn uri(s: &str) -> Value {
        Value::Uri(KString::from_ref(s))
    }

    pub fn integer(n: impl Into<BigInt>) -> Value {
        Value::Integer(n.into())
    }

    /// The text of a String, Symbol or Uri.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Symbol(s) | Value::Uri(s) => Some(s.as_str()),
            _ => None
        }
    }
}

/// The reverse of the reader's escape table, for the characters that
/// must not appear raw in delimited text.
pub fn char2escape(c: char) -> Option<char> {
    match c {
        '\x08' => Some('b'),
        '\x0C' => Some('f'),
        '\n' => Some('n'),
        '\r' => Some('r'),
        '\t' => Some('t'),
        '\\' => Some('\\'),
        _ => None
    }
}

fn fmt_delimited(f: &mut std::fmt::Formatter<'_>,
                 open: char,
                 close: char,
                 s: &str)
                 -> Result<(), std::fmt::Error> {
    f.write_char(open)?;
    for c in s.chars() {
        if c == close {
            f.write_char('\\')?;
            f.write_char(c)?;
        } else if let Some(e) = char2escape(c) {
            f.write_char('\\')?;
            f.write_char(e)?;
        } else {
            f.write_char(c)?;
        }
    }
    f.write_char(close)
}

fn fmt_float(f: &mut std::fmt::Formatter<'_>, x: f64)
             -> Result<(), std::fmt::Error> {
    // Display never uses exponent notation, but drops the point for
    // integral values, which would then read back as integers.
    let s = x.to_string();
    f.write_str(&s)?;
    if x.is_finite() && !s.contains('.') {
        f.write_str(".0")?;
    }
    Ok(())
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        match self {
            Value::Null => f.write_str("#n"),
            Value::Bool(b) => f.write_str(if *b { "#t" } else { "#f" }),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(x) => fmt_float(f, *x),
            // Not Ratio's own Display, which leaves out a denominator
            // of 1.
            Value::Rational(r) => write!(f, "{}/{}", r.numer(), r.denom()),
            Value::String(s) => fmt_delimited(f, '"', '"', s),
            Value::Uri(s) => fmt_delimited(f, '<', '>', s),
            Value::Symbol(s) => f.write_str(s),
            Value::List(v) => {
                f.write_char('(')?;
                for (i, item) in v.iter().enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_char(')')
            }
        }
    }
}

/// Easily create a list
pub fn list(vals: impl IntoIterator<Item = Value>) -> Value {
    Value::List(vals.into_iter().collect())
}
