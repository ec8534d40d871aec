// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Decoding of atoms: sharp literals, quoted strings, bracketed URIs
//! and bare atoms. Each reader here starts at the atom's first
//! character and consumes exactly the atom.

use crate::cursor::Cursor;
use crate::number::{is_float, parse_float, parse_integer, parse_rational,
                    split_rational};
use crate::parse::{ReadError, ReadErrorWithPos};
use crate::pos::Pos;
use crate::settings::{Format, Rationals, Settings};
use crate::token::is_atom_char;
use crate::value::Value;
use kstring::KString;

/// Result of reading a sharp literal; a datum comment needs the
/// parser to skip the following form.
#[derive(Debug)]
pub enum Sharp {
    Value(Value),
    DatumComment,
}

/// The escape table, for the character following a backslash.
pub fn decode_escape(c: char) -> Option<char> {
    match c {
        '"' => Some('"'),
        '\\' => Some('\\'),
        '/' => Some('/'),
        'b' => Some('\x08'),
        'f' => Some('\x0C'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        _ => None
    }
}

// The backslash has been consumed already.
fn read_escaped<I>(
    cursor: &mut Cursor<I>,
    delimiter: char,
    format: &Format,
) -> Result<char, ReadErrorWithPos>
    where I: Iterator<Item = anyhow::Result<(char, Pos)>>
{
    let pos = cursor.pos();
    let c = cursor.advance()?;
    if let Some(d) = decode_escape(c) {
        Ok(d)
    } else if format.strict_escapes && c != delimiter {
        Err(ReadError::InvalidEscapedChar(c).at(pos))
    } else {
        Ok(c)
    }
}

/// Read text between an opening and a `close` character, resolving
/// escapes, into `out`.
pub fn read_delimited<I>(
    cursor: &mut Cursor<I>,
    close: char,
    format: &Format,
    out: &mut String,
) -> Result<(), ReadErrorWithPos>
    where I: Iterator<Item = anyhow::Result<(char, Pos)>>
{
    out.clear();
    cursor.advance()?; // the opening character
    loop {
        let c = cursor.advance()?;
        if c == close {
            return Ok(())
        } else if c == '\\' {
            out.push(read_escaped(cursor, close, format)?);
        } else {
            out.push(c);
        }
    }
}

/// Read the maximal run of atom characters into `out`.
pub fn read_literal<I>(
    cursor: &mut Cursor<I>,
    out: &mut String,
) -> Result<(), ReadErrorWithPos>
    where I: Iterator<Item = anyhow::Result<(char, Pos)>>
{
    out.clear();
    while let Some(c) = cursor.peek()? {
        if !is_atom_char(c) {
            break
        }
        out.push(cursor.advance()?);
    }
    Ok(())
}

fn read_based_integer<I>(
    cursor: &mut Cursor<I>,
    radix: u32,
    out: &mut String,
    pos: Pos,
) -> Result<Value, ReadErrorWithPos>
    where I: Iterator<Item = anyhow::Result<(char, Pos)>>
{
    read_literal(cursor, out)?;
    if let Some(n) = parse_integer(out, radix) {
        Ok(Value::Integer(n))
    } else {
        Err(ReadError::InvalidNumberSyntax {
            radix,
            literal: KString::from_ref(out)
        }.at(pos))
    }
}

pub fn read_sharp<I>(
    cursor: &mut Cursor<I>,
    out: &mut String,
) -> Result<Sharp, ReadErrorWithPos>
    where I: Iterator<Item = anyhow::Result<(char, Pos)>>
{
    let pos = cursor.pos();
    cursor.advance()?; // '#'
    let c = cursor.advance()?;
    let v = match c {
        'n' => Value::Null,
        'f' => Value::Bool(false),
        't' => Value::Bool(true),
        'b' => read_based_integer(cursor, 2, out, pos)?,
        'o' => read_based_integer(cursor, 8, out, pos)?,
        'd' => read_based_integer(cursor, 10, out, pos)?,
        'x' => read_based_integer(cursor, 16, out, pos)?,
        '\\' => {
            let c = cursor.advance()?;
            let mut buf = [0; 4];
            Value::String(KString::from_ref(
                decode_escape(c).unwrap_or(c).encode_utf8(&mut buf)))
        }
        ';' => return Ok(Sharp::DatumComment),
        _ => return Err(ReadError::InvalidSharpSyntax(c).at(pos))
    };
    Ok(Sharp::Value(v))
}

/// Classify the text of a bare atom: float, then integer, then
/// rational, else symbol.
pub fn decode_bare(
    s: &str,
    settings: &Settings,
    pos: Pos,
) -> Result<Value, ReadErrorWithPos> {
    if is_float(s) {
        return if let Some(x) = parse_float(s) {
            Ok(Value::Float(x))
        } else {
            // too large for f64
            Err(ReadError::InvalidNumberSyntax {
                radix: 10,
                literal: KString::from_ref(s)
            }.at(pos))
        }
    }
    if let Some(n) = parse_integer(s, 10) {
        return Ok(Value::Integer(n))
    }
    if split_rational(s).is_some() {
        return match settings.format.rationals {
            Rationals::Unsupported =>
                Err(ReadError::UnsupportedRational(KString::from_ref(s)).at(pos)),
            Rationals::Exact => {
                if let Some(r) = parse_rational(s) {
                    Ok(Value::Rational(r))
                } else {
                    // zero denominator
                    Err(ReadError::InvalidNumberSyntax {
                        radix: 10,
                        literal: KString::from_ref(s)
                    }.at(pos))
                }
            }
        }
    }
    Ok(settings.constructors.symbol(s))
}
