// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Classification of the next syntactic unit from its first
//! character. Nothing is consumed here; the parser consumes brackets
//! itself and hands everything else to [literal](../literal/index.html).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paren {
    Open,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Paren(Paren),
    /// `#n`, `#t`, `#x1F`, `#\c`, `#;` ..
    Sharp,
    /// `"..."`
    String,
    /// `<...>`
    Uri,
    /// Anything else, up to whitespace or a bracket
    Bare,
}

pub fn maybe_paren(c: char) -> Option<Paren> {
    match c {
        '(' => Some(Paren::Open),
        ')' => Some(Paren::Close),
        _ => None
    }
}

pub fn classify(c: char) -> Token {
    if let Some(p) = maybe_paren(c) {
        return Token::Paren(p)
    }
    match c {
        '#' => Token::Sharp,
        '"' => Token::String,
        '<' => Token::Uri,
        _ => Token::Bare
    }
}

pub fn is_whitespace_char(c: char) -> bool {
    c.is_whitespace()
}

/// Characters that can be part of a bare atom (and of the body of a
/// based integer).
pub fn is_atom_char(c: char) -> bool {
    !is_whitespace_char(c) && maybe_paren(c).is_none()
}
