// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Recursive descent from characters to values. Whitespace and
//! comments are skipped before every token; atoms are decoded by
//! [literal](../literal/index.html), lists are read here. See
//! [read](../read/index.html) for the entry points.

use crate::cursor::Cursor;
use crate::literal::{self, Sharp};
use crate::pos::Pos;
use crate::settings::Settings;
use crate::token::{classify, is_whitespace_char, Paren, Token};
use crate::value::Value;
use kstring::KString;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("IO error ({0}) after")]
    IO(anyhow::Error),
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("unexpected list terminator ')'")]
    UnmatchedListTerminator,
    #[error("invalid sharp-sign read syntax: '#{0}'")]
    InvalidSharpSyntax(char),
    #[error("illegal base-{radix} number syntax: \"{}\"", .literal.as_str())]
    InvalidNumberSyntax { radix: u32, literal: KString },
    #[error("invalid escaped character '{0}'")]
    InvalidEscapedChar(char),
    #[error("rational numbers are not supported: \"{}\"", .0.as_str())]
    UnsupportedRational(KString),
    #[error("nesting too deep")]
    NestingTooDeep,
}

#[derive(Error, Debug)]
#[error("{err} {pos}")]
pub struct ReadErrorWithPos {
    pub err: ReadError,
    pub pos: Pos
}

impl ReadError {
    pub fn at(self, p: Pos) -> ReadErrorWithPos {
        ReadErrorWithPos {
            err: self,
            pos: p
        }
    }
}

/// What a single read step found: a value, or the closing bracket of
/// the enclosing list.
#[derive(Debug)]
pub enum Item {
    Value(Value),
    ListEnd(Pos),
}

pub struct Parser<'s, I> {
    cursor: Cursor<I>,
    settings: &'s Settings<'s>,
    tmp: String,
}

impl<'s, I> Parser<'s, I>
    where I: Iterator<Item = anyhow::Result<(char, Pos)>>
{
    pub fn new(cs: I, settings: &'s Settings<'s>) -> Self {
        Parser {
            cursor: Cursor::new(cs),
            settings,
            tmp: String::new(),
        }
    }

    pub fn pos(&self) -> Pos {
        self.cursor.pos()
    }

    // Line comments run up to and including the newline, or to the
    // end of input.
    fn skip_atmosphere(&mut self) -> Result<(), ReadErrorWithPos> {
        while let Some(c) = self.cursor.peek()? {
            if c == ';' {
                while let Some(c) = self.cursor.peek()? {
                    self.cursor.advance()?;
                    if c == '\n' {
                        break
                    }
                }
            } else if is_whitespace_char(c) {
                self.cursor.advance()?;
            } else {
                break
            }
        }
        Ok(())
    }

    /// Read one top-level form; None at the end of input. A closing
    /// bracket here has no list to close and is an error.
    pub fn read_form(&mut self) -> Result<Option<Value>, ReadErrorWithPos> {
        match self.read_value(self.settings.depth_limit)? {
            None => Ok(None),
            Some(Item::Value(v)) => Ok(Some(v)),
            Some(Item::ListEnd(pos)) =>
                Err(ReadError::UnmatchedListTerminator.at(pos)),
        }
    }

    /// Read the next value or list terminator; None if the input
    /// ends before a token starts.
    pub fn read_value(
        &mut self,
        depth_fuel: u32,
    ) -> Result<Option<Item>, ReadErrorWithPos> {
        loop {
            self.skip_atmosphere()?;
            let c = match self.cursor.peek()? {
                None => return Ok(None),
                Some(c) => c
            };
            let pos = self.cursor.pos();
            let item = match classify(c) {
                Token::Paren(Paren::Open) => {
                    self.cursor.advance()?;
                    if depth_fuel == 0 {
                        return Err(ReadError::NestingTooDeep.at(pos))
                    }
                    Item::Value(Value::List(self.read_list(depth_fuel - 1)?))
                }
                Token::Paren(Paren::Close) => {
                    self.cursor.advance()?;
                    Item::ListEnd(pos)
                }
                Token::Sharp => {
                    match literal::read_sharp(&mut self.cursor, &mut self.tmp)? {
                        Sharp::Value(v) => Item::Value(v),
                        Sharp::DatumComment => {
                            if depth_fuel == 0 {
                                return Err(ReadError::NestingTooDeep.at(pos))
                            }
                            // A list terminator in place of the datum
                            // still closes its list.
                            match self.read_value(depth_fuel - 1)? {
                                None => return Err(
                                    ReadError::UnexpectedEndOfInput
                                        .at(self.cursor.pos())),
                                Some(Item::ListEnd(pos)) =>
                                    return Ok(Some(Item::ListEnd(pos))),
                                Some(Item::Value(_)) => continue,
                            }
                        }
                    }
                }
                Token::String => {
                    literal::read_delimited(&mut self.cursor, '"',
                                            self.settings.format, &mut self.tmp)?;
                    Item::Value(Value::String(KString::from_ref(&self.tmp)))
                }
                Token::Uri => {
                    literal::read_delimited(&mut self.cursor, '>',
                                            self.settings.format, &mut self.tmp)?;
                    Item::Value(self.settings.constructors.uri(&self.tmp))
                }
                Token::Bare => {
                    literal::read_literal(&mut self.cursor, &mut self.tmp)?;
                    Item::Value(literal::decode_bare(&self.tmp, self.settings, pos)?)
                }
            };
            return Ok(Some(item))
        }
    }

    /// Read list elements after the opening bracket, up to and
    /// including the matching closing bracket.
    pub fn read_list(
        &mut self,
        depth_fuel: u32,
    ) -> Result<Vec<Value>, ReadErrorWithPos> {
        let mut v = Vec::new();
        loop {
            match self.read_value(depth_fuel)? {
                Some(Item::Value(x)) => v.push(x),
                Some(Item::ListEnd(_)) => return Ok(v),
                None => return Err(
                    ReadError::UnexpectedEndOfInput.at(self.cursor.pos())),
            }
        }
    }
}
