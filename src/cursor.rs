// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! One character of lookahead over a character source.

use crate::parse::{ReadError, ReadErrorWithPos};
use crate::pos::Pos;

pub struct Cursor<I> {
    cs: I,
    lookahead: Option<(char, Pos)>,
    // Set once the source returned None or an error; the source is
    // not asked again after that.
    eof: bool,
    // Position of the next character
    pos: Pos,
}

impl<I> Cursor<I>
    where I: Iterator<Item = anyhow::Result<(char, Pos)>>
{
    pub fn new(cs: I) -> Self {
        Cursor {
            cs,
            lookahead: None,
            eof: false,
            pos: Pos::START,
        }
    }

    fn fill(&mut self) -> Result<(), ReadErrorWithPos> {
        if self.lookahead.is_none() && !self.eof {
            match self.cs.next() {
                Some(Ok(cp)) => {
                    self.pos = cp.1;
                    self.lookahead = Some(cp);
                }
                Some(Err(e)) => {
                    self.eof = true;
                    return Err(ReadError::IO(e).at(self.pos))
                }
                None => self.eof = true,
            }
        }
        Ok(())
    }

    /// The next character without consuming it, or None at end of
    /// input.
    pub fn peek(&mut self) -> Result<Option<char>, ReadErrorWithPos> {
        self.fill()?;
        Ok(self.lookahead.map(|(c, _)| c))
    }

    /// Consume the next character, which the caller requires to
    /// exist.
    pub fn advance(&mut self) -> Result<char, ReadErrorWithPos> {
        self.fill()?;
        if let Some((c, pos)) = self.lookahead.take() {
            self.pos = pos.after(c);
            Ok(c)
        } else {
            Err(ReadError::UnexpectedEndOfInput.at(self.pos))
        }
    }

    /// Position of the next character (or of the end of input).
    pub fn pos(&self) -> Pos {
        self.pos
    }
}
