// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Entry points: read one form or all forms from a string, a byte
//! stream or a file, or iterate lazily over the forms with
//! [Forms](Forms).

use crate::buffered_chars::{buffered_chars, str_chars};
use crate::context::{Context, FileContext};
use crate::parse::{Parser, ReadError, ReadErrorWithPos};
use crate::pos::Pos;
use crate::settings::{Settings, DEFAULT_SETTINGS};
use crate::value::Value;
use std::fmt::{Formatter, Display};
use std::fs::File;
use std::io::{Read, Write};
use std::iter::FusedIterator;
use std::path::Path;
use thiserror::Error;
use tracing::trace;

/// The top-level forms of one input, read lazily in source order.
/// Single pass: after the end of input or the first error, `next`
/// only returns None.
pub struct Forms<'s, I> {
    parser: Parser<'s, I>,
    done: bool,
}

impl<'s, I> Forms<'s, I>
    where I: Iterator<Item = anyhow::Result<(char, Pos)>>
{
    pub fn new(cs: I, settings: &'s Settings<'s>) -> Self {
        Forms {
            parser: Parser::new(cs, settings),
            done: false,
        }
    }

    /// The next form, which must exist.
    pub fn read_one(&mut self) -> Result<Value, ReadErrorWithPos> {
        match self.next() {
            Some(r) => r,
            None => Err(ReadError::UnexpectedEndOfInput.at(self.parser.pos())),
        }
    }

    /// All remaining forms; fails with the first error.
    pub fn read_all(self) -> Result<Vec<Value>, ReadErrorWithPos> {
        self.collect()
    }
}

impl<'s, I> Iterator for Forms<'s, I>
    where I: Iterator<Item = anyhow::Result<(char, Pos)>>
{
    type Item = Result<Value, ReadErrorWithPos>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None
        }
        trace!("reading form at {}", self.parser.pos());
        match self.parser.read_form() {
            Ok(Some(v)) => Some(Ok(v)),
            Ok(None) => {
                trace!("end of input at {}", self.parser.pos());
                self.done = true;
                None
            }
            Err(e) => {
                trace!("form sequence stopped: {}", e);
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<'s, I> FusedIterator for Forms<'s, I>
    where I: Iterator<Item = anyhow::Result<(char, Pos)>> {}

pub fn forms<'s>(
    s: &'s str,
    settings: &'s Settings<'s>,
) -> Forms<'s, impl Iterator<Item = anyhow::Result<(char, Pos)>> + 's>
{
    Forms::new(str_chars(s), settings)
}

pub fn stream_forms<'s, R>(
    fh: R,
    settings: &'s Settings<'s>,
) -> Forms<'s, impl Iterator<Item = anyhow::Result<(char, Pos)>> + 's>
    where R: Read + 's
{
    Forms::new(buffered_chars(fh), settings)
}

/// Read the first form of `s`.
pub fn read(s: &str) -> Result<Value, ReadErrorWithPos> {
    forms(s, &DEFAULT_SETTINGS).read_one()
}

pub fn read_all(s: &str) -> Result<Vec<Value>, ReadErrorWithPos> {
    forms(s, &DEFAULT_SETTINGS).read_all()
}

/// Read the first form from `fh`; the rest of the stream is left
/// unread (but may have been buffered).
pub fn read_stream(fh: impl Read) -> Result<Value, ReadErrorWithPos> {
    stream_forms(fh, &DEFAULT_SETTINGS).read_one()
}

pub fn read_all_stream(fh: impl Read) -> Result<Vec<Value>, ReadErrorWithPos> {
    stream_forms(fh, &DEFAULT_SETTINGS).read_all()
}


#[derive(Error, Debug)]
pub struct ReadErrorWithPosContext {
    pub err_with_pos: ReadErrorWithPos,
    pub container: Box<dyn Context>
}

impl Display for ReadErrorWithPosContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.write_fmt(format_args!("{} ", self.err_with_pos.err))?;
        self.container.format_with_pos(self.err_with_pos.pos, f)
    }
}

#[derive(Error, Debug)]
pub enum ReadErrorWithLocation {
    #[error("{0}")]
    PC(Box<ReadErrorWithPosContext>),
    #[error("{}: {0}", .1.to_string_without_pos())]
    IO(std::io::Error, Box<dyn Context>),
}

impl ReadErrorWithPos {
    pub fn in_file(self, path: &Path) -> ReadErrorWithLocation {
        ReadErrorWithLocation::PC(Box::new(ReadErrorWithPosContext {
            err_with_pos: self,
            container: Box::new(FileContext { path: path.to_path_buf() })
        }))
    }
}

/// Read all forms from the file at `path`. The file is closed when
/// this returns, whether successfully or not.
pub fn read_file_with(
    path: &Path,
    settings: &Settings,
) -> Result<Vec<Value>, ReadErrorWithLocation> {
    tracing::debug!("reading {:?}", path);
    let fh = File::open(path).map_err(|e| ReadErrorWithLocation::IO(
        e,
        Box::new(FileContext { path: path.to_path_buf() })))?;
    stream_forms(fh, settings).read_all().map_err(|e| e.in_file(path))
}

pub fn read_file(path: &Path) -> Result<Vec<Value>, ReadErrorWithLocation> {
    read_file_with(path, &DEFAULT_SETTINGS)
}

/// Write `vals` in their textual form, separated by empty lines.
pub fn write_all<'t>(
    out: impl Write,
    vals: impl IntoIterator<Item = &'t Value>
) -> Result<(), std::io::Error> {
    let mut out = out; // for `File`
    let mut seen_item = false;
    for v in vals.into_iter() {
        writeln!(out, "{}{}", if seen_item {"\n"} else {""}, v)?;
        seen_item = true;
    }
    Ok(())
}
