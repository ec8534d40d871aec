// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Character sources: characters and their positions, either decoded
//! from anything implementing `Read` or taken from an in-memory
//! string. Everything above this module only sees an iterator of
//! `Result<(char, Pos)>`.

use crate::pos::Pos;
use std::io::{self, Read};
use anyhow::{Result, anyhow};
use utf8::BufReadDecoder;
use genawaiter::rc::Gen;


/// Decode `fh` as UTF-8, lazily. Reading blocks whenever `fh` does.
/// Invalid UTF-8 or a failing read is yielded as the last item.
pub fn buffered_chars<R>(
    fh: R
) -> impl Iterator<Item=Result<(char, Pos)>>
    where R: Read
{
    Gen::new(|co| async move {
        let mut inp = BufReadDecoder::new(io::BufReader::new(fh));
        let mut pos = Pos::START;
        while let Some(r) = inp.next_strict() {
            match r {
                Ok(x) => {
                    for c in x.chars() {
                        co.yield_(Ok((c, pos))).await;
                        pos = pos.after(c);
                    }
                }
                Err(e) => {
                    co.yield_(Err(anyhow!("buffered_chars: {}", e))).await;
                    return;
                }
            }
        }
    }).into_iter()
}

/// The characters of an in-memory text; never fails.
pub fn str_chars(
    s: &str
) -> impl Iterator<Item=Result<(char, Pos)>> + '_
{
    s.chars().scan(Pos::START, |pos, c| {
        let here = *pos;
        *pos = here.after(c);
        Some(Ok((c, here)))
    })
}
