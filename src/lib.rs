// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A reader for SXP, a small S-expression notation for configuration
//! and data interchange:
//!
//! * Lists `(a b c)`, symbols, strings `"..."`, URIs `<...>`.
//!
//! * Numbers: integers, decimal floats (`3.14`, `.5`), rationals
//!   (`1/3`), and integers in other bases (`#b101`, `#o17`, `#d42`,
//!   `#xff`).
//!
//! * `#n` (null), `#t`, `#f`, characters `#\c`, datum comments `#;`,
//!   and line comments starting with `;`.
//!
//! Input can be a `&str` or anything implementing `Read`; use
//! `sxp::read::read_all` to get all forms at once, or
//! `sxp::read::forms` / `sxp::read::stream_forms` to pull them one
//! at a time. Values implement `Display`, which writes them back in
//! a form the reader accepts.
//!
//! Reading is synchronous; a reader belongs to one thread at a time,
//! but independent readers share nothing.

pub mod buffered_chars;
pub mod context;
pub mod cursor;
pub mod literal;
pub mod number;
pub mod parse;
pub mod pos;
pub mod read;
pub mod settings;
pub mod token;
pub mod value;
