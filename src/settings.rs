// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Settings for reading: accepted syntax variations, the constructors
//! used for symbols and URIs, and resource limits.

use crate::value::Value;
use kstring::KString;
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rationals {
    /// `1/3` reads as an exact `Value::Rational`
    Exact,
    /// `1/3` is recognized but refused with
    /// `ReadError::UnsupportedRational`
    Unsupported,
}

#[derive(Debug)]
pub struct Format {
    /// Refuse escapes in strings and URIs that are neither in the
    /// escape table nor the closing delimiter.
    pub strict_escapes: bool,
    pub rationals: Rationals,
}

pub const SXP_FORMAT : Format = Format {
    strict_escapes: false,
    rationals: Rationals::Exact,
};

pub const STRICT_FORMAT : Format = Format {
    strict_escapes: true,
    rationals: Rationals::Exact,
};

/// Builds the values for bare symbols and bracketed URIs. Hosts that
/// want other representations (e.g. reading `nil` as `Value::Null`)
/// implement this and pass it in via `Settings`.
pub trait Constructors: Debug {
    fn symbol(&self, name: &str) -> Value {
        Value::Symbol(KString::from_ref(name))
    }
    fn uri(&self, text: &str) -> Value {
        Value::Uri(KString::from_ref(text))
    }
}

#[derive(Debug)]
pub struct PlainConstructors;

impl Constructors for PlainConstructors {}

#[derive(Debug)]
pub struct Settings<'t> {
    pub format: &'t Format,
    pub constructors: &'t dyn Constructors,
    /// Maximum list nesting.
    pub depth_limit: u32,
}

pub const DEFAULT_SETTINGS : Settings<'static> = Settings {
    format: &SXP_FORMAT,
    constructors: &PlainConstructors,
    // the native stack overflows somewhere above 1000 in debug builds
    depth_limit: 500,
};
