// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use sxp::value::Value;
use sxp::read::{read_file_with, stream_forms, write_all};
use sxp::settings::{Settings, PlainConstructors, SXP_FORMAT, STRICT_FORMAT};
use clap::Parser as ClapParser;
use std::io::{stdout, BufWriter};
use std::path::PathBuf;
use anyhow::{Result, anyhow};


#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Read the whole file before doing anything (default: one form
    /// at a time)
    #[clap(short, long, value_parser)]
    all: bool,
    /// Print the parsed data
    #[clap(long, value_parser)]
    print: bool,
    /// Refuse unknown escape sequences
    #[clap(short, long, value_parser)]
    strict: bool,
    /// Path to the input file
    #[clap(value_parser, required(true))]
    input_path: PathBuf,
}

fn count_lists(v: &Value) -> usize {
    match v {
        Value::List(items) => 1 + items.iter().map(count_lists).sum::<usize>(),
        _ => 0
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings {
        format: if args.strict { &STRICT_FORMAT } else { &SXP_FORMAT },
        constructors: &PlainConstructors,
        depth_limit: 500,
    };

    if args.all {

        let v: Vec<Value> = read_file_with(&args.input_path, &settings)?;
        if args.print {
            write_all(BufWriter::new(stdout()), &v)?;
        }

    } else {

        // Pull forms one at a time and do some bookkeeping.

        let fh = std::fs::File::open(&args.input_path)?;
        let mut count_toplevel = 0;
        let mut count_lists_total = 0;
        for r in stream_forms(fh, &settings) {
            let v = r.map_err(|e| anyhow!("{:?}: {}", args.input_path, e))?;
            count_toplevel += 1;
            count_lists_total += count_lists(&v);
            if args.print {
                println!("{v}");
            }
        }
        println!(";; count_toplevel = {count_toplevel}, count_lists = {count_lists_total}");

    }
    Ok(())
}
