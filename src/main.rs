// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Program that times populating a block of integers and summing it in a few
//! different ways.

use clap::Parser;
use collbench::{run, BLOCK_SIZE};
use std::io;

fn main() -> io::Result<()> {
    let _cli = Cli::parse();
    env_logger::init();

    let report = run(BLOCK_SIZE);
    if !report.sums_agree() {
        log::warn!("Summation strategies disagree: {report:?}");
    }
    report.write_to(io::stdout().lock())
}

/// Times populating a block of 400000 integers, then summing it with the
/// built-in sum, an explicit loop and a fold.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(version)]
struct Cli {}
