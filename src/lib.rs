// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![doc = include_str!("../README.md")]
#![forbid(missing_docs, unsafe_code)]

pub mod block;
mod macros;
pub mod runner;
pub mod sum;
pub mod timing;

pub use runner::{run, Report};
pub use sum::SumStrategy;
pub use timing::{timed, Timed};

/// Number of integers in the block that the executable populates and sums.
pub const BLOCK_SIZE: u64 = 400_000;
