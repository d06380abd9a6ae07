// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Runner that executes the timed phases in a fixed order and reports them.

use crate::block::populate;
use crate::macros::log_info;
use crate::sum::{builtin_sum, fold_sum, loop_sum};
use crate::timing::{timed, Timed};
use std::fmt::{self, Display};
use std::io::{self, Write};

/// Results of one run of all the phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Report {
    /// Populating the block, and the resulting number of items.
    pub populate: Timed<usize>,
    /// Summing the block with the built-in reduction.
    pub builtin_sum: Timed<u64>,
    /// Summing the block with an explicit loop.
    pub loop_sum: Timed<u64>,
    /// Summing the block with an unseeded fold, undefined for an empty block.
    pub fold_sum: Timed<Option<u64>>,
}

/// Runs the four phases sequentially on the block `1..=upper`.
///
/// Each phase completes before the next one starts, and the block is only read
/// after the populate phase.
///
/// ```
/// # use collbench::runner::run;
/// let report = run(100);
/// assert_eq!(report.populate.value, 100);
/// assert_eq!(report.builtin_sum.value, 5_050);
/// assert_eq!(report.loop_sum.value, 5_050);
/// assert_eq!(report.fold_sum.value, Some(5_050));
/// ```
pub fn run(upper: u64) -> Report {
    log_info!("Running phases on a block of {upper} items.");

    let Timed {
        elapsed,
        value: block,
    } = timed("populate", || populate(upper));
    let populate = Timed {
        elapsed,
        value: block.len(),
    };

    let builtin_sum = timed("built-in sum", || builtin_sum(&block));
    let loop_sum = timed("explicit-loop sum", || loop_sum(&block));
    let fold_sum = timed("fold sum", || fold_sum(&block));

    Report {
        populate,
        builtin_sum,
        loop_sum,
        fold_sum,
    }
}

impl Report {
    /// Returns whether all the summation phases produced the same value.
    pub fn sums_agree(&self) -> bool {
        let sum = self.builtin_sum.value;
        self.loop_sum.value == sum && self.fold_sum.value.map_or(sum == 0, |s| s == sum)
    }

    /// Writes the report to the given writer, as two lines per phase.
    pub fn write_to(&self, mut writer: impl Write) -> io::Result<()> {
        write!(writer, "{self}")?;
        writer.flush()
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total populating time: {}", self.populate.secs())?;
        writeln!(f, "Populated block size: {}", self.populate.value)?;
        writeln!(f, "Total built-in-sum time: {}", self.builtin_sum.secs())?;
        writeln!(f, "Sum result: {}", self.builtin_sum.value)?;
        writeln!(f, "Total explicit-loop time: {}", self.loop_sum.secs())?;
        writeln!(f, "Sum result: {}", self.loop_sum.value)?;
        writeln!(f, "Total fold time: {}", self.fold_sum.secs())?;
        match self.fold_sum.value {
            Some(sum) => writeln!(f, "Sum result: {sum}"),
            None => writeln!(f, "Sum result: none"),
        }
    }
}
