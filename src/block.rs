// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Construction of the block of integers that the summation phases read.

/// Builds the block `1..=upper` by appending each integer in increasing order
/// to an initially empty [`Vec`].
///
/// No capacity is reserved upfront, so the cost of growing the vector is part
/// of what the populate phase measures.
///
/// ```
/// # use collbench::block::populate;
/// let block = populate(5);
/// assert_eq!(block, [1, 2, 3, 4, 5]);
/// ```
pub fn populate(upper: u64) -> Vec<u64> {
    let mut block = Vec::new();
    for i in 1..=upper {
        block.push(i);
    }
    block
}
