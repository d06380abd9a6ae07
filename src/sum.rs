// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Strategies to sum a block of integers.
//!
//! All strategies read their input through [`black_box()`] so that the
//! optimizer can't precompute the result for a known input.

use std::fmt::{self, Display};
use std::hint::black_box;

/// Strategy to sum a block of integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SumStrategy {
    /// Sum with [`Iterator::sum()`].
    BuiltIn,
    /// Add each item to an accumulator initialized to zero, in a `for` loop.
    ExplicitLoop,
    /// Left fold without an initial accumulator, seeded by the first item.
    Fold,
    /// Left fold with an initial accumulator of zero.
    SeededFold,
}

impl SumStrategy {
    /// All the strategies, in the order in which they're usually reported.
    pub const ALL: [SumStrategy; 4] = [
        SumStrategy::BuiltIn,
        SumStrategy::ExplicitLoop,
        SumStrategy::Fold,
        SumStrategy::SeededFold,
    ];

    /// Sums the given block with this strategy.
    ///
    /// Returns [`None`] only for the [`Fold`](Self::Fold) strategy on an empty
    /// block.
    ///
    /// ```
    /// # use collbench::sum::SumStrategy;
    /// let block = [1, 2, 3, 4];
    /// for strategy in SumStrategy::ALL {
    ///     assert_eq!(strategy.apply(&block), Some(10));
    /// }
    /// assert_eq!(SumStrategy::Fold.apply(&[]), None);
    /// assert_eq!(SumStrategy::SeededFold.apply(&[]), Some(0));
    /// ```
    pub fn apply(self, block: &[u64]) -> Option<u64> {
        match self {
            SumStrategy::BuiltIn => Some(builtin_sum(block)),
            SumStrategy::ExplicitLoop => Some(loop_sum(block)),
            SumStrategy::Fold => fold_sum(block),
            SumStrategy::SeededFold => Some(seeded_fold_sum(block)),
        }
    }

    /// Short name of this strategy, as used in benchmark identifiers.
    pub fn name(self) -> &'static str {
        match self {
            SumStrategy::BuiltIn => "built-in",
            SumStrategy::ExplicitLoop => "explicit-loop",
            SumStrategy::Fold => "fold",
            SumStrategy::SeededFold => "seeded-fold",
        }
    }
}

impl Display for SumStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sums the block with the standard library's [`Iterator::sum()`].
pub fn builtin_sum(block: &[u64]) -> u64 {
    black_box(block).iter().sum::<u64>()
}

/// Sums the block by adding each item in order to an accumulator starting at
/// zero.
pub fn loop_sum(block: &[u64]) -> u64 {
    let mut sum = 0;
    for &x in black_box(block) {
        sum += x;
    }
    sum
}

/// Sums the block with a left fold whose first item seeds the accumulator.
///
/// There is no initial value, so the sum of an empty block is undefined and
/// this returns [`None`].
pub fn fold_sum(block: &[u64]) -> Option<u64> {
    black_box(block).iter().copied().reduce(|x, y| x + y)
}

/// Sums the block with a left fold starting from zero.
pub fn seeded_fold_sum(block: &[u64]) -> u64 {
    black_box(block).iter().fold(0, |acc, &x| acc + x)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::block::populate;
    use crate::BLOCK_SIZE;

    const EXPECTED_SUM: u64 = 80_000_200_000;

    #[test]
    fn test_expected_sum_formula() {
        assert_eq!(EXPECTED_SUM, BLOCK_SIZE * (BLOCK_SIZE + 1) / 2);
        // The sum doesn't fit in 32 bits.
        assert!(EXPECTED_SUM > u32::MAX as u64);
    }

    #[test]
    fn test_builtin_sum() {
        let block = populate(BLOCK_SIZE);
        assert_eq!(builtin_sum(&block), EXPECTED_SUM);
    }

    #[test]
    fn test_loop_sum() {
        let block = populate(BLOCK_SIZE);
        assert_eq!(loop_sum(&block), EXPECTED_SUM);
    }

    #[test]
    fn test_fold_sum() {
        let block = populate(BLOCK_SIZE);
        assert_eq!(fold_sum(&block), Some(EXPECTED_SUM));
    }

    #[test]
    fn test_seeded_fold_sum() {
        let block = populate(BLOCK_SIZE);
        assert_eq!(seeded_fold_sum(&block), EXPECTED_SUM);
    }

    #[test]
    fn test_strategies_agree() {
        for upper in [1, 2, 3, 10, 1_000, 12_345] {
            let block = populate(upper);
            let expected = upper * (upper + 1) / 2;
            for strategy in SumStrategy::ALL {
                assert_eq!(strategy.apply(&block), Some(expected), "{strategy} @ {upper}");
            }
        }
    }

    #[test]
    fn test_empty_block() {
        let block = populate(0);
        assert_eq!(builtin_sum(&block), 0);
        assert_eq!(loop_sum(&block), 0);
        assert_eq!(seeded_fold_sum(&block), 0);
        assert_eq!(fold_sum(&block), None);
    }

    #[test]
    fn test_fold_single_item_seeds_accumulator() {
        assert_eq!(fold_sum(&[42]), Some(42));
    }

    #[test]
    fn test_strategy_names() {
        let names = SumStrategy::ALL.map(SumStrategy::name);
        assert_eq!(names, ["built-in", "explicit-loop", "fold", "seeded-fold"]);
        assert_eq!(SumStrategy::Fold.to_string(), "fold");
    }
}
