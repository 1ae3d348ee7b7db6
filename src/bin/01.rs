#![doc = include_str!("../puzzles/01.md")]

use std::iter;

use anyhow::Context;
use itertools::Itertools;

use advent_of_code_2018::{debugln, helpers::parse};

/// A single frequency change, e.g. `+7` or `-3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Change(i64);

fn parse_changes(input: &str) -> anyhow::Result<Vec<Change>> {
    parse::lines(input, Change::parser)
}

/// Running frequencies after each change, starting from (and including) zero.
fn running_frequencies(
    changes: impl IntoIterator<Item = Change>,
) -> impl Iterator<Item = i64> {
    let after_changes = changes.into_iter().scan(0, |frequency, change| {
        *frequency += change.0;
        Some(*frequency)
    });
    iter::once(0).chain(after_changes)
}

/// The number of passes over `changes` after which a repeated frequency
/// must have been seen, if there is one at all.
///
/// After `k` passes every frequency has shifted by `k * drift`, so two
/// frequencies can only meet once the drift has covered the distance between
/// them.
fn passes_needed(changes: &[Change]) -> usize {
    let drift: i64 = changes.iter().map(|change| change.0).sum();
    if drift == 0 {
        return 1;
    }

    let (min, max) = running_frequencies(changes.iter().copied())
        .minmax()
        .into_option()
        .unwrap_or_default();
    let passes = (max - min) / drift.abs() + 2;
    debugln!("drift = {drift}, range = {min}..={max}, passes = {passes}");

    passes.try_into().unwrap_or(usize::MAX)
}

/// Returns the resulting frequency after applying every change once.
pub fn part_one(input: &str) -> anyhow::Result<i64> {
    let changes = parse_changes(input)?;
    Ok(changes.iter().map(|change| change.0).sum())
}

/// Returns the first frequency reached twice while applying the changes over
/// and over.
pub fn part_two(input: &str) -> anyhow::Result<i64> {
    let changes = parse_changes(input)?;
    let passes = passes_needed(&changes);

    let cycled = changes
        .iter()
        .copied()
        .cycle()
        .take(changes.len().saturating_mul(passes));

    let first_repeat = running_frequencies(cycled).duplicates().next();
    first_repeat.context("frequency never repeats")
}

fn main() -> anyhow::Result<()> {
    let input = &advent_of_code_2018::read_input(1)?;
    advent_of_code_2018::solve!(1, part_one, input);
    advent_of_code_2018::solve!(2, part_two, input);
    Ok(())
}


mod parsing {
    use super::*;

    use combine::{ParseError, Parser, Stream};

    impl Change {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            parse::decimal_integer().map(Change)
        }
    }
}
