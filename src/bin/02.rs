#![doc = include_str!("../puzzles/02.md")]

use std::collections::HashMap;

use anyhow::Context;
use itertools::Itertools;

use advent_of_code_2018::debugln;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoxId<'a>(&'a str);

impl BoxId<'_> {
    pub fn letter_counts(&self) -> HashMap<char, usize> {
        self.0.chars().counts()
    }

    /// Whether any letter appears exactly `n` times.
    pub fn has_letter_repeated(&self, n: usize) -> bool {
        self.letter_counts().values().any(|&count| count == n)
    }

    /// If the two ids differ in exactly one position, returns the letters
    /// they have in common.
    pub fn common_letters(&self, other: &Self) -> Option<String> {
        if self.0.chars().count() != other.0.chars().count() {
            return None;
        }

        let mut differing = self
            .0
            .chars()
            .zip(other.0.chars())
            .positions(|(a, b)| a != b);

        let (Some(position), None) = (differing.next(), differing.next()) else {
            return None;
        };

        let common = self
            .0
            .chars()
            .enumerate()
            .filter(|&(index, _)| index != position)
            .map(|(_, c)| c)
            .collect();
        Some(common)
    }
}

fn box_ids(input: &str) -> impl Iterator<Item = BoxId<'_>> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(BoxId)
}

/// Returns the number of ids containing a letter exactly twice, multiplied by
/// the number of ids containing a letter exactly three times.
pub fn part_one(input: &str) -> anyhow::Result<usize> {
    let (twos, threes) = box_ids(input).fold((0, 0), |(twos, threes), id| {
        let two = id.has_letter_repeated(2);
        let three = id.has_letter_repeated(3);
        debugln!("{id:?}: two = {two}, three = {three}");
        (twos + usize::from(two), threes + usize::from(three))
    });

    debugln!("twos = {twos}, threes = {threes}");
    Ok(twos * threes)
}

/// Returns the letters common to the two ids that differ by exactly one
/// character.
pub fn part_two(input: &str) -> anyhow::Result<String> {
    let ids = box_ids(input).collect_vec();
    ids.iter()
        .tuple_combinations()
        .find_map(|(a, b)| a.common_letters(b))
        .context("no pair of ids differs by exactly one character")
}

fn main() -> anyhow::Result<()> {
    let input = &advent_of_code_2018::read_input(2)?;
    advent_of_code_2018::solve!(1, part_one, input);
    advent_of_code_2018::solve!(2, part_two, input);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use maplit::hashmap;

    #[test]
    fn test_letter_counts() {
        assert_eq!(
            BoxId("bababc").letter_counts(),
            hashmap! { 'a' => 2, 'b' => 3, 'c' => 1 }
        );
        assert_eq!(BoxId("").letter_counts(), hashmap! {});
    }

    #[test]
    fn test_has_letter_repeated() {
        #[track_caller]
        fn do_it(id: &str, two: bool, three: bool) {
            let id = BoxId(id);
            assert_eq!(id.has_letter_repeated(2), two, "{id:?} two");
            assert_eq!(id.has_letter_repeated(3), three, "{id:?} three");
        }

        do_it("abcdef", false, false);
        do_it("bababc", true, true);
        do_it("abbcde", true, false);
        do_it("abcccd", false, true);
        do_it("aabcdd", true, false);
        do_it("abcdee", true, false);
        do_it("ababab", false, true);
    }

    #[test]
    fn test_common_letters() {
        assert_eq!(
            BoxId("fghij").common_letters(&BoxId("fguij")),
            Some("fgij".to_owned())
        );
        assert_eq!(BoxId("abcde").common_letters(&BoxId("axcye")), None);
        assert_eq!(BoxId("abcde").common_letters(&BoxId("abcde")), None);
        assert_eq!(BoxId("abcde").common_letters(&BoxId("abcd")), None);

        // Same number of bytes, different number of characters.
        assert_eq!(BoxId("abé").common_letters(&BoxId("abcd")), None);
        assert_eq!(
            BoxId("abéd").common_letters(&BoxId("abcd")),
            Some("abd".to_owned())
        );
    }

    #[test]
    fn test_part_one() {
        let input = advent_of_code_2018::read_file("examples", 2).unwrap();
        assert_eq!(part_one(&input).unwrap(), 12);
    }

    #[test]
    fn test_part_one_small() {
        assert_eq!(part_one("abcdef\nbababc\nabbcde").unwrap(), 2);
    }

    #[test]
    fn test_part_two() {
        let input = "abcde\nfghij\nklmno\npqrst\nfguij\naxcye\nwvxyz\n";
        assert_eq!(part_two(input).unwrap(), "fgij");
    }

    #[test]
    fn test_part_two_no_match() {
        assert!(part_two("abcde\nvwxyz\n").is_err());
        assert!(part_two("").is_err());
    }
}
