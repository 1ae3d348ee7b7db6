#![doc = include_str!("../puzzles/03.md")]

use std::fmt;

use anyhow::Context;

use advent_of_code_2018::{debugln, helpers::parse};

/// A position on the fabric, with `x` counting inches from the left edge and
/// `y` counting inches from the top edge.
type Pos = glam::UVec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Claim {
    pub id: u32,
    /// Top-left corner.
    pub origin: Pos,
    pub size: Pos,
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} @ {},{}: {}x{}",
            self.id, self.origin.x, self.origin.y, self.size.x, self.size.y
        )
    }
}

impl Claim {
    /// One past the bottom-right corner, or `None` if that doesn't fit in a
    /// `u32`.
    #[inline]
    pub fn end(&self) -> Option<Pos> {
        Some(Pos {
            x: self.origin.x.checked_add(self.size.x)?,
            y: self.origin.y.checked_add(self.size.y)?,
        })
    }

    pub fn iter_points(&self) -> impl Iterator<Item = Pos> {
        let origin = self.origin;
        let end = self.end().unwrap_or(origin);
        (origin.y..end.y).flat_map(move |y| (origin.x..end.x).map(move |x| Pos { x, y }))
    }
}

/// How many claims cover each square inch of the fabric that is claimed at
/// all.
#[derive(Debug, Clone)]
struct Fabric {
    pub grid: grid::Grid<u32>,
    /// The position of the grid's top-left cell.
    pub min: Pos,
}

impl Fabric {
    pub fn new(claims: &[Claim]) -> Self {
        let min = claims
            .iter()
            .map(|claim| claim.origin)
            .reduce(Pos::min)
            .unwrap_or(Pos::ZERO);
        let max = claims
            .iter()
            .filter_map(Claim::end)
            .fold(min, Pos::max);

        debugln!("fabric: {min} to {max}");

        let size = max - min;
        let mut this = Self {
            grid: grid::Grid::new(size.y as usize, size.x as usize),
            min,
        };

        for claim in claims {
            for point in claim.iter_points() {
                if let Some(count) = this.get_mut(point) {
                    *count = count.saturating_add(1);
                }
            }
        }

        this
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> Option<u32> {
        let (row, col) = self.make_row_col(pos)?;
        self.grid.get(row, col).copied()
    }

    #[inline]
    fn get_mut(&mut self, pos: Pos) -> Option<&mut u32> {
        let (row, col) = self.make_row_col(pos)?;
        self.grid.get_mut(row, col)
    }

    #[inline(always)]
    fn make_row_col(&self, pos: Pos) -> Option<(usize, usize)> {
        let row = pos.y.checked_sub(self.min.y)?;
        let col = pos.x.checked_sub(self.min.x)?;
        Some((row.try_into().ok()?, col.try_into().ok()?))
    }

    /// The number of square inches covered by more than one claim.
    pub fn overlapping_area(&self) -> usize {
        self.grid.iter().filter(|&&count| count > 1).count()
    }

    /// Whether no other claim covers any part of `claim`.
    pub fn is_intact(&self, claim: &Claim) -> bool {
        claim
            .iter_points()
            .all(|point| self.get(point) == Some(1))
    }
}

impl fmt::Display for Fabric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                let c = match self.grid.get(row, col).copied().unwrap_or_default() {
                    0 => '.',
                    1 => '#',
                    _ => 'X',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn parse_claims(input: &str) -> anyhow::Result<Vec<Claim>> {
    let claims = parse::lines(input, Claim::parser)?;
    if let Some(claim) = claims.iter().find(|claim| claim.end().is_none()) {
        anyhow::bail!("claim {claim} extends past the edge of the fabric");
    }
    Ok(claims)
}

/// Returns how many square inches of fabric are within two or more claims.
pub fn part_one(input: &str) -> anyhow::Result<usize> {
    let claims = parse_claims(input)?;
    let fabric = Fabric::new(&claims);
    debugln!("{fabric}");
    Ok(fabric.overlapping_area())
}

/// Returns the id of the only claim that doesn't overlap any other.
pub fn part_two(input: &str) -> anyhow::Result<u32> {
    let claims = parse_claims(input)?;
    let fabric = Fabric::new(&claims);
    let claim = claims
        .iter()
        .find(|claim| fabric.is_intact(claim))
        .context("every claim overlaps another")?;
    debugln!("intact claim: {claim}");
    Ok(claim.id)
}

fn main() -> anyhow::Result<()> {
    let input = &advent_of_code_2018::read_input(3)?;
    advent_of_code_2018::solve!(1, part_one, input);
    advent_of_code_2018::solve!(2, part_two, input);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_claim() {
        let claim = parse::from_str("#123 @ 3,2: 5x4", Claim::parser()).unwrap();
        assert_eq!(
            claim,
            Claim {
                id: 123,
                origin: Pos::new(3, 2),
                size: Pos::new(5, 4),
            }
        );
        assert_eq!(claim.to_string(), "#123 @ 3,2: 5x4");
        assert_eq!(claim.end(), Some(Pos::new(8, 6)));
        assert_eq!(claim.iter_points().count(), 20);
    }

    #[test]
    fn test_parse_bad_claim() {
        assert!(parse::from_str("#1 @ 1,3 4x4", Claim::parser()).is_err());
        assert!(parse::from_str("1 @ 1,3: 4x4", Claim::parser()).is_err());
        assert!(parse::from_str("#1 @ -1,3: 4x4", Claim::parser()).is_err());
        assert!(part_one("#1 @ 1,3: 4x4\n#2 @ 3,1: 4y4\n").is_err());
    }

    #[test]
    fn test_part_one() {
        let input = advent_of_code_2018::read_file("examples", 3).unwrap();
        assert_eq!(part_one(&input).unwrap(), 4);
    }

    #[test]
    fn test_part_two() {
        let input = advent_of_code_2018::read_file("examples", 3).unwrap();
        assert_eq!(part_two(&input).unwrap(), 3);
    }

    #[test]
    fn two_overlapping_squares() {
        let input = "#1 @ 1,1: 3x3\n#2 @ 2,2: 3x3\n";
        assert_eq!(part_one(input).unwrap(), 4);
        assert!(part_two(input).is_err());
    }

    #[test]
    fn no_claims() {
        assert_eq!(part_one("").unwrap(), 0);
        assert!(part_two("").is_err());
    }

    #[test]
    fn first_intact_claim_wins() {
        let input = "#7 @ 0,0: 1x1\n#8 @ 5,5: 2x2\n";
        assert_eq!(part_one(input).unwrap(), 0);
        assert_eq!(part_two(input).unwrap(), 7);
    }

    #[test]
    fn far_away_claim() {
        let input = "#1 @ 1000000,1000000: 1x1\n";
        assert_eq!(part_one(input).unwrap(), 0);
        assert_eq!(part_two(input).unwrap(), 1);

        let fabric = Fabric::new(&parse_claims(input).unwrap());
        assert_eq!((fabric.grid.rows(), fabric.grid.cols()), (1, 1));
        assert_eq!(fabric.get(Pos::new(1000000, 1000000)), Some(1));
        assert_eq!(fabric.get(Pos::new(0, 0)), None);
    }

    #[test]
    fn claim_past_the_edge() {
        assert!(part_one("#1 @ 4294967295,0: 2x1\n").is_err());
        assert!(part_two("#1 @ 0,4294967295: 1x2\n").is_err());
        assert!(part_one("#1 @ 4294967294,0: 1x1\n").is_ok());
    }

    #[test]
    fn many_claims_on_one_square() {
        let input: String = (1..=70_000)
            .map(|id| format!("#{id} @ 3,4: 1x1\n"))
            .collect();
        assert_eq!(part_one(&input).unwrap(), 1);
        assert!(part_two(&input).is_err());

        let fabric = Fabric::new(&parse_claims(&input).unwrap());
        assert_eq!(fabric.get(Pos::new(3, 4)), Some(70_000));
    }

    #[test]
    fn test_fabric_display_offset() {
        let claims = parse_claims("#1 @ 5,5: 2x1\n#2 @ 6,5: 1x2\n").unwrap();
        let fabric = Fabric::new(&claims);
        assert_eq!(fabric.min, Pos::new(5, 5));
        assert_eq!(fabric.to_string(), "#X\n.#\n");
    }

    #[test]
    fn test_fabric_display() {
        let claims = parse_claims("#1 @ 0,0: 2x1\n#2 @ 1,0: 2x2\n").unwrap();
        let fabric = Fabric::new(&claims);
        assert_eq!(fabric.to_string(), "#X#\n.##\n");
    }
}

mod parsing {
    use super::*;

    mod c {
        pub use combine::{
            parser::char::{self, string},
            *,
        };
    }

    use c::{ParseError, Parser, Stream};

    impl Claim {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            // "3,2"
            let origin = (
                parse::decimal_integer(),
                c::token(','),
                parse::decimal_integer(),
            )
                .map(|(x, _, y)| Pos { x, y });

            // "5x4"
            let size = (
                parse::decimal_integer(),
                c::token('x'),
                parse::decimal_integer(),
            )
                .map(|(x, _, y)| Pos { x, y });

            // "#123 @ 3,2: 5x4"
            (
                c::token('#'),
                parse::decimal_integer(),
                c::string(" @ "),
                origin,
                c::string(": "),
                size,
            )
                .map(|(_, id, _, origin, _, size)| Claim { id, origin, size })
        }
    }
}
