#![doc = include_str!("../puzzles/04.md")]

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt;

use anyhow::{bail, ensure, Context};
use bitvec::BitArr;

use advent_of_code_2018::{debugln, helpers::parse};

const MINUTES_PER_HOUR: usize = 60;

/// One bit per minute of the midnight hour.
type Minutes = BitArr!(for MINUTES_PER_HOUR, in u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct GuardId(pub u32);

impl fmt::Display for GuardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Field order matters: the derived `Ord` is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Timestamp {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    BeginShift(GuardId),
    FallAsleep,
    WakeUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    pub timestamp: Timestamp,
    pub event: Event,
}

impl Entry {
    /// The minute of the midnight hour at which this entry happened.
    fn minute(&self) -> anyhow::Result<usize> {
        let minute = usize::from(self.timestamp.minute);
        ensure!(
            minute < MINUTES_PER_HOUR,
            "invalid minute in timestamp {}",
            self.timestamp
        );
        Ok(minute)
    }
}

/// A single guard's shift, and which minutes they spent asleep during it.
#[derive(Debug, Clone)]
struct Shift {
    pub guard: GuardId,
    pub asleep: Minutes,
}

impl Shift {
    pub fn new(guard: GuardId) -> Self {
        Self {
            guard,
            asleep: Minutes::default(),
        }
    }

    pub fn sleep(&mut self, from: usize, until: usize) {
        self.asleep[from..until].fill(true);
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>5}  ", self.guard.to_string())?;
        for minute in 0..MINUTES_PER_HOUR {
            let c = if self.asleep[minute] { '#' } else { '.' };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Replays the log in chronological order, turning it into shifts.
fn reconstruct_shifts(mut entries: Vec<Entry>) -> anyhow::Result<Vec<Shift>> {
    entries.sort_by_key(|entry| entry.timestamp);

    let mut shifts: Vec<Shift> = Vec::new();
    let mut fell_asleep: Option<usize> = None;

    for entry in entries {
        match entry.event {
            Event::BeginShift(guard) => {
                // Still asleep when the next guard shows up.
                if let (Some(shift), Some(from)) = (shifts.last_mut(), fell_asleep.take()) {
                    shift.sleep(from, MINUTES_PER_HOUR);
                }
                shifts.push(Shift::new(guard));
            }
            Event::FallAsleep => {
                let Some(shift) = shifts.last() else {
                    bail!("{}: fell asleep before any shift began", entry.timestamp);
                };
                if fell_asleep.is_some() {
                    bail!("{}: guard {} is already asleep", entry.timestamp, shift.guard);
                }
                fell_asleep = Some(entry.minute()?);
            }
            Event::WakeUp => {
                let Some(shift) = shifts.last_mut() else {
                    bail!("{}: woke up before any shift began", entry.timestamp);
                };
                let from = fell_asleep.take().with_context(|| {
                    format!(
                        "{}: guard {} woke up without falling asleep",
                        entry.timestamp, shift.guard
                    )
                })?;
                let until = entry.minute()?;
                ensure!(
                    from <= until,
                    "{}: guard {} woke up before falling asleep",
                    entry.timestamp,
                    shift.guard
                );
                shift.sleep(from, until);
            }
        }
    }

    if let (Some(shift), Some(from)) = (shifts.last_mut(), fell_asleep) {
        shift.sleep(from, MINUTES_PER_HOUR);
    }

    for shift in &shifts {
        debugln!("{shift}");
    }

    Ok(shifts)
}

/// How many times a guard was asleep during each minute of the midnight hour,
/// over all of their shifts.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SleepLog {
    pub minutes: [u32; MINUTES_PER_HOUR],
}

impl Default for SleepLog {
    fn default() -> Self {
        Self {
            minutes: [0; MINUTES_PER_HOUR],
        }
    }
}

impl SleepLog {
    pub fn record(&mut self, asleep: &Minutes) {
        for minute in asleep.iter_ones() {
            self.minutes[minute] += 1;
        }
    }

    pub fn total(&self) -> u32 {
        self.minutes.iter().sum()
    }

    /// The minute most often spent asleep and how often, preferring the
    /// earliest minute on ties. `None` if the guard never slept.
    pub fn sleepiest_minute(&self) -> Option<(usize, u32)> {
        self.minutes
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, count)| count > 0)
            .max_by_key(|&(minute, count)| (count, Reverse(minute)))
    }
}

fn sleep_logs(shifts: &[Shift]) -> BTreeMap<GuardId, SleepLog> {
    let mut logs: BTreeMap<GuardId, SleepLog> = BTreeMap::new();
    for shift in shifts {
        logs.entry(shift.guard).or_default().record(&shift.asleep);
    }
    logs
}

fn parse_sleep_logs(input: &str) -> anyhow::Result<BTreeMap<GuardId, SleepLog>> {
    let entries = parse::lines(input, Entry::parser)?;
    let shifts = reconstruct_shifts(entries)?;
    Ok(sleep_logs(&shifts))
}

fn answer(guard: GuardId, minute: usize) -> u64 {
    u64::from(guard.0) * minute as u64
}

/// Strategy 1: finds the guard with the most minutes asleep, and returns their
/// id multiplied by the minute they were most often asleep.
pub fn part_one(input: &str) -> anyhow::Result<u64> {
    let logs = parse_sleep_logs(input)?;

    let (&guard, log) = logs
        .iter()
        .max_by_key(|&(&guard, log)| (log.total(), Reverse(guard)))
        .context("the log has no shifts")?;
    let (minute, times) = log.sleepiest_minute().context("no guard ever fell asleep")?;

    debugln!(
        "guard {guard} slept {} minutes, most often at 00:{minute:02} ({times} times)",
        log.total()
    );

    Ok(answer(guard, minute))
}

/// Strategy 2: finds the guard most frequently asleep on the same minute, and
/// returns their id multiplied by that minute.
pub fn part_two(input: &str) -> anyhow::Result<u64> {
    let logs = parse_sleep_logs(input)?;

    let (guard, (minute, times)) = logs
        .iter()
        .filter_map(|(&guard, log)| Some((guard, log.sleepiest_minute()?)))
        .max_by_key(|&(guard, (_, times))| (times, Reverse(guard)))
        .context("no guard ever fell asleep")?;

    debugln!("guard {guard} was asleep at 00:{minute:02} {times} times");

    Ok(answer(guard, minute))
}

fn main() -> anyhow::Result<()> {
    let input = &advent_of_code_2018::read_input(4)?;
    advent_of_code_2018::solve!(1, part_one, input);
    advent_of_code_2018::solve!(2, part_two, input);
    Ok(())
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

    impl Timestamp {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            // "1518-11-01"
            let date = (
                parse::decimal_integer(),
                c::token('-'),
                parse::decimal_integer(),
                c::token('-'),
                parse::decimal_integer(),
            )
                .map(|(year, _, month, _, day)| (year, month, day));

            // "23:58"
            let time = (
                parse::decimal_integer(),
                c::token(':'),
                parse::decimal_integer(),
            )
                .map(|(hour, _, minute)| (hour, minute));

            // "[1518-11-01 23:58]"
            c::between(
                c::token('['),
                c::token(']'),
                (date, c::token(' '), time),
            )
            .map(|((year, month, day), _, (hour, minute))| Timestamp {
                year,
                month,
                day,
                hour,
                minute,
            })
        }
    }

    impl Event {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            // "Guard #10 begins shift"
            let begin_shift = (
                c::string("Guard #"),
                parse::decimal_integer(),
                c::string(" begins shift"),
            )
                .map(|(_, id, _)| Event::BeginShift(GuardId(id)));

            let fall_asleep = c::string("falls asleep").map(|_| Event::FallAsleep);

            let wake_up = c::string("wakes up").map(|_| Event::WakeUp);

            c::choice((begin_shift, fall_asleep, wake_up))
        }
    }

    impl Entry {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            (Timestamp::parser(), c::token(' '), Event::parser())
                .map(|(timestamp, _, event)| Entry { timestamp, event })
        }
    }
}
