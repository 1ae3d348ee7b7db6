/*
 * This file contains template code.
 * There is no need to edit this file unless you want to change template functionality.
 * Prefer `./helpers.rs` if you want to extract code from your solutions.
 */
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;

pub mod helpers;

pub const ANSI_ITALIC: &str = "\x1b[3m";
pub const ANSI_BOLD: &str = "\x1b[1m";
pub const ANSI_RESET: &str = "\x1b[0m";

/// Runs one part of a puzzle, printing its answer and how long it took.
///
/// The solver is a function `fn(&str) -> anyhow::Result<T>` where `T:
/// Display`. Errors are propagated with `?`, so this may only be used inside a
/// function returning `anyhow::Result`.
#[macro_export]
macro_rules! solve {
    ($part:expr, $solver:ident, $input:expr) => {{
        use advent_of_code_2018::{ANSI_BOLD, ANSI_ITALIC, ANSI_RESET};
        use std::fmt::Display;
        use std::time::Instant;

        fn print_result<T: Display>(
            func: impl FnOnce(&str) -> anyhow::Result<T>,
            input: &str,
        ) -> anyhow::Result<()> {
            let timer = Instant::now();
            let result = func(input)?;
            let elapsed = timer.elapsed();
            println!(
                "{} {}(elapsed: {:.2?}){}",
                result, ANSI_ITALIC, elapsed, ANSI_RESET
            );
            Ok(())
        }

        println!("🎄 {}Part {}{} 🎄", ANSI_BOLD, $part, ANSI_RESET);
        anyhow::Context::with_context(print_result($solver, $input), || {
            format!("could not solve part {}", $part)
        })?;
    }};
}

/// Like `println!`, but only prints in debug builds.
#[macro_export]
macro_rules! debugln {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            println!($($arg)*);
        }
    };
}

/// Like `print!`, but only prints in debug builds.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            print!($($arg)*);
        }
    };
}

/// Command-line options accepted by every day's binary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Options {
    /// Overrides the default `src/inputs/NN.txt` input location.
    pub input: Option<PathBuf>,
}

impl Options {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_args(pico_args::Arguments::from_env())
    }

    pub fn from_args(mut args: pico_args::Arguments) -> anyhow::Result<Self> {
        let input = args.opt_value_from_str(["-i", "--input"])?;

        let remaining = args.finish();
        if !remaining.is_empty() {
            anyhow::bail!("unexpected arguments: {remaining:?}");
        }

        Ok(Self { input })
    }
}

/// Returns the path of the puzzle file for `day` inside `src/<folder>`.
pub fn file_path(folder: &str, day: u8) -> anyhow::Result<PathBuf> {
    let cwd = std::env::current_dir().context("could not determine working directory")?;
    Ok(cwd.join("src").join(folder).join(format!("{day:02}.txt")))
}

pub fn read_file(folder: &str, day: u8) -> anyhow::Result<String> {
    read_path(file_path(folder, day)?)
}

/// Reads the puzzle input for `day`, honoring `--input` if it was given.
pub fn read_input(day: u8) -> anyhow::Result<String> {
    match Options::from_env()?.input {
        Some(path) => read_path(path),
        None => read_file("inputs", day),
    }
}

fn read_path(path: impl AsRef<Path>) -> anyhow::Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).with_context(|| format!("could not open input file {path:?}"))
}

fn parse_time(timing: &str) -> Option<Duration> {
    let timing = timing.split(')').next()?;

    // Longer suffixes first, "ms" also ends in "s".
    let (value, nanos_per_unit) = if let Some(value) = timing.strip_suffix("ns") {
        (value, 1.0)
    } else if let Some(value) = timing.strip_suffix("µs") {
        (value, 1e3)
    } else if let Some(value) = timing.strip_suffix("ms") {
        (value, 1e6)
    } else if let Some(value) = timing.strip_suffix('s') {
        (value, 1e9)
    } else {
        return None;
    };

    let value: f64 = value.trim().parse().ok()?;
    Some(Duration::from_nanos((value * nanos_per_unit).round() as u64))
}

/// Extracts the elapsed time of each solved part from a day's output.
pub fn parse_exec_times(output: &str) -> Vec<Duration> {
    output
        .lines()
        .filter_map(|line| line.split("(elapsed: ").nth(1))
        .filter_map(parse_time)
        .collect()
}
