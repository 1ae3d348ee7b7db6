/*
 * This file contains template code.
 * There is no need to edit this file unless you want to change template functionality.
 */
use std::process::Command;
use std::time::Duration;

use anyhow::Context;
use prettytable::{row, Table};

use advent_of_code_2018::{parse_exec_times, ANSI_BOLD, ANSI_ITALIC, ANSI_RESET};

const DAYS: std::ops::RangeInclusive<u8> = 1..=4;

#[derive(Debug)]
struct RunnerOptions {
    days: Vec<u8>,
    debug: bool,
}

impl RunnerOptions {
    fn from_env() -> anyhow::Result<Self> {
        Self::from_args(pico_args::Arguments::from_env())
    }

    fn from_args(mut args: pico_args::Arguments) -> anyhow::Result<Self> {
        let debug = args.contains("--debug");
        let mut days: Vec<u8> = args.values_from_str("--day")?;

        let remaining = args.finish();
        if !remaining.is_empty() {
            anyhow::bail!("unexpected arguments: {remaining:?}");
        }

        if let Some(day) = days.iter().find(|&&day| !DAYS.contains(&day)) {
            anyhow::bail!("day {day} is not solved, expected one of {DAYS:?}");
        }
        if days.is_empty() {
            days = DAYS.collect();
        }

        Ok(Self { days, debug })
    }
}

struct DayResult {
    day: u8,
    times: Vec<Duration>,
    success: bool,
}

fn run_day(day: u8, debug: bool) -> anyhow::Result<DayResult> {
    let bin = format!("{day:02}");

    let mut args = vec!["run", "--quiet", "--bin", &bin];
    if !debug {
        args.push("--release");
    }

    let output = Command::new("cargo")
        .args(&args)
        .output()
        .with_context(|| format!("could not run day {bin}"))?;

    println!("----------");
    println!("{}| Day {} |{}", ANSI_BOLD, bin, ANSI_RESET);
    println!("----------");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    if stdout.trim().is_empty() {
        println!("Not solved.");
    } else {
        println!("{}", stdout.trim());
    }
    if !output.status.success() {
        println!("{}", stderr.trim());
    }

    Ok(DayResult {
        day,
        times: parse_exec_times(&stdout),
        success: output.status.success(),
    })
}

fn format_time(time: Option<&Duration>) -> String {
    match time {
        Some(time) => format!("{time:.2?}"),
        None => "-".to_owned(),
    }
}

fn main() -> anyhow::Result<()> {
    let options = RunnerOptions::from_env()?;

    let results = options
        .days
        .iter()
        .map(|&day| run_day(day, options.debug))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut table = Table::new();
    table.set_titles(row!["Day", "Part 1", "Part 2", "Status"]);
    for result in &results {
        let day = format!("{:02}", result.day);
        let part_one = format_time(result.times.first());
        let part_two = format_time(result.times.get(1));
        let status = if result.success { "ok" } else { "failed" };
        table.add_row(row![day, part_one, part_two, status]);
    }
    println!();
    table.printstd();

    let total: Duration = results.iter().flat_map(|result| &result.times).sum();
    println!(
        "{}Total:{} {}{:.2?}{}",
        ANSI_BOLD, ANSI_RESET, ANSI_ITALIC, total, ANSI_RESET
    );

    if let Some(failed) = results.iter().find(|result| !result.success) {
        anyhow::bail!("day {:02} failed", failed.day);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::ffi::OsString;

    fn options(args: &[&str]) -> anyhow::Result<RunnerOptions> {
        let args = args.iter().map(OsString::from).collect();
        RunnerOptions::from_args(pico_args::Arguments::from_vec(args))
    }

    #[test]
    fn test_runner_options() {
        let all = options(&[]).unwrap();
        assert_eq!(all.days, vec![1, 2, 3, 4]);
        assert!(!all.debug);

        let some = options(&["--day", "3", "--debug", "--day", "1"]).unwrap();
        assert_eq!(some.days, vec![3, 1]);
        assert!(some.debug);

        assert!(options(&["--day", "5"]).is_err());
        assert!(options(&["--day", "one"]).is_err());
        assert!(options(&["--release"]).is_err());
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(Some(&Duration::from_micros(1500))), "1.50ms");
        assert_eq!(format_time(None), "-");
    }
}
