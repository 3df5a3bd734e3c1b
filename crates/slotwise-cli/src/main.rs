//! `slotwise` CLI — find single-day meeting slots from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Find hour-long slots for two people (events from a file)
//! slotwise find -e events.json --duration 60 --attendees ana,ben
//!
//! # Same, with an optional attendee and JSON output
//! slotwise find -e events.json --duration 30 --attendees ana --optional carla --json
//!
//! # Events from stdin
//! cat events.json | slotwise find --duration 30 --attendees ana
//!
//! # Show the merged busy ranges for a set of attendees
//! slotwise busy -e events.json --attendees ana,ben
//! ```
//!
//! Events are a JSON array of `{name, start, end, attendees}` with wall-clock
//! `HH:MM` times (plus `24:00` for ranges closing at end of day).

use std::collections::HashSet;
use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::{NaiveTime, Timelike};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use slotwise_core::{merge_ranges, query, Event, MeetingRequest, TimeRange};

#[derive(Parser)]
#[command(
    name = "slotwise",
    version,
    about = "Find open meeting slots in a single day"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every slot long enough for the requested meeting
    Find {
        /// Events file (JSON array; reads from stdin if omitted)
        #[arg(short, long)]
        events: Option<String>,
        /// Required meeting length in minutes
        #[arg(short, long)]
        duration: u32,
        /// Comma-separated mandatory attendees
        #[arg(short, long, default_value = "")]
        attendees: String,
        /// Comma-separated optional attendees
        #[arg(short, long)]
        optional: Option<String>,
        /// Meeting title
        #[arg(long, default_value = "Meeting")]
        name: String,
        /// Emit a JSON array instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Show the merged busy ranges for a set of attendees
    Busy {
        /// Events file (JSON array; reads from stdin if omitted)
        #[arg(short, long)]
        events: Option<String>,
        /// Comma-separated attendees
        #[arg(short, long, default_value = "")]
        attendees: String,
        /// Emit a JSON array instead of plain text
        #[arg(long)]
        json: bool,
    },
}

/// Wire format for one event in the input JSON.
#[derive(Deserialize)]
struct EventSpec {
    name: String,
    start: String,
    end: String,
    attendees: Vec<String>,
}

/// Wire format for one range in `--json` output.
#[derive(Serialize)]
struct RangeOut {
    start: String,
    end: String,
    minutes: u16,
}

impl From<&TimeRange> for RangeOut {
    fn from(range: &TimeRange) -> Self {
        RangeOut {
            start: format_minutes(range.start()),
            end: format_minutes(range.end()),
            minutes: range.duration(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Find {
            events,
            duration,
            attendees,
            optional,
            name,
            json,
        } => {
            let events = load_events(events.as_deref())?;
            let request = MeetingRequest {
                name,
                duration_minutes: duration,
                mandatory_attendees: split_names(&attendees),
                optional_attendees: optional.as_deref().map(split_names).unwrap_or_default(),
            };

            let slots = query(&events, &request);
            print_ranges(&slots, json, "no slot found")?;
        }
        Commands::Busy {
            events,
            attendees,
            json,
        } => {
            let events = load_events(events.as_deref())?;
            let who = split_names(&attendees);

            let busy: Vec<TimeRange> = events
                .iter()
                .filter(|event| event.attendees.iter().any(|a| who.contains(a)))
                .map(|event| event.when)
                .collect();
            let merged = merge_ranges(&busy);
            print_ranges(&merged, json, "no busy time")?;
        }
    }

    Ok(())
}

/// Read and decode the events JSON from a file, or stdin when no path is
/// given (mirroring the input handling of the `find`/`busy` subcommands).
fn load_events(path: Option<&str>) -> Result<Vec<Event>> {
    let raw = read_input(path)?;
    let specs: Vec<EventSpec> =
        serde_json::from_str(&raw).context("Failed to parse events JSON")?;

    specs
        .into_iter()
        .map(|spec| {
            let start = parse_minutes(&spec.start)
                .with_context(|| format!("Event '{}': invalid start time", spec.name))?;
            let end = parse_minutes(&spec.end)
                .with_context(|| format!("Event '{}': invalid end time", spec.name))?;
            let when = TimeRange::from_start_end(start, end, false)
                .with_context(|| format!("Event '{}': invalid time range", spec.name))?;
            Ok(Event {
                name: spec.name,
                when,
                attendees: spec.attendees.into_iter().collect(),
            })
        })
        .collect()
}

/// Parse `HH:MM` wall-clock time to minutes from midnight. The label `24:00`
/// is accepted for ranges that close exactly at end of day.
fn parse_minutes(s: &str) -> Result<u16> {
    let s = s.trim();
    if s == "24:00" {
        return Ok(TimeRange::MINUTES_PER_DAY);
    }
    let time = NaiveTime::parse_from_str(s, "%H:%M")
        .with_context(|| format!("expected HH:MM, got '{}'", s))?;
    Ok((time.hour() * 60 + time.minute()) as u16)
}

/// Format minutes from midnight as `HH:MM` (minute 1440 becomes `24:00`).
fn format_minutes(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Split a comma-separated attendee list, ignoring blanks.
fn split_names(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn print_ranges(ranges: &[TimeRange], json: bool, empty_message: &str) -> Result<()> {
    if json {
        let out: Vec<RangeOut> = ranges.iter().map(RangeOut::from).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if ranges.is_empty() {
        println!("{}", empty_message);
        return Ok(());
    }
    for range in ranges {
        println!(
            "{} - {}  ({} min)",
            format_minutes(range.start()),
            format_minutes(range.end()),
            range.duration()
        );
    }
    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
