//! Workload line parser
//!
//! Recognizes the command kind from the leading character, then
//! validates and extracts the fields. Parsing is strict: an unknown
//! command, a wrong field count, or a non-integer field is an error,
//! never silently skipped.

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{ReplayError, Result};

use super::Command;

/// Parse one workload line into a command
///
/// `line_no` is 1-based and used only for error reporting. The trailing
/// line terminator, if any, is stripped. Callers are expected to skip
/// blank lines.
pub fn parse_line(line_no: usize, input: &str) -> Result<Command> {
    let line = input.trim_end_matches(&['\r', '\n'][..]);

    match line.as_bytes().first() {
        Some(b'p') => parse_put(line_no, line),
        Some(b'g') => parse_get(line_no, line),
        Some(b'r') => parse_range(line_no, line),
        Some(b'd') => parse_delete(line_no, line),
        Some(b'l') => parse_load(line_no, line),
        Some(_) => Err(parse_error(
            line_no,
            format!("unrecognized command {:?}", line.split_whitespace().next().unwrap_or(line)),
        )),
        None => Err(parse_error(line_no, "empty line".to_string())),
    }
}

/// Parse PUT: `p KEY VAL`
fn parse_put(line_no: usize, line: &str) -> Result<Command> {
    let [key, value] = fields(line_no, line, "p")?;
    Ok(Command::Put {
        key: parse_int(line_no, key, "key")?,
        value: parse_int(line_no, value, "value")?,
    })
}

/// Parse GET: `g KEY`
fn parse_get(line_no: usize, line: &str) -> Result<Command> {
    let [key] = fields(line_no, line, "g")?;
    Ok(Command::Get {
        key: parse_int(line_no, key, "key")?,
    })
}

/// Parse RANGE: `r START END`
///
/// Bounds are slice indices, not keys, and may be negative.
fn parse_range(line_no: usize, line: &str) -> Result<Command> {
    let [start, end] = fields(line_no, line, "r")?;
    Ok(Command::Range {
        start: parse_int(line_no, start, "start index")?,
        end: parse_int(line_no, end, "end index")?,
    })
}

/// Parse DELETE: `d KEY`
fn parse_delete(line_no: usize, line: &str) -> Result<Command> {
    let [key] = fields(line_no, line, "d")?;
    Ok(Command::Delete {
        key: parse_int(line_no, key, "key")?,
    })
}

/// Parse LOAD: `l PATH`
///
/// The path is the raw remainder of the line after the two-character
/// prefix and may contain spaces.
fn parse_load(line_no: usize, line: &str) -> Result<Command> {
    let path = line
        .strip_prefix("l ")
        .ok_or_else(|| parse_error(line_no, "load expects `l PATH`".to_string()))?;
    if path.is_empty() {
        return Err(parse_error(line_no, "load expects a file path".to_string()));
    }
    Ok(Command::Load {
        path: PathBuf::from(path),
    })
}

/// Split a line into its command tag plus exactly N argument fields
fn fields<'a, const N: usize>(line_no: usize, line: &'a str, tag: &str) -> Result<[&'a str; N]> {
    let mut tokens = line.split_whitespace();
    if tokens.next() != Some(tag) {
        return Err(parse_error(
            line_no,
            format!("expected `{}` followed by {} field(s)", tag, N),
        ));
    }

    let args: Vec<&str> = tokens.collect();
    args.try_into().map_err(|args: Vec<&str>| {
        parse_error(
            line_no,
            format!("`{}` expects {} field(s), found {}", tag, N, args.len()),
        )
    })
}

/// Parse one integer field, naming it on failure
fn parse_int<T>(line_no: usize, field: &str, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    field.parse().map_err(|err| {
        parse_error(line_no, format!("invalid {} {:?}: {}", what, field, err))
    })
}

fn parse_error(line_no: usize, message: String) -> ReplayError {
    ReplayError::Parse {
        line: line_no,
        message,
    }
}
