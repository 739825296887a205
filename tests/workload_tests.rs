//! Tests for the workload parser
//!
//! These tests verify:
//! - Each command form of the grammar
//! - Strict rejection of malformed lines with the line number attached

use std::path::PathBuf;

use replaykv::workload::{parse_line, Command, CommandKind};
use replaykv::ReplayError;

// =============================================================================
// Helper Functions
// =============================================================================

fn parse_ok(input: &str) -> Command {
    parse_line(1, input).unwrap()
}

fn parse_err(input: &str) -> ReplayError {
    parse_line(1, input).unwrap_err()
}

// =============================================================================
// Command Form Tests
// =============================================================================

#[test]
fn test_parse_put() {
    assert_eq!(parse_ok("p 10 42"), Command::Put { key: 10, value: 42 });
}

#[test]
fn test_parse_put_negative_integers() {
    assert_eq!(
        parse_ok("p -7 -42"),
        Command::Put { key: -7, value: -42 }
    );
}

#[test]
fn test_parse_get() {
    assert_eq!(parse_ok("g 10"), Command::Get { key: 10 });
}

#[test]
fn test_parse_range() {
    assert_eq!(parse_ok("r 0 5"), Command::Range { start: 0, end: 5 });
}

#[test]
fn test_parse_range_negative_bounds() {
    assert_eq!(parse_ok("r -3 -1"), Command::Range { start: -3, end: -1 });
}

#[test]
fn test_parse_delete() {
    assert_eq!(parse_ok("d 10"), Command::Delete { key: 10 });
}

#[test]
fn test_parse_load() {
    assert_eq!(
        parse_ok("l data/0.dat"),
        Command::Load {
            path: PathBuf::from("data/0.dat")
        }
    );
}

#[test]
fn test_parse_load_path_with_spaces() {
    assert_eq!(
        parse_ok("l my snapshot.dat"),
        Command::Load {
            path: PathBuf::from("my snapshot.dat")
        }
    );
}

#[test]
fn test_parse_strips_line_terminator() {
    assert_eq!(parse_ok("g 10\n"), Command::Get { key: 10 });
    assert_eq!(
        parse_ok("l 0.dat\r\n"),
        Command::Load {
            path: PathBuf::from("0.dat")
        }
    );
}

#[test]
fn test_command_kind_accessor() {
    assert_eq!(parse_ok("p 1 2").kind(), CommandKind::Put);
    assert_eq!(parse_ok("g 1").kind(), CommandKind::Get);
    assert_eq!(parse_ok("r 0 1").kind(), CommandKind::Range);
    assert_eq!(parse_ok("d 1").kind(), CommandKind::Delete);
    assert_eq!(parse_ok("l x.dat").kind(), CommandKind::Load);
}

#[test]
fn test_extra_interior_whitespace_tolerated() {
    assert_eq!(parse_ok("p   1    2"), Command::Put { key: 1, value: 2 });
}

// =============================================================================
// Malformed Line Tests
// =============================================================================

#[test]
fn test_unknown_command_is_rejected() {
    assert!(matches!(parse_err("x 1"), ReplayError::Parse { .. }));
}

#[test]
fn test_long_tag_is_rejected() {
    // `put` shares the dispatch character with `p` but is not a command.
    assert!(matches!(parse_err("put 1 2"), ReplayError::Parse { .. }));
}

#[test]
fn test_missing_field_is_rejected() {
    assert!(matches!(parse_err("p 1"), ReplayError::Parse { .. }));
    assert!(matches!(parse_err("g"), ReplayError::Parse { .. }));
    assert!(matches!(parse_err("r 0"), ReplayError::Parse { .. }));
}

#[test]
fn test_extra_field_is_rejected() {
    assert!(matches!(parse_err("p 1 2 3"), ReplayError::Parse { .. }));
    assert!(matches!(parse_err("d 1 2"), ReplayError::Parse { .. }));
}

#[test]
fn test_non_integer_field_is_rejected() {
    assert!(matches!(parse_err("p one 2"), ReplayError::Parse { .. }));
    assert!(matches!(parse_err("g 1.5"), ReplayError::Parse { .. }));
}

#[test]
fn test_key_overflowing_i32_is_rejected() {
    assert!(matches!(
        parse_err("p 99999999999 1"),
        ReplayError::Parse { .. }
    ));
}

#[test]
fn test_load_without_path_is_rejected() {
    assert!(matches!(parse_err("l"), ReplayError::Parse { .. }));
    assert!(matches!(parse_err("l \n"), ReplayError::Parse { .. }));
}

#[test]
fn test_parse_error_names_the_line() {
    let err = parse_line(41, "q 1").unwrap_err();
    match err {
        ReplayError::Parse { line, .. } => assert_eq!(line, 41),
        other => panic!("expected parse error, got {:?}", other),
    }
}
