//! Tests for the statistics collector
//!
//! These tests verify:
//! - Per-event counter increments
//! - The fixed layout of the summary block

use std::time::Duration;

use replaykv::stats::{Event, Stats};

// =============================================================================
// Counter Tests
// =============================================================================

#[test]
fn test_counters_start_at_zero() {
    let stats = Stats::new();

    assert_eq!(stats.puts(), 0);
    assert_eq!(stats.successful_gets(), 0);
    assert_eq!(stats.failed_gets(), 0);
    assert_eq!(stats.ranges(), 0);
    assert_eq!(stats.successful_deletes(), 0);
    assert_eq!(stats.failed_deletes(), 0);
    assert_eq!(stats.loads(), 0);
}

#[test]
fn test_record_increments_matching_counter() {
    let mut stats = Stats::new();

    stats.record(Event::Put);
    stats.record(Event::Put);
    stats.record(Event::SuccessfulGet);
    stats.record(Event::FailedGet);
    stats.record(Event::Range);
    stats.record(Event::SuccessfulDelete);
    stats.record(Event::FailedDelete);
    stats.record(Event::Load);

    assert_eq!(stats.puts(), 2);
    assert_eq!(stats.successful_gets(), 1);
    assert_eq!(stats.failed_gets(), 1);
    assert_eq!(stats.ranges(), 1);
    assert_eq!(stats.successful_deletes(), 1);
    assert_eq!(stats.failed_deletes(), 1);
    assert_eq!(stats.loads(), 1);
}

#[test]
fn test_event_names() {
    assert_eq!(Event::Put.name(), "PUT");
    assert_eq!(Event::SuccessfulGet.name(), "SUCCESSFUL_GET");
    assert_eq!(Event::FailedGet.name(), "FAILED_GET");
    assert_eq!(Event::Range.name(), "RANGE");
    assert_eq!(Event::SuccessfulDelete.name(), "SUCCESSFUL_DELETE");
    assert_eq!(Event::FailedDelete.name(), "FAILED_DELETE");
    assert_eq!(Event::Load.name(), "LOAD");
}

// =============================================================================
// Summary Rendering Tests
// =============================================================================

#[test]
fn test_summary_layout() {
    let mut stats = Stats::new();
    stats.record(Event::Put);
    stats.record(Event::Put);
    stats.record(Event::SuccessfulGet);
    stats.record(Event::FailedGet);
    stats.record(Event::Range);
    stats.record(Event::SuccessfulDelete);

    let expected = "\
------------------------------------
PUTS 2
SUCCESSFUL_GETS 1
FAILED_GETS 1
RANGES 1
SUCCESSFUL_DELS 1
FAILED_DELS 0
LOADS 0
TIME_ELAPSED 0.250000
------------------------------------
";

    assert_eq!(stats.summary(Duration::from_millis(250)), expected);
}

#[test]
fn test_summary_label_order_is_fixed() {
    let summary = Stats::new().summary(Duration::ZERO);
    let labels: Vec<&str> = summary
        .lines()
        .filter_map(|line| line.split(' ').next())
        .collect();

    assert_eq!(
        labels,
        vec![
            "------------------------------------",
            "PUTS",
            "SUCCESSFUL_GETS",
            "FAILED_GETS",
            "RANGES",
            "SUCCESSFUL_DELS",
            "FAILED_DELS",
            "LOADS",
            "TIME_ELAPSED",
            "------------------------------------",
        ]
    );
}
