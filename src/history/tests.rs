//! Tests for the step log.

use super::*;
use crate::sim::GrowthOutcome;

#[test]
fn test_new_log_is_empty() {
    let log = StepLog::new();
    assert_eq!(log.len(), 0);
    assert!(log.is_empty());
    assert!(log.last().is_none());
}

#[test]
fn test_record_numbers_steps_from_one() {
    let mut log = StepLog::new();
    log.record(0.5, GrowthOutcome::Extended { id: 0, alpha: 0.5 });
    log.record(
        0.3,
        GrowthOutcome::Founded {
            parent: 0,
            id: 1,
            alpha: 0.3,
        },
    );

    assert_eq!(log.len(), 2);
    assert_eq!(log.records()[0].step, 1);
    assert_eq!(log.records()[1].step, 2);
    assert_eq!(log.last().unwrap().alpha, 0.3);
}

#[test]
fn test_founded_count_ignores_extensions() {
    let mut log = StepLog::new();
    log.record(0.1, GrowthOutcome::Extended { id: 0, alpha: 0.1 });
    log.record(
        0.2,
        GrowthOutcome::Founded {
            parent: 0,
            id: 1,
            alpha: 0.2,
        },
    );
    log.record(0.4, GrowthOutcome::Extended { id: 1, alpha: 0.4 });
    assert_eq!(log.founded_count(), 1);
}

#[test]
fn test_log_round_trips_through_json() {
    let mut log = StepLog::new();
    log.record(0.5, GrowthOutcome::Extended { id: 0, alpha: 0.5 });
    log.record(
        0.3,
        GrowthOutcome::Founded {
            parent: 0,
            id: 1,
            alpha: 0.3,
        },
    );

    let json = log.to_json().unwrap();
    let records: Vec<StepRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(records, log.records());
}
