use super::*;
use std::sync::Arc;

use chrono::NaiveDate;
use shared::models::MemberDraft;

use crate::clock::FixedClock;
use crate::ids::SequentialAllocator;

/// Pinned clock: 03 Feb 2024, millis ending in 1234
fn test_clock() -> FixedClock {
    FixedClock::new(
        NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(),
        1_700_000_001_234,
    )
}

fn test_registry() -> Registry {
    Registry::new(Arc::new(test_clock()), Arc::new(SequentialAllocator::default()))
}

fn draft(name: &str, seat: &str) -> MemberDraft {
    MemberDraft {
        name: name.to_string(),
        father_name: "TEST FATHER".to_string(),
        address: "Mohanpur Bazar".to_string(),
        phone: "9800000000".to_string(),
        seat_no: seat.to_string(),
        batch_time: "10AM-02PM (4 HOUR)".to_string(),
        fee: "399/-".to_string(),
        dues: String::new(),
        join_date: "2024-02-01".to_string(),
        ..MemberDraft::default()
    }
}

fn draft_with_dues(name: &str, seat: &str, dues: &str) -> MemberDraft {
    MemberDraft {
        dues: dues.to_string(),
        ..draft(name, seat)
    }
}
