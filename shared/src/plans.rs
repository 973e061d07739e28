//! Official batch plans
//!
//! Fixed table of recognized shifts. A member's `batch_time` is free text
//! that references one of these labels; the table is the validation
//! surface the shells use to populate admission and replacement forms.

/// A recognized batch plan (time window plus monthly fee)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan {
    /// Stable key, `P1`..`P6`
    pub key: &'static str,
    /// Display label shown in admission forms
    pub label: &'static str,
    /// Batch time label stored on the member record
    pub time: &'static str,
    /// Fee string, e.g. "399/-"
    pub fee: &'static str,
}

pub const OFFICIAL_PLANS: [BatchPlan; 6] = [
    BatchPlan {
        key: "P1",
        label: "Plan 1: 06AM-10AM (No AC)",
        time: "06AM-10AM (4 HOUR) WITHOUT AC",
        fee: "299/-",
    },
    BatchPlan {
        key: "P2",
        label: "Plan 2: 10AM-02PM",
        time: "10AM-02PM (4 HOUR)",
        fee: "399/-",
    },
    BatchPlan {
        key: "P3",
        label: "Plan 3: 02PM-06PM",
        time: "02PM-06PM (4 HOUR)",
        fee: "399/-",
    },
    BatchPlan {
        key: "P4",
        label: "Plan 4: 06PM-10PM (Happy Hour)",
        time: "06PM-10PM (4 HOUR) HAPPY HOUR",
        fee: "399/-",
    },
    BatchPlan {
        key: "P5",
        label: "Plan 5: Two Shift (10AM-06PM)",
        time: "TWO SHIFT (10AM-06PM)",
        fee: "799/-",
    },
    BatchPlan {
        key: "P6",
        label: "Plan 6: Full Shift (06AM-06PM)",
        time: "FULL SHIFT (06AM-06PM)",
        fee: "1199/-",
    },
];

/// Look up a plan by its batch time label
pub fn find_by_time(time: &str) -> Option<&'static BatchPlan> {
    OFFICIAL_PLANS.iter().find(|p| p.time == time)
}

/// Whether the label matches a recognized plan
pub fn is_recognized_time(time: &str) -> bool {
    find_by_time(time).is_some()
}
