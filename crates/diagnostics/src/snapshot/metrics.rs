use serde::{Deserialize, Serialize};

/// A cumulative counter paired with its observed rate of change, as reported
/// by the broker's management plane at capture time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub total: u64,
    pub rate: f64,
}

impl Metric {
    pub fn new(total: u64, rate: f64) -> Self {
        Self { total, rate }
    }

    /// A metric for which the capture subsystem reported no rate.
    pub fn of(total: u64) -> Self {
        Self { total, rate: 0.0 }
    }
}
