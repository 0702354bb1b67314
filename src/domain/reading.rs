use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One point-in-time consumption measurement reported by a smart meter.
///
/// Series are stored in arrival order and must never be assumed to be
/// chronologically sorted. Negative values are tolerated downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectricityReading {
    pub time: DateTime<Utc>,
    pub reading: Decimal,
}

impl ElectricityReading {
    pub fn new(time: DateTime<Utc>, reading: Decimal) -> Self {
        Self { time, reading }
    }
}
