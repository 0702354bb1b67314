use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

use crate::domain::ElectricityReading;

/// In-memory reading store: meter id -> readings in arrival order.
///
/// An unknown meter and a known meter with zero readings are distinct
/// states; `get` returns `None` only for the former. All access goes
/// through one lock, and readers receive a cloned snapshot so a
/// concurrent append cannot mutate a series mid-computation.
#[derive(Default)]
pub struct MeterReadingService {
    readings: RwLock<HashMap<String, Vec<ElectricityReading>>>,
}

impl MeterReadingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append readings for a meter, creating the series if absent.
    pub fn store(&self, smart_meter_id: &str, new_readings: Vec<ElectricityReading>) {
        debug!(smart_meter_id, count = new_readings.len(), "storing readings");
        self.readings
            .write()
            .entry(smart_meter_id.to_string())
            .or_default()
            .extend(new_readings);
    }

    /// Snapshot of the series for a meter, `None` when the meter is unknown.
    pub fn get(&self, smart_meter_id: &str) -> Option<Vec<ElectricityReading>> {
        self.readings.read().get(smart_meter_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn sample(offset_hours: i64) -> ElectricityReading {
        let t0 = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        ElectricityReading::new(t0 + Duration::hours(offset_hours), dec!(1.5))
    }

    #[test]
    fn unknown_meter_is_absent_not_empty() {
        let store = MeterReadingService::new();
        assert_eq!(store.get("smart-meter-0"), None);

        store.store("smart-meter-0", vec![]);
        assert_eq!(store.get("smart-meter-0"), Some(vec![]));
    }

    #[test]
    fn store_appends_in_arrival_order() {
        let store = MeterReadingService::new();
        store.store("smart-meter-0", vec![sample(2), sample(0)]);
        store.store("smart-meter-0", vec![sample(1)]);

        let series = store.get("smart-meter-0").unwrap();
        assert_eq!(series, vec![sample(2), sample(0), sample(1)]);
    }

    #[test]
    fn meters_are_isolated() {
        let store = MeterReadingService::new();
        store.store("smart-meter-0", vec![sample(0)]);
        assert_eq!(store.get("smart-meter-1"), None);
    }
}
