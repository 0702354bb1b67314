use chrono::{Duration, Utc};
use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use tracing::info;

use crate::config::SeedConfig;
use crate::domain::ElectricityReading;

use super::accounts::AccountService;
use super::readings::MeterReadingService;

/// Populate the reading store with synthetic history for every meter in
/// the account directory, so comparisons work straight after startup.
pub fn seed_readings(cfg: &SeedConfig, accounts: &AccountService, store: &MeterReadingService) {
    if !cfg.enabled {
        return;
    }

    let interval = cfg.interval_minutes.max(1);
    let mut rng = rand::thread_rng();

    for smart_meter_id in accounts.smart_meter_ids() {
        let mut readings = Vec::new();
        let mut cursor = Utc::now() - Duration::days(cfg.days);
        let end = Utc::now();
        while cursor < end {
            let value = rng.gen_range(0.0..1.0_f64);
            let reading = Decimal::from_f64(value).unwrap_or_default().round_dp(4);
            readings.push(ElectricityReading::new(cursor, reading));
            cursor += Duration::minutes(interval);
        }
        info!(smart_meter_id, count = readings.len(), "seeded readings");
        store.store(smart_meter_id, readings);
    }
}
