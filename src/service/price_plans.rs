use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::PricePlan;
use crate::engine::{self, CostError, PlanCost};

use super::readings::MeterReadingService;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("unknown meter: {0}")]
    UnknownMeter(String),

    #[error(transparent)]
    Cost(#[from] CostError),
}

/// Orchestrates the cost engine over the fixed plan catalogue and the
/// reading store.
pub struct PricePlanService {
    plans: Vec<PricePlan>,
    readings: Arc<MeterReadingService>,
}

impl PricePlanService {
    pub fn new(plans: Vec<PricePlan>, readings: Arc<MeterReadingService>) -> Self {
        Self { plans, readings }
    }

    pub fn plans(&self) -> &[PricePlan] {
        &self.plans
    }

    /// Cost of the meter's history under every catalogue plan, in
    /// catalogue order.
    ///
    /// The unknown-meter case is decided here, before the engine runs:
    /// a meter the store has never seen is `UnknownMeter`, a known meter
    /// with too little data is a `Cost` rejection.
    pub fn compare_costs(&self, smart_meter_id: &str) -> Result<Vec<PlanCost>, QuoteError> {
        let readings = self
            .readings
            .get(smart_meter_id)
            .ok_or_else(|| QuoteError::UnknownMeter(smart_meter_id.to_string()))?;
        Ok(engine::cost_for_all_plans(&readings, &self.plans)?)
    }

    /// Cheapest plans first, optionally truncated.
    pub fn recommend(
        &self,
        smart_meter_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<PlanCost>, QuoteError> {
        Ok(engine::rank(self.compare_costs(smart_meter_id)?, limit))
    }

    /// Last-7-days estimate at the fixed unit price, unrelated to the
    /// catalogue.
    pub fn cost_last_week(&self, smart_meter_id: &str) -> Result<Decimal, QuoteError> {
        let readings = self
            .readings
            .get(smart_meter_id)
            .ok_or_else(|| QuoteError::UnknownMeter(smart_meter_id.to_string()))?;
        Ok(engine::cost_last_week(&readings, Utc::now())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal_macros::dec;

    use crate::domain::ElectricityReading;

    fn service_with_readings() -> PricePlanService {
        let readings = Arc::new(MeterReadingService::new());
        let t0 = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        readings.store(
            "smart-meter-0",
            vec![
                ElectricityReading::new(t0, dec!(10)),
                ElectricityReading::new(t0 + Duration::hours(1), dec!(20)),
                ElectricityReading::new(t0 + Duration::hours(2), dec!(30)),
            ],
        );
        readings.store("smart-meter-1", vec![]);

        let plans = vec![
            PricePlan::new("price-plan-0", "Dr Evil's Dark Energy", dec!(10)),
            PricePlan::new("price-plan-1", "The Green Eco", dec!(2)),
            PricePlan::new("price-plan-2", "Power for Everyone", dec!(1)),
        ];
        PricePlanService::new(plans, readings)
    }

    #[test]
    fn compare_costs_covers_the_whole_catalogue() {
        let service = service_with_readings();
        let costs = service.compare_costs("smart-meter-0").unwrap();
        assert_eq!(costs.len(), 3);
        assert_eq!(costs[0].plan_name, "price-plan-0");
        assert_eq!(costs[0].cost, dec!(100));
        assert_eq!(costs[2].cost, dec!(10));
    }

    #[test]
    fn unknown_meter_is_not_an_engine_failure() {
        let service = service_with_readings();
        let err = service.compare_costs("smart-meter-9").unwrap_err();
        assert!(matches!(err, QuoteError::UnknownMeter(id) if id == "smart-meter-9"));
    }

    #[test]
    fn known_meter_without_readings_is_an_engine_failure() {
        let service = service_with_readings();
        let err = service.compare_costs("smart-meter-1").unwrap_err();
        assert!(matches!(
            err,
            QuoteError::Cost(CostError::InsufficientData { needed: 1, got: 0 })
        ));
    }

    #[test]
    fn recommend_ranks_cheapest_first_and_limits() {
        let service = service_with_readings();
        let ranked = service.recommend("smart-meter-0", Some(2)).unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].plan_name, "price-plan-2");
        assert_eq!(ranked[1].plan_name, "price-plan-1");
    }
}
