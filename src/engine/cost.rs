use itertools::Itertools;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;
use thiserror::Error;

use crate::domain::{ElectricityReading, PricePlan};

/// Working scale for intermediate results. Divisions are rounded half-up
/// to this many decimal places at each step, not only at the end.
pub const COST_SCALE: u32 = 8;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CostError {
    #[error("insufficient readings: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("readings span a zero-length time window")]
    DegenerateTimeWindow,
}

/// Cost of one meter's history under one plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanCost {
    pub plan_name: String,
    pub cost: Decimal,
}

fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(COST_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Mean of all reading values, rounded half-up.
///
/// Callers guarantee the series is non-empty.
fn average_reading(readings: &[ElectricityReading]) -> Decimal {
    let sum: Decimal = readings.iter().map(|r| r.reading).sum();
    round_half_up(sum / Decimal::from(readings.len() as u64))
}

/// Whole seconds between the two timestamps, as fractional hours.
fn elapsed_hours(seconds: i64) -> Decimal {
    round_half_up(Decimal::from(seconds) / dec!(3600))
}

/// Estimate what `readings` would have cost under `plan`.
///
/// Average consumption divided by the elapsed time between the earliest
/// and latest reading (found by timestamp, not position), multiplied by
/// the plan's unit rate.
pub fn cost_for_plan(
    readings: &[ElectricityReading],
    plan: &PricePlan,
) -> Result<Decimal, CostError> {
    let Some((first, last)) = readings.iter().minmax_by_key(|r| r.time).into_option() else {
        return Err(CostError::InsufficientData { needed: 1, got: 0 });
    };

    // num_seconds truncates: a sub-second window is as degenerate as a
    // single reading.
    let seconds = last.time.signed_duration_since(first.time).num_seconds();
    if seconds == 0 {
        return Err(CostError::DegenerateTimeWindow);
    }

    let averaged_cost = round_half_up(average_reading(readings) / elapsed_hours(seconds));
    Ok(averaged_cost * plan.unit_rate)
}

/// One cost entry per catalogue plan, in catalogue order.
pub fn cost_for_all_plans(
    readings: &[ElectricityReading],
    plans: &[PricePlan],
) -> Result<Vec<PlanCost>, CostError> {
    plans
        .iter()
        .map(|plan| {
            Ok(PlanCost {
                plan_name: plan.plan_name.clone(),
                cost: cost_for_plan(readings, plan)?,
            })
        })
        .collect()
}
