use chrono::{DateTime, Duration, Utc};
use itertools::{Itertools, MinMaxResult};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::cost::{CostError, COST_SCALE};
use crate::domain::ElectricityReading;

/// Fixed unit price for the weekly estimate, independent of the plan
/// catalogue.
pub const LAST_WEEK_UNIT_RATE: Decimal = dec!(0.2);

const WINDOW_DAYS: i64 = 7;

/// Estimate the cost of consumption over the last seven days at the
/// fixed unit price.
///
/// Readings strictly inside `(now - 7 days, now)` are considered; the
/// window endpoints are the chronologically earliest and latest of
/// those, regardless of arrival order. The billed duration is the whole
/// number of hours between them, so a window shorter than an hour costs
/// zero rather than failing.
pub fn cost_last_week(
    readings: &[ElectricityReading],
    now: DateTime<Utc>,
) -> Result<Decimal, CostError> {
    if readings.len() < 2 {
        return Err(CostError::InsufficientData {
            needed: 2,
            got: readings.len(),
        });
    }

    let window_start = now - Duration::days(WINDOW_DAYS);
    let in_window = readings
        .iter()
        .filter(|r| r.time > window_start && r.time < now);

    let (start, end) = match in_window.minmax_by_key(|r| r.time) {
        MinMaxResult::MinMax(start, end) => (start, end),
        MinMaxResult::OneElement(_) => {
            return Err(CostError::InsufficientData { needed: 2, got: 1 })
        }
        MinMaxResult::NoElements => {
            return Err(CostError::InsufficientData { needed: 2, got: 0 })
        }
    };

    let hours = end.time.signed_duration_since(start.time).num_hours();
    let average = ((start.reading + end.reading) / dec!(2))
        .round_dp_with_strategy(COST_SCALE, RoundingStrategy::MidpointAwayFromZero);

    Ok(average * Decimal::from(hours) * LAST_WEEK_UNIT_RATE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 8, 12, 0, 0).unwrap()
    }

    fn reading_hours_ago(hours: i64, value: Decimal) -> ElectricityReading {
        ElectricityReading::new(now() - Duration::hours(hours), value)
    }

    #[test]
    fn averages_window_endpoints_over_whole_hours() {
        let readings = vec![
            reading_hours_ago(49, dec!(10)),
            reading_hours_ago(24, dec!(99)),
            reading_hours_ago(1, dec!(30)),
        ];
        // endpoints 10 and 30, average 20, 48 whole hours, 0.2 per unit-hour
        let cost = cost_last_week(&readings, now()).unwrap();
        assert_eq!(cost, dec!(192.0));
    }

    #[test]
    fn endpoints_are_chronological_not_positional() {
        let readings = vec![
            reading_hours_ago(1, dec!(30)),
            reading_hours_ago(49, dec!(10)),
            reading_hours_ago(24, dec!(99)),
        ];
        let cost = cost_last_week(&readings, now()).unwrap();
        assert_eq!(cost, dec!(192.0));
    }

    #[test]
    fn readings_outside_the_window_are_ignored() {
        let readings = vec![
            reading_hours_ago(24 * 30, dec!(1000)),
            reading_hours_ago(49, dec!(10)),
            reading_hours_ago(1, dec!(30)),
        ];
        let cost = cost_last_week(&readings, now()).unwrap();
        assert_eq!(cost, dec!(192.0));
    }

    #[test]
    fn window_bounds_are_strict() {
        // exactly now and exactly seven days ago both fall outside
        let readings = vec![
            ElectricityReading::new(now() - Duration::days(7), dec!(10)),
            ElectricityReading::new(now(), dec!(30)),
        ];
        let err = cost_last_week(&readings, now()).unwrap_err();
        assert_eq!(err, CostError::InsufficientData { needed: 2, got: 0 });
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![reading_hours_ago(1, dec!(5))])]
    fn fewer_than_two_readings_overall_is_insufficient(#[case] readings: Vec<ElectricityReading>) {
        let got = readings.len();
        let err = cost_last_week(&readings, now()).unwrap_err();
        assert_eq!(err, CostError::InsufficientData { needed: 2, got });
    }

    #[test]
    fn one_reading_inside_the_window_is_insufficient() {
        let readings = vec![
            reading_hours_ago(24 * 30, dec!(1000)),
            reading_hours_ago(1, dec!(5)),
        ];
        let err = cost_last_week(&readings, now()).unwrap_err();
        assert_eq!(err, CostError::InsufficientData { needed: 2, got: 1 });
    }

    #[test]
    fn sub_hour_window_costs_nothing() {
        let readings = vec![
            ElectricityReading::new(now() - Duration::minutes(40), dec!(10)),
            ElectricityReading::new(now() - Duration::minutes(10), dec!(30)),
        ];
        let cost = cost_last_week(&readings, now()).unwrap();
        assert_eq!(cost, dec!(0));
    }

    #[test]
    fn partial_hours_are_not_billed() {
        let readings = vec![
            ElectricityReading::new(now() - Duration::minutes(150), dec!(10)),
            ElectricityReading::new(now() - Duration::minutes(10), dec!(30)),
        ];
        // 2h20m apart -> 2 whole hours: 20 * 2 * 0.2
        let cost = cost_last_week(&readings, now()).unwrap();
        assert_eq!(cost, dec!(8.0));
    }
}
