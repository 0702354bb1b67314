use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named tariff: flat cost per unit of consumption per hour.
///
/// `plan_name` is the unique identifier across the catalogue; `supplier`
/// is display metadata only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePlan {
    pub plan_name: String,
    pub supplier: String,
    pub unit_rate: Decimal,
}

impl PricePlan {
    pub fn new(plan_name: impl Into<String>, supplier: impl Into<String>, unit_rate: Decimal) -> Self {
        Self {
            plan_name: plan_name.into(),
            supplier: supplier.into(),
            unit_rate,
        }
    }
}
