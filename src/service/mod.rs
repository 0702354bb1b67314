pub mod accounts;
pub mod price_plans;
pub mod readings;
pub mod seed;

use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::Arc;

use crate::config::Config;
use crate::domain::PricePlan;

pub use accounts::AccountService;
pub use price_plans::{PricePlanService, QuoteError};
pub use readings::MeterReadingService;

#[derive(Clone)]
pub struct AppState {
    pub readings: Arc<MeterReadingService>,
    pub accounts: Arc<AccountService>,
    pub price_plans: Arc<PricePlanService>,
}

impl AppState {
    pub fn new(cfg: Config) -> Result<Self> {
        let plans = catalogue(&cfg)?;

        let readings = Arc::new(MeterReadingService::new());
        let accounts = Arc::new(AccountService::new(cfg.accounts.clone()));

        seed::seed_readings(&cfg.seed, &accounts, &readings);

        let price_plans = Arc::new(PricePlanService::new(plans, readings.clone()));

        Ok(Self {
            readings,
            accounts,
            price_plans,
        })
    }
}

/// Build the plan catalogue from config, rejecting states the engine
/// treats as undefined: duplicate plan names and negative unit rates.
fn catalogue(cfg: &Config) -> Result<Vec<PricePlan>> {
    if cfg.plans.is_empty() {
        anyhow::bail!("price plan catalogue is empty");
    }

    let mut seen = HashSet::new();
    for plan in &cfg.plans {
        if plan.name.is_empty() {
            anyhow::bail!("price plan with empty name");
        }
        if !seen.insert(plan.name.as_str()) {
            anyhow::bail!("duplicate price plan name: {}", plan.name);
        }
        if plan.unit_rate < Decimal::ZERO {
            anyhow::bail!("negative unit rate for plan {}", plan.name);
        }
    }

    Ok(cfg
        .plans
        .iter()
        .map(|p| PricePlan::new(p.name.clone(), p.supplier.clone(), p.unit_rate))
        .collect())
}
