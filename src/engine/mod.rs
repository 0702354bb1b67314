//! The cost estimation core: pure functions over a borrowed reading series.
//!
//! Nothing in here touches storage or transport; handlers pass in a
//! snapshot of readings and the fixed plan catalogue.

pub mod cost;
pub mod ranking;
pub mod weekly;

pub use cost::{cost_for_all_plans, cost_for_plan, CostError, PlanCost};
pub use ranking::rank;
pub use weekly::cost_last_week;
