use super::cost::PlanCost;

/// Order plan costs ascending, cheapest first.
///
/// The sort is stable, so plans with equal costs keep their catalogue
/// order. `limit` truncates after sorting; `Some(0)` yields an empty
/// recommendation, a limit at or beyond the catalogue size returns
/// everything.
pub fn rank(mut costs: Vec<PlanCost>, limit: Option<usize>) -> Vec<PlanCost> {
    costs.sort_by(|a, b| a.cost.cmp(&b.cost));
    if let Some(limit) = limit {
        costs.truncate(limit);
    }
    costs
}
