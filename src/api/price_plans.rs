//! Price plan comparison and recommendation endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::engine::PlanCost;
use crate::service::AppState;

use super::error::ApiError;

#[derive(Debug, Serialize)]
pub struct CompareAllResponse {
    /// The plan the account is currently subscribed to, if any.
    pub price_plan_id: Option<String>,
    pub price_plan_comparisons: BTreeMap<String, Decimal>,
}

/// GET /price-plans/compare-all/{smart_meter_id}
pub async fn compare_all(
    State(st): State<AppState>,
    Path(smart_meter_id): Path<String>,
) -> Result<Json<CompareAllResponse>, ApiError> {
    let costs = st.price_plans.compare_costs(&smart_meter_id)?;
    let price_plan_id = st.accounts.price_plan_id_for(&smart_meter_id);

    Ok(Json(CompareAllResponse {
        price_plan_id,
        price_plan_comparisons: costs.into_iter().map(|c| (c.plan_name, c.cost)).collect(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    pub limit: Option<usize>,
}

/// GET /price-plans/recommend/{smart_meter_id}?limit=N
pub async fn recommend(
    State(st): State<AppState>,
    Path(smart_meter_id): Path<String>,
    Query(q): Query<RecommendQuery>,
) -> Result<Json<Vec<PlanCost>>, ApiError> {
    Ok(Json(st.price_plans.recommend(&smart_meter_id, q.limit)?))
}

#[derive(Debug, Serialize)]
pub struct LastWeekResponse {
    pub smart_meter_id: String,
    pub cost: Decimal,
}

/// GET /price-plans/last-week/{smart_meter_id}
pub async fn last_week(
    State(st): State<AppState>,
    Path(smart_meter_id): Path<String>,
) -> Result<Json<LastWeekResponse>, ApiError> {
    let cost = st.price_plans.cost_last_week(&smart_meter_id)?;
    Ok(Json(LastWeekResponse {
        smart_meter_id,
        cost,
    }))
}
