pub mod error;
pub mod health;
pub mod price_plans;
pub mod readings;

use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{config::Config, service::AppState};

pub fn router(state: AppState, cfg: &Config) -> Router {
    let mut router = Router::new().nest("/api/v1", v1_router(state));

    if cfg.server.enable_cors {
        use tower_http::cors::{AllowOrigin, CorsLayer};
        let cors = CorsLayer::new()
            .allow_origin(AllowOrigin::exact("http://localhost:3000".parse().unwrap()))
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_headers([axum::http::header::CONTENT_TYPE]);
        router = router.layer(cors);
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    cfg.server.request_timeout_secs,
                ))),
        )
        .layer(TraceLayer::new_for_http())
}

fn v1_router(state: AppState) -> Router {
    Router::new()
        .route("/readings/store", post(readings::store_readings))
        .route("/readings/read/:smart_meter_id", get(readings::read_readings))
        .route(
            "/price-plans/compare-all/:smart_meter_id",
            get(price_plans::compare_all),
        )
        .route(
            "/price-plans/recommend/:smart_meter_id",
            get(price_plans::recommend),
        )
        .route(
            "/price-plans/last-week/:smart_meter_id",
            get(price_plans::last_week),
        )
        .route("/healthz", get(health::healthz))
        .with_state(state)
}
