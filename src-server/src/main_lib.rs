use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use goalfolio_core::planner::PlannerStore;
use goalfolio_core::planning::PlanningService;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api;

/// Shared server state: the single planner store behind a lock, plus the
/// stateless planning service. Handlers hold the lock only for the duration
/// of one transition or query.
pub struct AppState {
    pub planner: RwLock<PlannerStore>,
    pub planning: PlanningService,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            planner: RwLock::new(PlannerStore::new()),
            planning: PlanningService::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api::router())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(10)))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
