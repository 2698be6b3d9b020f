use std::collections::HashMap;
use std::sync::Arc;

use chrono::Datelike;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use goalfolio_core::allocation::{
    AllocationEntry, AssetSplit, Instrument, InstrumentInfo, TermKeyed, INSTRUMENT_CATALOG,
};
use goalfolio_core::goals::TermType;
use goalfolio_core::planner::PlannerAction;
use goalfolio_core::planning::{
    sum_by_instrument, GoalWiseInvestmentSuggestions, TermProgress,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};

async fn get_instruments() -> Json<Vec<InstrumentInfo>> {
    Json(INSTRUMENT_CATALOG.clone())
}

async fn get_assets(State(state): State<Arc<AppState>>) -> Json<TermKeyed<Vec<AssetSplit>>> {
    let planner = state.planner.read().await;
    Json(planner.data().assets.clone())
}

async fn set_assets(
    Path(term_type): Path<TermType>,
    State(state): State<Arc<AppState>>,
    Json(splits): Json<Vec<AssetSplit>>,
) -> ApiResult<StatusCode> {
    let mut planner = state.planner.write().await;
    planner.set_asset_mix(term_type, splits)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_allocations(
    State(state): State<Arc<AppState>>,
) -> Json<TermKeyed<Vec<AllocationEntry>>> {
    let planner = state.planner.read().await;
    Json(planner.data().allocations.clone())
}

async fn set_allocation(
    Path(term_type): Path<TermType>,
    State(state): State<Arc<AppState>>,
    Json(entries): Json<Vec<AllocationEntry>>,
) -> ApiResult<StatusCode> {
    let mut planner = state.planner.write().await;
    planner.set_allocation(term_type, entries)?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SuggestionQuery {
    /// Defaults to the current year.
    year: Option<i32>,
    term_type: TermType,
}

impl SuggestionQuery {
    fn year(&self) -> i32 {
        self.year.unwrap_or_else(|| chrono::Local::now().year())
    }
}

/// Per-goal instrument breakdowns for one term bucket and year.
async fn get_suggestions(
    Query(query): Query<SuggestionQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<GoalWiseInvestmentSuggestions>>> {
    let planner = state.planner.read().await;
    let suggestions = state.planning.calculate_investment_needed_for_goals(
        planner.data(),
        query.year(),
        query.term_type,
    )?;
    Ok(Json(suggestions))
}

/// Cross-goal rollup feeding the per-instrument cards.
async fn get_suggestions_by_instrument(
    Query(query): Query<SuggestionQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<HashMap<Instrument, Decimal>>> {
    let planner = state.planner.read().await;
    let suggestions = state.planning.calculate_investment_needed_for_goals(
        planner.data(),
        query.year(),
        query.term_type,
    )?;
    Ok(Json(sum_by_instrument(&suggestions)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProgressRequest {
    year: i32,
    /// Actual invested amount per term bucket, supplied by the caller.
    #[serde(default)]
    actuals: HashMap<TermType, Decimal>,
}

async fn post_progress(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ProgressRequest>,
) -> ApiResult<Json<Vec<TermProgress>>> {
    let planner = state.planner.read().await;
    let progress =
        state
            .planning
            .term_progress(planner.data(), &request.actuals, request.year)?;
    Ok(Json(progress))
}

/// Reducer-style dispatch endpoint for named planner actions.
async fn post_action(
    State(state): State<Arc<AppState>>,
    Json(action): Json<PlannerAction>,
) -> ApiResult<StatusCode> {
    let mut planner = state.planner.write().await;
    planner.apply(action)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/instruments", get(get_instruments))
        .route("/assets", get(get_assets))
        .route("/assets/:term_type", put(set_assets))
        .route("/allocations", get(get_allocations))
        .route("/allocations/:term_type", put(set_allocation))
        .route("/suggestions", get(get_suggestions))
        .route("/suggestions/by-instrument", get(get_suggestions_by_instrument))
        .route("/progress", post(post_progress))
        .route("/actions", post(post_action))
}
