use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use goalfolio_core::goals::{Goal, GoalSelector, NewGoal};
use goalfolio_core::planning::FinancialGoalSummary;

use crate::{error::ApiResult, main_lib::AppState};

async fn get_goals(State(state): State<Arc<AppState>>) -> Json<Vec<Goal>> {
    let planner = state.planner.read().await;
    Json(planner.data().financial_goals.clone())
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(new_goal): Json<NewGoal>,
) -> ApiResult<(StatusCode, Json<Goal>)> {
    let mut planner = state.planner.write().await;
    let goal = planner.add_goal(new_goal)?;
    Ok((StatusCode::CREATED, Json(goal)))
}

async fn update_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(new_goal): Json<NewGoal>,
) -> ApiResult<Json<Goal>> {
    let mut planner = state.planner.write().await;
    let goal = planner.update_goal(&id, new_goal)?;
    Ok(Json(goal))
}

async fn delete_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let mut planner = state.planner.write().await;
    planner.remove_goal(&GoalSelector::Key(id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Per-term goal counts, used to decide which allocation editors to show.
async fn get_goal_summary(State(state): State<Arc<AppState>>) -> Json<Vec<FinancialGoalSummary>> {
    let planner = state.planner.read().await;
    Json(state.planning.financial_goal_summary(planner.data()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(get_goals).post(create_goal))
        .route("/goals/summary", get(get_goal_summary))
        .route("/goals/:id", put(update_goal).delete(delete_goal))
}
