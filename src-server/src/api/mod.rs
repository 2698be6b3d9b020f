use std::sync::Arc;

use axum::Router;

use crate::main_lib::AppState;

mod goals;
mod planning;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().merge(goals::router()).merge(planning::router())
}
