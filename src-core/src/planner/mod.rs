pub mod planner_store;

pub use planner_store::{PlannerAction, PlannerData, PlannerStore};
