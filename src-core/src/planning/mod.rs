pub mod calculator;
pub mod distributor;
pub mod planning_model;
pub mod planning_service;

pub use calculator::{
    future_value, required_periodic_contribution, DEFAULT_ANNUAL_RETURN_PERCENTAGE,
};
pub use distributor::{distribute, per_goal_for_instrument, sum_by_instrument};
pub use planning_model::{
    FinancialGoalSummary, GoalContribution, GoalWiseInvestmentSuggestions, InvestmentSuggestion,
    TermProgress,
};
pub use planning_service::PlanningService;
