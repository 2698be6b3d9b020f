//! Rolls per-goal investment needs up into the summaries the display layer
//! consumes: per-year instrument suggestions, per-term goal counts, and
//! actual-vs-required progress.

use std::collections::HashMap;

use chrono::Datelike;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::allocation::allocation_model::weighted_expected_return;
use crate::errors::Result;
use crate::goals::goals_model::{Goal, TermType};
use crate::planner::planner_store::PlannerData;
use crate::planning::calculator::{
    required_periodic_contribution, DEFAULT_ANNUAL_RETURN_PERCENTAGE,
};
use crate::planning::distributor::distribute;
use crate::planning::planning_model::{
    FinancialGoalSummary, GoalWiseInvestmentSuggestions, TermProgress,
};

/// Stateless aggregation over [`PlannerData`]. Holds only the fallback
/// return assumption used when a term bucket has no allocation to derive a
/// rate from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanningService {
    default_return_percentage: Decimal,
}

impl Default for PlanningService {
    fn default() -> Self {
        PlanningService {
            default_return_percentage: DEFAULT_ANNUAL_RETURN_PERCENTAGE,
        }
    }
}

impl PlanningService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_return(default_return_percentage: Decimal) -> Self {
        PlanningService {
            default_return_percentage,
        }
    }

    /// Goal counts per term bucket. All three buckets are always present.
    pub fn financial_goal_summary(&self, data: &PlannerData) -> Vec<FinancialGoalSummary> {
        TermType::ALL
            .iter()
            .map(|&term_type| FinancialGoalSummary {
                term_type,
                number_of_goals: data
                    .financial_goals
                    .iter()
                    .filter(|goal| goal.term_type == term_type)
                    .count(),
            })
            .collect()
    }

    /// Per-goal instrument breakdowns for every goal of `term_type` whose
    /// active window contains `selected_year`, in goal insertion order.
    pub fn calculate_investment_needed_for_goals(
        &self,
        data: &PlannerData,
        selected_year: i32,
        term_type: TermType,
    ) -> Result<Vec<GoalWiseInvestmentSuggestions>> {
        let entries = data.allocations.get(term_type);
        let rate = self.term_rate(data, term_type);

        data.financial_goals
            .iter()
            .filter(|goal| goal.term_type == term_type && goal.is_active_in(selected_year))
            .map(|goal| {
                let required = self.required_contribution(goal, selected_year, rate)?;
                Ok(GoalWiseInvestmentSuggestions {
                    goal_name: goal.name.clone(),
                    investment_suggestions: distribute(required, entries),
                })
            })
            .collect()
    }

    /// Nominal contribution expected toward `goal` in `year` under the flat
    /// contribution model: the same amount every active year, zero outside
    /// the goal's window.
    pub fn contribution_at_year(
        &self,
        goal: &Goal,
        year: i32,
        annual_return_percentage: Decimal,
    ) -> Result<Decimal> {
        if !goal.is_active_in(year) {
            return Ok(Decimal::ZERO);
        }
        required_periodic_contribution(
            goal.target_amount,
            goal.horizon_years(),
            annual_return_percentage,
        )
    }

    /// Total contribution expected toward `goal` from its start year through
    /// `as_of_year` inclusive.
    pub fn required_to_date(
        &self,
        goal: &Goal,
        as_of_year: i32,
        annual_return_percentage: Decimal,
    ) -> Result<Decimal> {
        if as_of_year < goal.investment_start_date.year() {
            return Ok(Decimal::ZERO);
        }
        let last_counted = as_of_year.min(goal.target_date.year());
        let elapsed = last_counted - goal.investment_start_date.year() + 1;
        let flat = self.contribution_at_year(goal, last_counted, annual_return_percentage)?;
        Ok(flat * Decimal::from(elapsed))
    }

    /// Actual-vs-required progress per term bucket as of `as_of_year`.
    /// Actual-invested figures come from the caller; no brokerage
    /// integration exists in this engine.
    pub fn term_progress(
        &self,
        data: &PlannerData,
        actuals: &HashMap<TermType, Decimal>,
        as_of_year: i32,
    ) -> Result<Vec<TermProgress>> {
        TermType::ALL
            .iter()
            .map(|&term_type| {
                let rate = self.term_rate(data, term_type);
                let goals: Vec<&Goal> = data
                    .financial_goals
                    .iter()
                    .filter(|goal| goal.term_type == term_type)
                    .collect();

                let mut term_type_sum = Decimal::ZERO;
                for goal in &goals {
                    term_type_sum += self.required_to_date(goal, as_of_year, rate)?;
                }

                let actual = actuals.get(&term_type).copied().unwrap_or(Decimal::ZERO);
                let progress_percent = if term_type_sum.is_zero() {
                    Decimal::ZERO
                } else {
                    actual / term_type_sum * dec!(100)
                };

                Ok(TermProgress {
                    term_type,
                    progress_percent,
                    term_type_sum,
                    goal_names: goals.iter().map(|goal| goal.name.clone()).collect(),
                })
            })
            .collect()
    }

    /// Assumed annual return for a term bucket: the share-weighted average of
    /// its allocation entries, or the service default when the bucket has no
    /// active entries.
    pub fn term_rate(&self, data: &PlannerData, term_type: TermType) -> Decimal {
        weighted_expected_return(data.allocations.get(term_type))
            .unwrap_or(self.default_return_percentage)
    }

    fn required_contribution(
        &self,
        goal: &Goal,
        selected_year: i32,
        annual_return_percentage: Decimal,
    ) -> Result<Decimal> {
        let years_remaining = goal.target_date.year() - selected_year;
        if years_remaining <= 0 {
            // Goal is due this year; the remaining target is due in full.
            return Ok(goal.target_amount);
        }
        required_periodic_contribution(
            goal.target_amount,
            years_remaining,
            annual_return_percentage,
        )
    }
}
