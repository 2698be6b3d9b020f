use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::allocation::allocation_model::Instrument;
use crate::goals::goals_model::TermType;

/// One instrument's share of a goal's required yearly contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentSuggestion {
    pub investment_name: Instrument,
    pub amount: Decimal,
}

/// Per-goal instrument breakdown for a selected year, in goal insertion
/// order. The shape consumed by chart/table/card renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalWiseInvestmentSuggestions {
    pub goal_name: String,
    pub investment_suggestions: Vec<InvestmentSuggestion>,
}

/// Reverse-index row: one goal's contribution into a single instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalContribution {
    pub goal_name: String,
    pub amount: Decimal,
}

/// Goal count for one term bucket; drives which allocation editors are shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialGoalSummary {
    pub term_type: TermType,
    pub number_of_goals: usize,
}

/// Actual-vs-required progress for one term bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermProgress {
    pub term_type: TermType,
    /// Raw ratio of actual to required investment, as a percentage. May
    /// exceed 100 for over-funded buckets.
    pub progress_percent: Decimal,
    /// Total required investment to date across the bucket's goals.
    pub term_type_sum: Decimal,
    pub goal_names: Vec<String>,
}

impl TermProgress {
    /// Display-friendly percentage, capped at 100.
    pub fn display_percent(&self) -> f64 {
        self.progress_percent
            .min(dec!(100))
            .to_f64()
            .unwrap_or(0.0)
    }
}
