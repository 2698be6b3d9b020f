use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Time-horizon bucket a goal falls into. Cutoffs live in
/// [`crate::goals::term_policy::TermPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TermType {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl TermType {
    pub const ALL: [TermType; 3] = [TermType::ShortTerm, TermType::MediumTerm, TermType::LongTerm];

    pub fn as_str(&self) -> &'static str {
        match self {
            TermType::ShortTerm => "SHORT_TERM",
            TermType::MediumTerm => "MEDIUM_TERM",
            TermType::LongTerm => "LONG_TERM",
        }
    }
}

impl fmt::Display for TermType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single financial goal: a named target amount to be reached by a target
/// date, funded by yearly investments starting on `investment_start_date`.
///
/// Goals are immutable outside the planner store's transitions; edits replace
/// the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    /// User-visible label. Not guaranteed unique.
    pub name: String,
    pub target_amount: Decimal,
    pub target_date: NaiveDate,
    pub investment_start_date: NaiveDate,
    pub term_type: TermType,
    pub created_at: NaiveDateTime,
}

impl Goal {
    /// Whether contributions toward this goal are expected in `year`.
    pub fn is_active_in(&self, year: i32) -> bool {
        self.investment_start_date.year() <= year && year <= self.target_date.year()
    }

    /// Number of yearly contributions over the goal's full horizon. A goal
    /// due within its start year still takes one contribution.
    pub fn horizon_years(&self) -> i32 {
        (self.target_date.year() - self.investment_start_date.year()).max(1)
    }
}

/// Creation/edit payload supplied by goal forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub target_amount: Decimal,
    pub target_date: NaiveDate,
    /// Defaults to today when omitted.
    #[serde(default)]
    pub investment_start_date: Option<NaiveDate>,
}

/// Addresses a goal for removal, either by position or by id/name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GoalSelector {
    Index(usize),
    Key(String),
}

impl fmt::Display for GoalSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalSelector::Index(i) => write!(f, "#{}", i),
            GoalSelector::Key(k) => f.write_str(k),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn goal(start: NaiveDate, target: NaiveDate) -> Goal {
        Goal {
            id: "g-1".to_string(),
            name: "Car".to_string(),
            target_amount: dec!(200000),
            target_date: target,
            investment_start_date: start,
            term_type: TermType::MediumTerm,
            created_at: start.and_hms_opt(0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn active_window_is_inclusive_of_both_end_years() {
        let g = goal(date(2024, 1, 1), date(2027, 1, 1));
        assert!(!g.is_active_in(2023));
        assert!(g.is_active_in(2024));
        assert!(g.is_active_in(2027));
        assert!(!g.is_active_in(2028));
    }

    #[test]
    fn sub_year_goal_still_has_one_contribution() {
        let g = goal(date(2024, 3, 1), date(2024, 9, 1));
        assert_eq!(g.horizon_years(), 1);
    }

    #[test]
    fn term_type_serializes_screaming_snake() {
        let json = serde_json::to_string(&TermType::ShortTerm).unwrap();
        assert_eq!(json, "\"SHORT_TERM\"");
    }
}
