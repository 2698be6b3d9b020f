//! Splits a required contribution across a term's allocation entries.
//!
//! Total and pure: placeholder rows are skipped and the raw percentages are
//! applied as-is. Whether the percentages sum to 100 is the submission
//! path's concern, not this one's.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::allocation::allocation_model::{AllocationEntry, Instrument};
use crate::planning::planning_model::{
    GoalContribution, GoalWiseInvestmentSuggestions, InvestmentSuggestion,
};

/// Split `required_contribution` across the entries, in entry order.
pub fn distribute(
    required_contribution: Decimal,
    entries: &[AllocationEntry],
) -> Vec<InvestmentSuggestion> {
    entries
        .iter()
        .filter(|entry| !entry.is_placeholder())
        .map(|entry| InvestmentSuggestion {
            investment_name: entry.investment_name.clone(),
            amount: required_contribution * entry.investment_percentage / dec!(100),
        })
        .collect()
}

/// Total per instrument across all goals' suggestions. Map iteration order
/// is unspecified; consumers decide display order.
pub fn sum_by_instrument(
    suggestions: &[GoalWiseInvestmentSuggestions],
) -> HashMap<Instrument, Decimal> {
    let mut totals: HashMap<Instrument, Decimal> = HashMap::new();
    for goal_wise in suggestions {
        for suggestion in &goal_wise.investment_suggestions {
            *totals
                .entry(suggestion.investment_name.clone())
                .or_insert(Decimal::ZERO) += suggestion.amount;
        }
    }
    totals
}

/// Reverse index for drill-down: each goal's contribution into one
/// instrument, in goal order.
pub fn per_goal_for_instrument(
    suggestions: &[GoalWiseInvestmentSuggestions],
    instrument: &Instrument,
) -> Vec<GoalContribution> {
    suggestions
        .iter()
        .filter_map(|goal_wise| {
            goal_wise
                .investment_suggestions
                .iter()
                .find(|suggestion| &suggestion.investment_name == instrument)
                .map(|suggestion| GoalContribution {
                    goal_name: goal_wise.goal_name.clone(),
                    amount: suggestion.amount,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries_60_40() -> Vec<AllocationEntry> {
        vec![
            AllocationEntry::new(Instrument::Gold, dec!(60)),
            AllocationEntry::new(Instrument::Stocks, dec!(40)),
        ]
    }

    #[test]
    fn distribution_follows_entry_percentages() {
        let suggestions = distribute(dec!(10000), &entries_60_40());
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].investment_name, Instrument::Gold);
        assert_eq!(suggestions[0].amount, dec!(6000));
        assert_eq!(suggestions[1].amount, dec!(4000));
    }

    #[test]
    fn a_full_allocation_distributes_the_whole_contribution() {
        let required = dec!(61606.70);
        let total: Decimal = distribute(required, &entries_60_40())
            .iter()
            .map(|suggestion| suggestion.amount)
            .sum();
        assert_eq!(total, required);
    }

    #[test]
    fn placeholders_get_nothing() {
        let mut entries = entries_60_40();
        entries.push(AllocationEntry::new(Instrument::Custom(String::new()), dec!(30)));
        entries.push(AllocationEntry::new(Instrument::Bonds, dec!(0)));
        assert_eq!(distribute(dec!(1000), &entries).len(), 2);
    }

    #[test]
    fn partial_allocations_still_distribute_on_raw_percentages() {
        // The 100%-sum gate lives upstream; this stays total.
        let entries = vec![AllocationEntry::new(Instrument::Gold, dec!(50))];
        let suggestions = distribute(dec!(1000), &entries);
        assert_eq!(suggestions[0].amount, dec!(500));
    }

    #[test]
    fn rollups_aggregate_across_goals() {
        let suggestions = vec![
            GoalWiseInvestmentSuggestions {
                goal_name: "Car".to_string(),
                investment_suggestions: distribute(dec!(1000), &entries_60_40()),
            },
            GoalWiseInvestmentSuggestions {
                goal_name: "House".to_string(),
                investment_suggestions: distribute(dec!(3000), &entries_60_40()),
            },
        ];

        let totals = sum_by_instrument(&suggestions);
        assert_eq!(totals[&Instrument::Gold], dec!(2400));
        assert_eq!(totals[&Instrument::Stocks], dec!(1600));

        let gold = per_goal_for_instrument(&suggestions, &Instrument::Gold);
        assert_eq!(gold.len(), 2);
        assert_eq!(gold[0].goal_name, "Car");
        assert_eq!(gold[0].amount, dec!(600));
        assert_eq!(gold[1].goal_name, "House");
        assert_eq!(gold[1].amount, dec!(1800));

        assert!(per_goal_for_instrument(&suggestions, &Instrument::Cash).is_empty());
    }
}
