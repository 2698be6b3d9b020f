//! Term classification policy.
//!
//! Maps a goal's time horizon onto a term bucket. The cutoffs are tunable
//! policy, not per-goal data.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::{CalculationError, Result};
use crate::goals::goals_model::TermType;

/// Boundaries between term buckets, in fractional years.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermPolicy {
    /// Horizons strictly below this are short term.
    pub short_max_years: Decimal,
    /// Horizons up to and including this are medium term; anything longer is
    /// long term.
    pub medium_max_years: Decimal,
}

impl Default for TermPolicy {
    fn default() -> Self {
        TermPolicy {
            short_max_years: dec!(3),
            medium_max_years: dec!(5),
        }
    }
}

impl TermPolicy {
    /// Classify the span between two dates into a term bucket.
    ///
    /// Fails with [`CalculationError::InvalidRange`] when `target_date` is not
    /// strictly after `investment_start_date`.
    pub fn classify(
        &self,
        investment_start_date: NaiveDate,
        target_date: NaiveDate,
    ) -> Result<TermType> {
        if target_date <= investment_start_date {
            return Err(CalculationError::InvalidRange.into());
        }
        let years = years_between(investment_start_date, target_date);
        if years < self.short_max_years {
            Ok(TermType::ShortTerm)
        } else if years <= self.medium_max_years {
            Ok(TermType::MediumTerm)
        } else {
            Ok(TermType::LongTerm)
        }
    }
}

/// Fractional years between two dates, on a 365.25-day year.
pub fn years_between(start: NaiveDate, end: NaiveDate) -> Decimal {
    Decimal::from((end - start).num_days()) / dec!(365.25)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn short_horizon_is_short_term() {
        let policy = TermPolicy::default();
        let term = policy.classify(date(2024, 1, 1), date(2025, 6, 1)).unwrap();
        assert_eq!(term, TermType::ShortTerm);
    }

    #[test]
    fn long_horizon_is_long_term() {
        let policy = TermPolicy::default();
        let term = policy.classify(date(2024, 1, 1), date(2030, 1, 1)).unwrap();
        assert_eq!(term, TermType::LongTerm);
    }

    #[test]
    fn three_year_horizon_is_medium_term() {
        let policy = TermPolicy::default();
        let term = policy.classify(date(2024, 1, 1), date(2027, 1, 1)).unwrap();
        assert_eq!(term, TermType::MediumTerm);
    }

    #[test]
    fn target_not_after_start_is_rejected() {
        let policy = TermPolicy::default();
        let err = policy
            .classify(date(2024, 1, 1), date(2024, 1, 1))
            .unwrap_err();
        assert_eq!(
            err,
            crate::errors::Error::Calculation(CalculationError::InvalidRange)
        );
    }

    #[test]
    fn classification_is_monotonic_in_the_horizon() {
        let policy = TermPolicy::default();
        let start = date(2024, 1, 1);
        let mut previous = TermType::ShortTerm;
        for months in 1..200u32 {
            let target = start
                .checked_add_months(chrono::Months::new(months))
                .unwrap();
            let term = policy.classify(start, target).unwrap();
            let rank = |t: TermType| TermType::ALL.iter().position(|x| *x == t).unwrap();
            assert!(
                rank(term) >= rank(previous),
                "horizon of {} months moved from {:?} back to {:?}",
                months,
                previous,
                term
            );
            previous = term;
        }
    }
}
