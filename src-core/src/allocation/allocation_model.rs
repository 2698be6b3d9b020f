use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::errors::{CalculationError, Result, ValidationError};
use crate::goals::goals_model::TermType;

/// An investment instrument. The catalog variants cover the instruments the
/// planner knows about; anything the user types that is not in the catalog
/// becomes an explicit [`Instrument::Custom`] value rather than loose text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Instrument {
    Stocks,
    MutualFunds,
    Gold,
    Bonds,
    FixedDeposit,
    RealEstate,
    Cash,
    Custom(String),
}

impl Instrument {
    pub fn as_str(&self) -> &str {
        match self {
            Instrument::Stocks => "Stocks",
            Instrument::MutualFunds => "Mutual Funds",
            Instrument::Gold => "Gold",
            Instrument::Bonds => "Bonds",
            Instrument::FixedDeposit => "Fixed Deposit",
            Instrument::RealEstate => "Real Estate",
            Instrument::Cash => "Cash",
            Instrument::Custom(name) => name.as_str(),
        }
    }

    /// A blank instrument name marks a placeholder allocation row.
    pub fn is_blank(&self) -> bool {
        matches!(self, Instrument::Custom(name) if name.trim().is_empty())
    }
}

impl From<&str> for Instrument {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.to_lowercase().as_str() {
            "stocks" => Instrument::Stocks,
            "mutual funds" => Instrument::MutualFunds,
            "gold" => Instrument::Gold,
            "bonds" => Instrument::Bonds,
            "fixed deposit" => Instrument::FixedDeposit,
            "real estate" => Instrument::RealEstate,
            "cash" => Instrument::Cash,
            _ => Instrument::Custom(trimmed.to_string()),
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Instrument {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Instrument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Instrument::from(name.as_str()))
    }
}

/// Broad asset class backing an instrument or an asset-mix row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetClass {
    Equity,
    Debt,
    Gold,
    RealEstate,
    Cash,
}

/// One instrument's share of a term bucket's yearly contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationEntry {
    pub investment_name: Instrument,
    /// Assumed annual return, as a percentage (8 means 8%).
    pub expected_return_percentage: Decimal,
    /// Share of the term's contribution routed here, 0-100.
    pub investment_percentage: Decimal,
}

impl AllocationEntry {
    /// Entry with the catalog's default expected return for the instrument,
    /// or zero for instruments the catalog does not know.
    pub fn new(investment_name: Instrument, investment_percentage: Decimal) -> Self {
        let expected_return_percentage = crate::allocation::catalog::catalog_info(&investment_name)
            .map(|info| info.default_return_percentage)
            .unwrap_or(Decimal::ZERO);
        AllocationEntry {
            investment_name,
            expected_return_percentage,
            investment_percentage,
        }
    }

    /// Placeholder rows (blank name or zero share) are form scaffolding, not
    /// real allocations. They are excluded from the 100%-sum check and from
    /// distribution.
    pub fn is_placeholder(&self) -> bool {
        self.investment_name.is_blank() || self.investment_percentage.is_zero()
    }
}

/// One asset class's share of a term bucket's contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSplit {
    pub asset_class: AssetClass,
    pub percentage: Decimal,
}

/// Per-term container holding exactly one value per [`TermType`]. Using named
/// fields instead of a map keeps "every term bucket is always present" true
/// by construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermKeyed<T> {
    pub short_term: T,
    pub medium_term: T,
    pub long_term: T,
}

impl<T> TermKeyed<T> {
    pub fn get(&self, term_type: TermType) -> &T {
        match term_type {
            TermType::ShortTerm => &self.short_term,
            TermType::MediumTerm => &self.medium_term,
            TermType::LongTerm => &self.long_term,
        }
    }

    pub fn get_mut(&mut self, term_type: TermType) -> &mut T {
        match term_type {
            TermType::ShortTerm => &mut self.short_term,
            TermType::MediumTerm => &mut self.medium_term,
            TermType::LongTerm => &mut self.long_term,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (TermType, &T)> {
        [
            (TermType::ShortTerm, &self.short_term),
            (TermType::MediumTerm, &self.medium_term),
            (TermType::LongTerm, &self.long_term),
        ]
        .into_iter()
    }
}

/// Validate an allocation submission and return the entries that survive it.
///
/// Placeholder rows are discarded. The remaining entries must each carry a
/// share in (0, 100], a non-negative expected return, and must sum to exactly
/// 100.
pub fn validate_allocation(entries: &[AllocationEntry]) -> Result<Vec<AllocationEntry>> {
    let active: Vec<AllocationEntry> = entries
        .iter()
        .filter(|entry| !entry.is_placeholder())
        .cloned()
        .collect();

    for entry in &active {
        if entry.investment_percentage < Decimal::ZERO || entry.investment_percentage > dec!(100) {
            return Err(ValidationError::InvalidInput(format!(
                "investment percentage for {} must be between 0 and 100, got {}",
                entry.investment_name, entry.investment_percentage
            ))
            .into());
        }
        if entry.expected_return_percentage < Decimal::ZERO {
            return Err(CalculationError::InvalidRate {
                rate: entry.expected_return_percentage,
            }
            .into());
        }
    }

    let total: Decimal = active.iter().map(|entry| entry.investment_percentage).sum();
    if total != dec!(100) {
        return Err(ValidationError::AllocationSum { actual: total }.into());
    }

    Ok(active)
}

/// Validate an asset-class mix submission. Same 100%-sum contract as
/// instrument allocations, without the placeholder-row handling.
pub fn validate_asset_mix(splits: &[AssetSplit]) -> Result<Vec<AssetSplit>> {
    for split in splits {
        if split.percentage < Decimal::ZERO || split.percentage > dec!(100) {
            return Err(ValidationError::InvalidInput(format!(
                "asset percentage for {:?} must be between 0 and 100, got {}",
                split.asset_class, split.percentage
            ))
            .into());
        }
    }

    let total: Decimal = splits.iter().map(|split| split.percentage).sum();
    if total != dec!(100) {
        return Err(ValidationError::AllocationSum { actual: total }.into());
    }

    Ok(splits.to_vec())
}

/// Share-weighted average of the active entries' expected returns, or `None`
/// when no entry carries a share. Used as the assumed rate for goals in the
/// entries' term bucket.
pub fn weighted_expected_return(entries: &[AllocationEntry]) -> Option<Decimal> {
    let active: Vec<&AllocationEntry> = entries
        .iter()
        .filter(|entry| !entry.is_placeholder())
        .collect();
    let total: Decimal = active.iter().map(|entry| entry.investment_percentage).sum();
    if total.is_zero() {
        return None;
    }
    let weighted: Decimal = active
        .iter()
        .map(|entry| entry.expected_return_percentage * entry.investment_percentage)
        .sum();
    Some(weighted / total)
}
