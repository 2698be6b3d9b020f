//! Instrument reference data.
//!
//! The catalog backs instrument pickers and supplies default expected
//! returns; the per-term default asset mixes seed a fresh planner. Both are
//! assumptions the user can edit, not market data.

use lazy_static::lazy_static;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::allocation::allocation_model::{AssetClass, AssetSplit, Instrument};
use crate::goals::goals_model::TermType;

/// Catalog record for a known instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentInfo {
    pub instrument: Instrument,
    pub asset_class: AssetClass,
    /// Default annual return assumption, as a percentage.
    pub default_return_percentage: Decimal,
}

impl InstrumentInfo {
    fn new(instrument: Instrument, asset_class: AssetClass, rate: Decimal) -> Self {
        InstrumentInfo {
            instrument,
            asset_class,
            default_return_percentage: rate,
        }
    }
}

lazy_static! {
    /// Known instruments, in picker display order.
    pub static ref INSTRUMENT_CATALOG: Vec<InstrumentInfo> = vec![
        InstrumentInfo::new(Instrument::Stocks, AssetClass::Equity, dec!(12)),
        InstrumentInfo::new(Instrument::MutualFunds, AssetClass::Equity, dec!(10)),
        InstrumentInfo::new(Instrument::Gold, AssetClass::Gold, dec!(8)),
        InstrumentInfo::new(Instrument::Bonds, AssetClass::Debt, dec!(7)),
        InstrumentInfo::new(Instrument::FixedDeposit, AssetClass::Debt, dec!(6)),
        InstrumentInfo::new(Instrument::RealEstate, AssetClass::RealEstate, dec!(9)),
        InstrumentInfo::new(Instrument::Cash, AssetClass::Cash, dec!(4)),
    ];
}

/// Catalog record for an instrument, if it is a known one.
pub fn catalog_info(instrument: &Instrument) -> Option<&'static InstrumentInfo> {
    INSTRUMENT_CATALOG
        .iter()
        .find(|info| &info.instrument == instrument)
}

/// Default asset-class mix for a term bucket. Shorter horizons lean on debt
/// and cash, longer ones on equity. Each mix sums to 100.
pub fn default_asset_mix(term_type: TermType) -> Vec<AssetSplit> {
    let split = |asset_class, percentage| AssetSplit {
        asset_class,
        percentage,
    };
    match term_type {
        TermType::ShortTerm => vec![
            split(AssetClass::Debt, dec!(60)),
            split(AssetClass::Cash, dec!(30)),
            split(AssetClass::Gold, dec!(10)),
        ],
        TermType::MediumTerm => vec![
            split(AssetClass::Equity, dec!(40)),
            split(AssetClass::Debt, dec!(40)),
            split(AssetClass::Gold, dec!(10)),
            split(AssetClass::Cash, dec!(10)),
        ],
        TermType::LongTerm => vec![
            split(AssetClass::Equity, dec!(70)),
            split(AssetClass::Debt, dec!(20)),
            split(AssetClass::Gold, dec!(10)),
        ],
    }
}
