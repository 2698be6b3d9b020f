pub mod allocation_model;
pub mod catalog;

pub use allocation_model::{
    validate_allocation, validate_asset_mix, weighted_expected_return, AllocationEntry,
    AssetClass, AssetSplit, Instrument, TermKeyed,
};
pub use catalog::{catalog_info, default_asset_mix, InstrumentInfo, INSTRUMENT_CATALOG};
