//! Future-value / required-investment math.
//!
//! Standard compound-growth annuity: `n` yearly contributions `C` at rate `r`
//! grow to `FV = C * ((1+r)^n - 1) / r`, with the `r = 0` limit `FV = C * n`
//! as its own branch. Rates are taken as percentages (8 means 8%). Amounts
//! are never rounded here; presentation rounds for display.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::errors::{CalculationError, Result};

/// Fallback annual return assumption when a term bucket has no usable
/// allocation entries to derive a rate from.
pub const DEFAULT_ANNUAL_RETURN_PERCENTAGE: Decimal = dec!(8);

/// Yearly contribution required to reach `target_amount` after
/// `years_remaining` contributions at the assumed rate.
pub fn required_periodic_contribution(
    target_amount: Decimal,
    years_remaining: i32,
    annual_return_percentage: Decimal,
) -> Result<Decimal> {
    if years_remaining <= 0 {
        return Err(CalculationError::InvalidHorizon {
            years: years_remaining,
        }
        .into());
    }
    if annual_return_percentage < Decimal::ZERO {
        return Err(CalculationError::InvalidRate {
            rate: annual_return_percentage,
        }
        .into());
    }

    let rate = annual_return_percentage / dec!(100);
    if rate.is_zero() {
        return Ok(target_amount / Decimal::from(years_remaining));
    }

    let growth = (Decimal::ONE + rate).powi(years_remaining as i64) - Decimal::ONE;
    Ok(target_amount * rate / growth)
}

/// Future value of `periodic_contribution` invested yearly for `years` at the
/// assumed rate. Inverse of [`required_periodic_contribution`].
pub fn future_value(
    periodic_contribution: Decimal,
    years: i32,
    annual_return_percentage: Decimal,
) -> Result<Decimal> {
    if years <= 0 {
        return Err(CalculationError::InvalidHorizon { years }.into());
    }
    if annual_return_percentage < Decimal::ZERO {
        return Err(CalculationError::InvalidRate {
            rate: annual_return_percentage,
        }
        .into());
    }

    let rate = annual_return_percentage / dec!(100);
    if rate.is_zero() {
        return Ok(periodic_contribution * Decimal::from(years));
    }

    let growth = (Decimal::ONE + rate).powi(years as i64) - Decimal::ONE;
    Ok(periodic_contribution * growth / rate)
}
