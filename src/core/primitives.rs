use chrono::{DateTime, Utc};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{RangeError, RangeResult};

/// Decimal places kept for committed prices and typed price input.
pub const PRICE_DECIMALS: u32 = 4;

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> RangeResult<f64> {
    value.to_f64().ok_or_else(|| {
        RangeError::InvalidInput(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> i64 {
    time.timestamp_millis()
}

/// Rounds `value` half away from zero to `decimals` places.
///
/// Values outside the `Decimal` range fall back to float rounding, so the
/// result is always defined for finite input.
#[must_use]
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    if let Some(rounded) = Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
    {
        return rounded;
    }

    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Rounds a price to [`PRICE_DECIMALS`] places.
#[must_use]
pub fn round_price(value: f64) -> f64 {
    round_to_decimals(value, PRICE_DECIMALS)
}

/// Parses a typed price field into a rounded price.
///
/// Blank input reads as zero, matching an emptied number field.
pub fn parse_price_input(text: &str) -> RangeResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| RangeError::InvalidInput(format!("price input is not a number: {trimmed:?}")))?;
    if !value.is_finite() {
        return Err(RangeError::InvalidInput(
            "price input must be finite".to_owned(),
        ));
    }

    Ok(round_price(value))
}
