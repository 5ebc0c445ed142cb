use ordered_float::OrderedFloat;

use crate::core::types::{PricePoint, PriceRange};
use crate::error::{RangeError, RangeResult};

/// Minimum padding around the last price, as a fraction of it.
pub const MIN_PADDING_RATIO: f64 = 0.25;

/// Estimates the display range of a price history.
///
/// The padding around the last price is the largest of its distance to the
/// series extrema and [`MIN_PADDING_RATIO`] of the price itself, so flat
/// series still get headroom.
pub fn estimate_price_range(points: &[PricePoint]) -> RangeResult<PriceRange> {
    let prices: Vec<f64> = points.iter().map(|point| point.price).collect();
    estimate_price_range_from_prices(&prices)
}

/// Same as [`estimate_price_range`] over bare price values.
pub fn estimate_price_range_from_prices(prices: &[f64]) -> RangeResult<PriceRange> {
    let Some(&last) = prices.last() else {
        return Err(RangeError::InvalidInput(
            "price range cannot be estimated from an empty series".to_owned(),
        ));
    };

    if prices.iter().any(|price| !price.is_finite() || *price <= 0.0) {
        return Err(RangeError::InvalidInput(
            "price values must be finite and > 0".to_owned(),
        ));
    }

    let series_max = prices
        .iter()
        .copied()
        .map(OrderedFloat)
        .max()
        .map_or(last, |value| value.0);
    let series_min = prices
        .iter()
        .copied()
        .map(OrderedFloat)
        .min()
        .map_or(last, |value| value.0);

    let diff = (last - series_max)
        .abs()
        .max((last - series_min).abs())
        .max(last * MIN_PADDING_RATIO);

    Ok(PriceRange {
        min: (last - diff).max(0.0),
        max: last + diff,
        last,
    })
}
