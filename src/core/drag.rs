use crate::core::primitives::round_price;
use crate::core::scale::LinearScale;

/// Converts a drag position into a price on `scale`.
///
/// The result is floored at zero and rounded to four decimals. A non-finite
/// pixel or inversion yields `None` so callers can drop the sample.
#[must_use]
pub fn drag_to_value(scale: LinearScale, pixel: f64) -> Option<f64> {
    let value = scale.invert(pixel);
    if !value.is_finite() {
        return None;
    }

    Some(round_price(value.max(0.0)))
}
