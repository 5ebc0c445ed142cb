use serde::{Deserialize, Serialize};

use crate::core::types::Domain;
use crate::error::{RangeError, RangeResult};

/// Pixels reserved above the plotted price range on the range selector.
pub const PRICE_AXIS_TOP_PADDING_PX: f64 = 52.0;
/// Pixels reserved below the plotted price range on the range selector.
pub const PRICE_AXIS_BOTTOM_PADDING_PX: f64 = 36.0;

/// Linear mapping between a value domain and a pixel range.
///
/// Either interval may be descending; `invert` is the exact inverse of `scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> RangeResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(RangeError::InvalidInput(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() || range_start == range_end {
            return Err(RangeError::InvalidInput(
                "scale range must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    /// Builds the vertical price axis of the range selector.
    ///
    /// Higher prices map to smaller Y, with the axis inset by
    /// [`PRICE_AXIS_TOP_PADDING_PX`] and [`PRICE_AXIS_BOTTOM_PADDING_PX`].
    pub fn vertical_price_axis(domain: Domain, height_px: f64) -> RangeResult<Self> {
        if !height_px.is_finite()
            || height_px <= PRICE_AXIS_TOP_PADDING_PX + PRICE_AXIS_BOTTOM_PADDING_PX
        {
            return Err(RangeError::InvalidInput(format!(
                "price axis height must exceed {} px, got {height_px}",
                PRICE_AXIS_TOP_PADDING_PX + PRICE_AXIS_BOTTOM_PADDING_PX
            )));
        }

        Self::new(
            (domain.max(), domain.min()),
            (
                PRICE_AXIS_TOP_PADDING_PX,
                height_px - PRICE_AXIS_BOTTOM_PADDING_PX,
            ),
        )
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value to pixel space.
    #[must_use]
    pub fn scale(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a pixel coordinate back to the domain.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}
