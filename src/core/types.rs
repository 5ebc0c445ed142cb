use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_millis, decimal_to_f64};
use crate::error::{RangeError, RangeResult};

/// One sample of a price history, timestamped in unix milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub time: i64,
    pub price: f64,
}

impl PricePoint {
    #[must_use]
    pub fn new(time: i64, price: f64) -> Self {
        Self { time, price }
    }

    pub fn from_decimal_time(time: DateTime<Utc>, price: Decimal) -> RangeResult<Self> {
        let price = decimal_to_f64(price, "price")?;
        if !price.is_finite() || price <= 0.0 {
            return Err(RangeError::InvalidInput(
                "price must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            time: datetime_to_unix_millis(time),
            price,
        })
    }
}

/// Padded display range estimated from a price history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    pub last: f64,
}

impl PriceRange {
    #[must_use]
    pub fn domain(self) -> Domain {
        Domain {
            min: self.min,
            max: self.max,
        }
    }
}

/// Price interval currently displayed by a chart axis.
///
/// Always ordered and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DomainRepr")]
pub struct Domain {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct DomainRepr {
    min: f64,
    max: f64,
}

impl TryFrom<DomainRepr> for Domain {
    type Error = RangeError;

    fn try_from(repr: DomainRepr) -> RangeResult<Self> {
        Self::new(repr.min, repr.max)
    }
}

impl Domain {
    pub fn new(min: f64, max: f64) -> RangeResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(RangeError::InvalidInput(
                "domain bounds must be finite".to_owned(),
            ));
        }
        if min < 0.0 || min > max {
            return Err(RangeError::InvalidInput(format!(
                "domain must satisfy 0 <= min <= max, got [{min}, {max}]"
            )));
        }

        Ok(Self { min, max })
    }

    /// Builds an ordered, non-negative domain from two arbitrary bounds.
    #[must_use]
    pub(crate) fn clamped(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b).max(0.0),
            max: a.max(b),
        }
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

/// User-selected liquidity bounds drawn on top of a [`Domain`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserRange {
    pub input_min: f64,
    pub input_max: f64,
}

impl UserRange {
    #[must_use]
    pub fn new(input_min: f64, input_max: f64) -> Self {
        Self {
            input_min,
            input_max,
        }
    }

    /// Range expressed as multiples of a reference price.
    #[must_use]
    pub fn around(last: f64, lower_factor: f64, upper_factor: f64) -> Self {
        Self {
            input_min: last * lower_factor,
            input_max: last * upper_factor,
        }
    }

    /// Returns whether `price` is inside the selected bounds.
    #[must_use]
    pub fn is_in_range(self, price: f64) -> bool {
        price >= self.input_min && price <= self.input_max
    }
}
