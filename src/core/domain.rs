use serde::{Deserialize, Serialize};

use crate::core::types::{Domain, UserRange};
use crate::error::{RangeError, RangeResult};

/// Tunable thresholds for widening the display domain.
///
/// The domain is replaced once `input_min` drops below
/// `min * encroach_min_factor` or `input_max` rises above
/// `max * encroach_max_factor`. The new half-width is the largest distance
/// from the last price to any bound, times `expansion_multiplier`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainPolicy {
    pub encroach_min_factor: f64,
    pub encroach_max_factor: f64,
    pub expansion_multiplier: f64,
}

impl Default for DomainPolicy {
    fn default() -> Self {
        Self {
            encroach_min_factor: 1.2,
            encroach_max_factor: 0.8,
            expansion_multiplier: 1.5,
        }
    }
}

impl DomainPolicy {
    pub fn validate(self) -> RangeResult<Self> {
        let factors = [
            self.encroach_min_factor,
            self.encroach_max_factor,
            self.expansion_multiplier,
        ];
        if factors.iter().any(|factor| !factor.is_finite() || *factor <= 0.0) {
            return Err(RangeError::InvalidInput(
                "domain policy factors must be finite and > 0".to_owned(),
            ));
        }

        Ok(self)
    }

    /// Returns whether the user bounds sit close enough to the domain edges
    /// to require a wider domain.
    #[must_use]
    pub fn is_encroaching(self, domain: Domain, range: UserRange) -> bool {
        range.input_min < domain.min() * self.encroach_min_factor
            || range.input_max > domain.max() * self.encroach_max_factor
    }
}

/// Recomputes the display domain for the current user range.
///
/// The domain only changes when the user range encroaches on its edges, and
/// the result is always ordered and non-negative. A widened bound that would
/// overflow `f64` keeps the current domain.
#[must_use]
pub fn recalculate_domain(
    domain: Domain,
    range: UserRange,
    last: f64,
    policy: DomainPolicy,
) -> Domain {
    let (mut out_min, mut out_max) = (domain.min(), domain.max());

    if policy.is_encroaching(domain, range) {
        let delta = policy.expansion_multiplier
            * (last - range.input_min)
                .max(range.input_max - last)
                .max(last - domain.min())
                .max(domain.max() - last);
        let (widened_min, widened_max) = (last - delta, last + delta);
        if widened_min.is_finite() && widened_max.is_finite() {
            out_min = widened_min;
            out_max = widened_max;
        }
    }

    Domain::clamped(out_min, out_max)
}
