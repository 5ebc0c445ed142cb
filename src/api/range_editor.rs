use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{
    DepthLadder, Domain, LinearScale, PricePoint, PriceRange, UserRange, estimate_price_range,
    estimate_price_range_from_prices, parse_price_input, recalculate_domain, synthesize_depth,
};
use crate::error::RangeResult;
use crate::interaction::{DragHandle, DragPhase, DragUpdate, MoveDebouncer, resolve_drag};

use super::RangeEditorConfig;

/// Preset volatility bands relative to the last price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolatilityPreset {
    /// -10% / +15%
    Tight,
    /// -20% / +50%
    Moderate,
    /// -50% / +100%
    Wide,
}

impl VolatilityPreset {
    /// Returns `(lower_factor, upper_factor)` applied to the last price.
    #[must_use]
    pub fn factors(self) -> (f64, f64) {
        match self {
            Self::Tight => (0.9, 1.15),
            Self::Moderate => (0.8, 1.5),
            Self::Wide => (0.5, 2.0),
        }
    }
}

/// Interactive price-range editing session.
///
/// Owns the display domain, the live user range and the committed bounds the
/// chart domain is derived from. Every update keeps
/// `0 <= input_min <= input_max`.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeEditor {
    config: RangeEditorConfig,
    price_range: PriceRange,
    domain: Domain,
    range: UserRange,
    committed: UserRange,
}

impl RangeEditor {
    /// Opens an editor over a price history.
    pub fn open(points: &[PricePoint], config: RangeEditorConfig) -> RangeResult<Self> {
        let price_range = estimate_price_range(points)?;
        Self::from_price_range(price_range, config)
    }

    /// Opens an editor over bare price values.
    pub fn open_from_prices(prices: &[f64], config: RangeEditorConfig) -> RangeResult<Self> {
        let price_range = estimate_price_range_from_prices(prices)?;
        Self::from_price_range(price_range, config)
    }

    pub fn from_price_range(
        price_range: PriceRange,
        config: RangeEditorConfig,
    ) -> RangeResult<Self> {
        let config = config.validate()?;
        let initial = UserRange::around(
            price_range.last,
            config.initial_lower_factor,
            config.initial_upper_factor,
        );
        // The widened domain may still be encroached by the initial range, so
        // the first commit can widen it once more before it settles.
        let domain = recalculate_domain(
            price_range.domain(),
            initial,
            price_range.last,
            config.domain_policy,
        );

        debug!(
            last = price_range.last,
            domain_min = domain.min(),
            domain_max = domain.max(),
            "open range editor"
        );

        Ok(Self {
            config,
            price_range,
            domain,
            range: initial,
            committed: initial,
        })
    }

    #[must_use]
    pub fn config(&self) -> RangeEditorConfig {
        self.config
    }

    #[must_use]
    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    #[must_use]
    pub fn last_price(&self) -> f64 {
        self.price_range.last
    }

    #[must_use]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Live bounds shown in the input boxes.
    #[must_use]
    pub fn user_range(&self) -> UserRange {
        self.range
    }

    /// Bounds last committed by a submit, text entry or preset.
    #[must_use]
    pub fn committed_range(&self) -> UserRange {
        self.committed
    }

    #[must_use]
    pub fn is_last_price_in_range(&self) -> bool {
        self.range.is_in_range(self.price_range.last)
    }

    /// Builds a debouncer for the drag-move path using the configured window.
    #[must_use]
    pub fn move_debouncer(&self) -> MoveDebouncer<DragUpdate> {
        MoveDebouncer::new(self.config.move_debounce_ms)
    }

    /// Vertical price axis for the current domain.
    pub fn price_scale(&self, height_px: f64) -> RangeResult<LinearScale> {
        LinearScale::vertical_price_axis(self.domain, height_px)
    }

    /// Sets the lower bound, clamped to `[0, input_max]`.
    pub fn update_min(&mut self, value: f64, commit: bool) -> f64 {
        let out = value.max(0.0).min(self.range.input_max);
        self.range.input_min = out;
        if commit {
            self.committed.input_min = out;
            self.widen_domain();
        }
        trace!(value, out, commit, "update range min");
        out
    }

    /// Sets the upper bound, clamped to at least `input_min`.
    pub fn update_max(&mut self, value: f64, commit: bool) -> f64 {
        let out = value.max(self.range.input_min);
        self.range.input_max = out;
        if commit {
            self.committed.input_max = out;
            self.widen_domain();
        }
        trace!(value, out, commit, "update range max");
        out
    }

    fn update_bound(&mut self, handle: DragHandle, value: f64, commit: bool) -> f64 {
        match handle {
            DragHandle::Lower => self.update_min(value, commit),
            DragHandle::Upper => self.update_max(value, commit),
        }
    }

    /// Applies a resolved drag sample and returns the clamped bound.
    pub fn apply_drag(&mut self, update: DragUpdate) -> f64 {
        self.update_bound(update.handle, update.value, update.phase.commits())
    }

    /// Resolves and applies one drag sample.
    ///
    /// Returns `None` when the pointer position maps to no price.
    pub fn drag(
        &mut self,
        handle: DragHandle,
        phase: DragPhase,
        scale: LinearScale,
        pixel: f64,
    ) -> Option<f64> {
        let Some(update) = resolve_drag(handle, phase, scale, pixel) else {
            warn!(?handle, ?phase, pixel, "ignore unmappable drag sample");
            return None;
        };
        Some(self.apply_drag(update))
    }

    pub fn drag_move(&mut self, handle: DragHandle, scale: LinearScale, pixel: f64) -> Option<f64> {
        self.drag(handle, DragPhase::Move, scale, pixel)
    }

    pub fn drag_end(&mut self, handle: DragHandle, scale: LinearScale, pixel: f64) -> Option<f64> {
        self.drag(handle, DragPhase::End, scale, pixel)
    }

    pub fn drag_submit(
        &mut self,
        handle: DragHandle,
        scale: LinearScale,
        pixel: f64,
    ) -> Option<f64> {
        self.drag(handle, DragPhase::Submit, scale, pixel)
    }

    /// Commits a typed price for one bound.
    pub fn submit_text(&mut self, handle: DragHandle, text: &str) -> RangeResult<f64> {
        let value = parse_price_input(text).inspect_err(|e| {
            warn!(?handle, error = %e, "reject typed price");
        })?;
        Ok(self.update_bound(handle, value, true))
    }

    /// Replaces both bounds with a preset band around the last price.
    pub fn apply_preset(&mut self, preset: VolatilityPreset) {
        let (lower, upper) = preset.factors();
        let range = UserRange::around(self.price_range.last, lower, upper);
        self.range = range;
        self.committed = range;
        debug!(?preset, min = range.input_min, max = range.input_max, "apply preset");
        self.widen_domain();
    }

    /// Synthetic depth ladder over the current domain.
    pub fn depth_samples<R: Rng + ?Sized>(&self, rng: &mut R) -> DepthLadder {
        synthesize_depth(self.domain, rng)
    }

    fn widen_domain(&mut self) {
        let next = recalculate_domain(
            self.domain,
            self.committed,
            self.price_range.last,
            self.config.domain_policy,
        );
        if next != self.domain {
            debug!(
                from_min = self.domain.min(),
                from_max = self.domain.max(),
                to_min = next.min(),
                to_max = next.max(),
                "widen price domain"
            );
            self.domain = next;
        }
    }
}
