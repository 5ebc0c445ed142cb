use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::types::Domain;

/// Number of synthetic samples laid across a domain.
pub const DEPTH_SAMPLE_COUNT: usize = 16;
/// Exclusive upper bound of synthetic depth values.
pub const MAX_SYNTHETIC_DEPTH: u32 = 1000;
/// Headroom applied to the deepest sample when sizing the depth axis.
pub const DEPTH_AXIS_HEADROOM: f64 = 1.2;

/// Depth available at one price level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthSample {
    pub tick: f64,
    pub depth: u32,
}

pub type DepthLadder = SmallVec<[DepthSample; DEPTH_SAMPLE_COUNT]>;

/// Lays [`DEPTH_SAMPLE_COUNT`] evenly spaced ticks over `domain` with random depth.
///
/// This stands in for an order-book depth feed. Ticks start at `domain.min()`
/// and stop one step short of `domain.max()`.
pub fn synthesize_depth<R: Rng + ?Sized>(domain: Domain, rng: &mut R) -> DepthLadder {
    let step = domain.span() / DEPTH_SAMPLE_COUNT as f64;

    (0..DEPTH_SAMPLE_COUNT)
        .map(|index| DepthSample {
            tick: domain.min() + step * index as f64,
            depth: rng.gen_range(0..MAX_SYNTHETIC_DEPTH),
        })
        .collect()
}

/// Returns the depth-axis extent for a ladder, or `0.0` when it is empty.
#[must_use]
pub fn depth_axis_extent(samples: &[DepthSample]) -> f64 {
    samples
        .iter()
        .map(|sample| sample.depth)
        .max()
        .map_or(0.0, |depth| f64::from(depth) * DEPTH_AXIS_HEADROOM)
}
