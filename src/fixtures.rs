//! Synthetic price histories for tests, benches and demos.
//!
//! Nothing in the library itself reads from this module, and it is hidden
//! from the public docs.

use rand::Rng;

use crate::core::PricePoint;

pub const HOUR_MS: i64 = 3_600_000;
/// One week of hourly samples.
pub const DEFAULT_SERIES_LEN: usize = 168;
/// Largest relative move between two consecutive samples.
pub const MAX_STEP_RATIO: f64 = 0.05;

/// Generates an hourly random walk that ends at `last_price` at `now_ms`.
///
/// The walk is built backwards from the most recent sample, each step moving
/// by less than [`MAX_STEP_RATIO`] of the previous price. Output is ordered by
/// time ascending.
pub fn random_walk_series<R: Rng + ?Sized>(
    rng: &mut R,
    last_price: f64,
    len: usize,
    now_ms: i64,
) -> Vec<PricePoint> {
    let mut price = last_price;
    let mut points: Vec<PricePoint> = (0..len)
        .map(|index| {
            if index > 0 {
                let step = rng.gen_range(-MAX_STEP_RATIO..MAX_STEP_RATIO);
                price += price * step;
            }
            PricePoint::new(now_ms - index as i64 * HOUR_MS, price)
        })
        .collect();
    points.reverse();
    points
}
