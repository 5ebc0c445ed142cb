pub mod depth;
pub mod domain;
pub mod drag;
pub mod primitives;
pub mod range_estimator;
pub mod scale;
pub mod types;

pub use depth::{
    DEPTH_SAMPLE_COUNT, DepthLadder, DepthSample, depth_axis_extent, synthesize_depth,
};
pub use domain::{DomainPolicy, recalculate_domain};
pub use drag::drag_to_value;
pub use primitives::{PRICE_DECIMALS, parse_price_input, round_price};
pub use range_estimator::{estimate_price_range, estimate_price_range_from_prices};
pub use scale::LinearScale;
pub use types::{Domain, PricePoint, PriceRange, UserRange};
