//! liquidity-range: price-range logic for concentrated-liquidity selectors.
//!
//! The crate estimates a padded chart domain from a price history, widens it
//! as the user drags range bounds toward its edges, and converts drag
//! positions into committed prices. Rendering stays with the host.

pub mod api;
pub mod core;
pub mod error;
#[doc(hidden)]
pub mod fixtures;
pub mod interaction;
pub mod telemetry;

pub use api::{RangeEditor, RangeEditorConfig};
pub use error::{RangeError, RangeResult};
