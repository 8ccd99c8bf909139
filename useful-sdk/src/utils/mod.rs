//! Small numeric helpers.
//!
//! - `numeric`: decimal rounding

pub mod numeric;

pub use numeric::{round_to_places, RoundToPlaces};
