//! Quality criteria and storage constants.
//!
//! Both measurement intervals are closed: the boundary values are
//! conforming.

/// Minimum conforming weight, grams.
pub const MIN_WEIGHT: f64 = 95.0;
/// Maximum conforming weight, grams.
pub const MAX_WEIGHT: f64 = 105.0;

/// Conforming colors, lowercase.
pub const VALID_COLORS: [&str; 2] = ["azul", "verde"];

/// Minimum conforming length, centimeters.
pub const MIN_LENGTH: f64 = 10.0;
/// Maximum conforming length, centimeters.
pub const MAX_LENGTH: f64 = 20.0;

/// Parts per storage box; a box seals the moment it reaches this count.
pub const BOX_CAPACITY: usize = 10;
