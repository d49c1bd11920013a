use crate::domain::constants::{MAX_LENGTH, MAX_WEIGHT, MIN_LENGTH, MIN_WEIGHT, VALID_COLORS};
use crate::domain::models::{Outcome, RejectReason};

/// Decide whether a candidate part conforms to the quality criteria.
///
/// Checks run in fixed order (weight, color, length) and stop at the
/// first failure, so a part failing several criteria reports only the
/// first one. That ordering is externally observable in the rejection
/// report and must not change.
///
/// Pure: no side effects, no I/O. The caller normalizes `color`
/// (trim + lowercase) before calling.
pub fn validate(weight: f64, color: &str, length: f64) -> Outcome {
    if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
        return Outcome::Rejected(RejectReason::WeightOutOfRange);
    }
    if !VALID_COLORS.contains(&color) {
        return Outcome::Rejected(RejectReason::InvalidColor);
    }
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Outcome::Rejected(RejectReason::LengthOutOfRange);
    }
    Outcome::Accepted
}
