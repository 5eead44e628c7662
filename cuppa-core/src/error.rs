use thiserror::Error;

use crate::brew::MAX_CUPS;

/// Errors produced when constructing the domain types in this crate.
///
/// Every variant names the offending field and the constraint it violated.
/// Validation happens entirely at construction time, so a computation can
/// never observe one of these and no partial result is ever produced.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum InvalidInput {
    /// A cup volume was `NaN` or infinite.
    #[error("cup volume is not finite: {0}")]
    VolumeNotFinite(f64),

    /// A cup volume was zero or negative.
    #[error("cup volume must be a positive number of milliliters, got {0}")]
    NonPositiveVolume(f64),

    /// A milk ratio was `NaN` or infinite.
    #[error("milk ratio is not finite: {0}")]
    RatioNotFinite(f64),

    /// A milk ratio was outside the valid range.
    #[error("milk ratio {0} is outside the range [0, 1]")]
    RatioOutOfRange(f64),

    /// The strength setting was `NaN` or infinite.
    #[error("strength is not finite: {0}")]
    StrengthNotFinite(f64),

    /// The strength setting was zero or negative.
    #[error("strength must be a positive number of grams per 100 ml, got {0}")]
    NonPositiveStrength(f64),

    /// A brew request contained no cups.
    #[error("a brew needs at least one cup")]
    NoCups,

    /// A brew request contained more cups than [`MAX_CUPS`].
    #[error("a brew is limited to {max} cups, got {0}", max = MAX_CUPS)]
    TooManyCups(usize),
}
