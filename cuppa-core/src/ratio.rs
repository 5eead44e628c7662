use std::cmp::Ordering;

use uom::si::f64::Volume;

use crate::InvalidInput;

/// The fraction of a cup that is milk, as a scalar in `[0.0, 1.0]`.
///
/// A ratio of `0.0` is black coffee and `1.0` is a cup of pure milk.
/// The value is validated at construction, so a `MilkRatio` is always
/// finite and in range. That invariant is also why this type can
/// implement [`Eq`] and [`Ord`] even though raw `f64` does not.
///
/// # Examples
///
/// ```
/// use cuppa_core::MilkRatio;
///
/// let ratio = MilkRatio::new(0.25)?;
/// assert_eq!(ratio.get(), 0.25);
/// assert_eq!(ratio.as_percent(), 25.0);
///
/// assert!(MilkRatio::new(1.5).is_err());
/// # Ok::<(), cuppa_core::InvalidInput>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MilkRatio(f64);

impl MilkRatio {
    /// Creates a `MilkRatio` if `value` is finite and within `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::RatioNotFinite`] if `value` is `NaN` or
    /// infinite, or [`InvalidInput::RatioOutOfRange`] if it lies outside
    /// `[0, 1]`.
    pub fn new(value: f64) -> Result<Self, InvalidInput> {
        if !value.is_finite() {
            return Err(InvalidInput::RatioNotFinite(value));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(InvalidInput::RatioOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Creates a `MilkRatio` from a percentage within `[0, 100]`.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`MilkRatio::new`] when the derived
    /// fraction is not finite or out of range.
    pub fn from_percent(percent: f64) -> Result<Self, InvalidInput> {
        Self::new(percent / 100.0)
    }

    /// Returns the inner `f64`.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Returns the ratio as a percentage in `[0, 100]`.
    #[must_use]
    pub fn as_percent(self) -> f64 {
        self.0 * 100.0
    }

    /// Returns the milk portion of a cup of the given total volume.
    #[must_use]
    pub fn milk_of(self, volume: Volume) -> Volume {
        volume * self.0
    }

    /// Returns the non-milk portion of a cup of the given total volume.
    ///
    /// This is the liquid that coffee is brewed with, and it always
    /// satisfies `milk_of(v) + liquid_of(v) == v`.
    #[must_use]
    pub fn liquid_of(self, volume: Volume) -> Volume {
        volume - self.milk_of(volume)
    }
}

impl TryFrom<f64> for MilkRatio {
    type Error = InvalidInput;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        MilkRatio::new(value)
    }
}

impl From<MilkRatio> for f64 {
    fn from(ratio: MilkRatio) -> Self {
        ratio.0
    }
}

// Safe because `MilkRatio::new` forbids NaN and infinity.
impl Eq for MilkRatio {}

impl Ord for MilkRatio {
    /// Compares via the underlying `f64`.
    ///
    /// The unwrap is safe because the value is always finite, so
    /// `partial_cmp` always returns `Some(_)`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap()
    }
}

impl PartialOrd for MilkRatio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::volume::milliliter;

    #[test]
    fn accepts_the_full_range() {
        assert_eq!(MilkRatio::new(0.0).unwrap().get(), 0.0);
        assert_eq!(MilkRatio::new(0.25).unwrap().get(), 0.25);
        assert_eq!(MilkRatio::new(1.0).unwrap().get(), 1.0);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            MilkRatio::new(-0.01),
            Err(InvalidInput::RatioOutOfRange(_))
        ));
        assert!(matches!(
            MilkRatio::new(1.01),
            Err(InvalidInput::RatioOutOfRange(_))
        ));
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(matches!(
            MilkRatio::new(f64::NAN),
            Err(InvalidInput::RatioNotFinite(_))
        ));
        assert!(matches!(
            MilkRatio::new(f64::INFINITY),
            Err(InvalidInput::RatioNotFinite(_))
        ));
        assert!(matches!(
            MilkRatio::new(f64::NEG_INFINITY),
            Err(InvalidInput::RatioNotFinite(_))
        ));
    }

    #[test]
    fn percent_helpers() {
        let ratio = MilkRatio::from_percent(25.0).unwrap();
        assert_eq!(ratio.get(), 0.25);
        assert_eq!(ratio.as_percent(), 25.0);
    }

    #[test]
    fn splits_a_volume_into_milk_and_liquid() {
        let ratio = MilkRatio::new(0.2).unwrap();
        let cup = Volume::new::<milliliter>(250.0);

        assert_relative_eq!(ratio.milk_of(cup).get::<milliliter>(), 50.0, epsilon = 1e-9);
        assert_relative_eq!(ratio.liquid_of(cup).get::<milliliter>(), 200.0, epsilon = 1e-9);
        assert_relative_eq!(
            (ratio.milk_of(cup) + ratio.liquid_of(cup)).get::<milliliter>(),
            250.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn ordering_is_total() {
        let low = MilkRatio::new(0.1).unwrap();
        let high = MilkRatio::new(0.9).unwrap();

        assert!(low < high);
        assert_eq!(low.max(high), high);
    }
}
