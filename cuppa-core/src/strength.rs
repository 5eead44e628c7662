use uom::si::{
    f64::{Mass, MassDensity, Volume},
    mass_density::gram_per_cubic_centimeter,
};

use crate::InvalidInput;

/// Conversion between "per 100 ml" and the `gram_per_cubic_centimeter`
/// unit used for internal storage (100 ml is 100 cm³).
const ML_PER_SETTING: f64 = 100.0;

/// How strong to brew, in grams of coffee beans per 100 ml of brew water.
///
/// Internally the setting is a [`MassDensity`], so computing the bean mass
/// for a given brew volume is a plain dimensional multiplication.
///
/// The conventional filter coffee dose is 6 g per 100 ml, which is what
/// [`Strength::default`] returns.
///
/// # Examples
///
/// ```
/// use cuppa_core::Strength;
/// use uom::si::{f64::Volume, mass::gram, volume::milliliter};
///
/// let strength = Strength::new(6.0)?;
/// let beans = strength.beans_for(Volume::new::<milliliter>(200.0));
/// assert!((beans.get::<gram>() - 12.0).abs() < 1e-9);
/// # Ok::<(), cuppa_core::InvalidInput>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strength(MassDensity);

impl Strength {
    /// The conventional dose for filter coffee, in g per 100 ml.
    pub const DEFAULT_BEANS_PER_100_ML: f64 = 6.0;

    /// Creates a `Strength` from grams of beans per 100 ml of brew water.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::StrengthNotFinite`] if the value is `NaN`
    /// or infinite, or [`InvalidInput::NonPositiveStrength`] if it is zero
    /// or negative.
    pub fn new(beans_per_100_ml: f64) -> Result<Self, InvalidInput> {
        if !beans_per_100_ml.is_finite() {
            return Err(InvalidInput::StrengthNotFinite(beans_per_100_ml));
        }
        if beans_per_100_ml <= 0.0 {
            return Err(InvalidInput::NonPositiveStrength(beans_per_100_ml));
        }
        Ok(Self(MassDensity::new::<gram_per_cubic_centimeter>(
            beans_per_100_ml / ML_PER_SETTING,
        )))
    }

    /// Returns the setting in grams of beans per 100 ml.
    #[must_use]
    pub fn beans_per_100_ml(self) -> f64 {
        self.0.get::<gram_per_cubic_centimeter>() * ML_PER_SETTING
    }

    /// Returns the mass of beans needed to brew the given volume.
    #[must_use]
    pub fn beans_for(self, brew: Volume) -> Mass {
        brew * self.0
    }
}

impl Default for Strength {
    /// Returns the conventional 6 g per 100 ml dose.
    fn default() -> Self {
        Self(MassDensity::new::<gram_per_cubic_centimeter>(
            Self::DEFAULT_BEANS_PER_100_ML / ML_PER_SETTING,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{mass::gram, volume::milliliter};

    #[test]
    fn round_trips_the_setting() {
        let strength = Strength::new(6.5).unwrap();
        assert_relative_eq!(strength.beans_per_100_ml(), 6.5, epsilon = 1e-9);
    }

    #[test]
    fn default_is_six_grams_per_100_ml() {
        assert_relative_eq!(Strength::default().beans_per_100_ml(), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn beans_scale_linearly_with_volume() {
        let strength = Strength::new(6.0).unwrap();

        let single = strength.beans_for(Volume::new::<milliliter>(100.0));
        let double = strength.beans_for(Volume::new::<milliliter>(200.0));

        assert_relative_eq!(single.get::<gram>(), 6.0, epsilon = 1e-9);
        assert_relative_eq!(double.get::<gram>(), 12.0, epsilon = 1e-9);
    }

    #[test]
    fn rejects_non_positive_settings() {
        assert!(matches!(
            Strength::new(0.0),
            Err(InvalidInput::NonPositiveStrength(_))
        ));
        assert!(matches!(
            Strength::new(-1.0),
            Err(InvalidInput::NonPositiveStrength(_))
        ));
    }

    #[test]
    fn rejects_non_finite_settings() {
        assert!(matches!(
            Strength::new(f64::NAN),
            Err(InvalidInput::StrengthNotFinite(_))
        ));
        assert!(matches!(
            Strength::new(f64::INFINITY),
            Err(InvalidInput::StrengthNotFinite(_))
        ));
    }
}
