use uom::si::{f64::Volume, volume::milliliter};

use crate::{CupAmounts, InvalidInput, MilkRatio, Strength, brew::GROUNDS_RETENTION};

/// One requested serving: a total volume and the fraction of it that is milk.
///
/// # Examples
///
/// ```
/// use cuppa_core::CupSpec;
///
/// let cup = CupSpec::new(250.0, 0.2)?;
/// assert_eq!(cup.milk_ratio().get(), 0.2);
///
/// assert!(CupSpec::new(0.0, 0.2).is_err());
/// # Ok::<(), cuppa_core::InvalidInput>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CupSpec {
    volume: Volume,
    milk_ratio: MilkRatio,
}

impl CupSpec {
    /// Creates a `CupSpec` from a volume in milliliters and a milk ratio.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::VolumeNotFinite`] or
    /// [`InvalidInput::NonPositiveVolume`] for a bad volume, and the
    /// [`MilkRatio::new`] errors for a bad ratio.
    pub fn new(volume_ml: f64, milk_ratio: f64) -> Result<Self, InvalidInput> {
        if !volume_ml.is_finite() {
            return Err(InvalidInput::VolumeNotFinite(volume_ml));
        }
        if volume_ml <= 0.0 {
            return Err(InvalidInput::NonPositiveVolume(volume_ml));
        }
        Ok(Self {
            volume: Volume::new::<milliliter>(volume_ml),
            milk_ratio: MilkRatio::new(milk_ratio)?,
        })
    }

    /// The total cup volume.
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// The fraction of the cup that is milk.
    #[must_use]
    pub fn milk_ratio(&self) -> MilkRatio {
        self.milk_ratio
    }

    /// Computes the amounts for this cup at the given strength.
    ///
    /// Strength applies to the non-milk liquid portion only, never the
    /// full cup volume.
    pub(crate) fn amounts(&self, strength: Strength) -> CupAmounts {
        let milk = self.milk_ratio.milk_of(self.volume);
        let water = self.milk_ratio.liquid_of(self.volume);

        CupAmounts {
            water,
            milk,
            coffee: strength.beans_for(water),
            brew_water: water / GROUNDS_RETENTION,
        }
    }
}
