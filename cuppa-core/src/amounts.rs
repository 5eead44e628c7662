use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uom::si::{
    f64::{Mass, Volume},
    mass::gram,
    volume::milliliter,
};

/// The computed amounts for one cup, or the elementwise total over a brew.
///
/// `water` is the in-cup non-milk liquid, so `water + milk` equals the
/// cup volume it was derived from. `brew_water` is how much to pour into
/// the brewer: coffee grounds retain roughly a tenth of it, so it exceeds
/// `water` and takes no part in the in-cup balance.
///
/// Serialized form uses plain milliliter/gram numbers (`water_ml`,
/// `milk_ml`, `coffee_g`, `brew_water_ml`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CupAmounts {
    /// Brewed coffee that ends up in the cup.
    #[serde(
        rename = "water_ml",
        serialize_with = "serialize_ml",
        deserialize_with = "deserialize_ml"
    )]
    pub water: Volume,

    /// Milk that ends up in the cup.
    #[serde(
        rename = "milk_ml",
        serialize_with = "serialize_ml",
        deserialize_with = "deserialize_ml"
    )]
    pub milk: Volume,

    /// Coffee beans to grind.
    #[serde(
        rename = "coffee_g",
        serialize_with = "serialize_g",
        deserialize_with = "deserialize_g"
    )]
    pub coffee: Mass,

    /// Water to pour into the brewer, including what the grounds retain.
    #[serde(
        rename = "brew_water_ml",
        serialize_with = "serialize_ml",
        deserialize_with = "deserialize_ml"
    )]
    pub brew_water: Volume,
}

impl CupAmounts {
    /// An all-zero value, the identity for [`Add`] and [`Sum`].
    #[must_use]
    pub fn zero() -> Self {
        Self {
            water: Volume::new::<milliliter>(0.0),
            milk: Volume::new::<milliliter>(0.0),
            coffee: Mass::new::<gram>(0.0),
            brew_water: Volume::new::<milliliter>(0.0),
        }
    }

    /// The in-cup water in milliliters.
    #[must_use]
    pub fn water_ml(&self) -> f64 {
        self.water.get::<milliliter>()
    }

    /// The milk in milliliters.
    #[must_use]
    pub fn milk_ml(&self) -> f64 {
        self.milk.get::<milliliter>()
    }

    /// The coffee beans in grams.
    #[must_use]
    pub fn coffee_g(&self) -> f64 {
        self.coffee.get::<gram>()
    }

    /// The water to pour into the brewer, in milliliters.
    #[must_use]
    pub fn brew_water_ml(&self) -> f64 {
        self.brew_water.get::<milliliter>()
    }
}

impl Add for CupAmounts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            water: self.water + rhs.water,
            milk: self.milk + rhs.milk,
            coffee: self.coffee + rhs.coffee,
            brew_water: self.brew_water + rhs.brew_water,
        }
    }
}

impl Sum for CupAmounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

fn serialize_ml<S>(volume: &Volume, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(volume.get::<milliliter>())
}

fn deserialize_ml<'de, D>(deserializer: D) -> Result<Volume, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(Volume::new::<milliliter>)
}

fn serialize_g<S>(mass: &Mass, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(mass.get::<gram>())
}

fn deserialize_g<'de, D>(deserializer: D) -> Result<Mass, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(Mass::new::<gram>)
}
