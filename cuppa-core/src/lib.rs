//! Core calculations for filter coffee brewing.
//!
//! Given up to five cups, each described by a total volume and the fraction
//! of that volume that is milk, plus a strength setting in grams of beans
//! per 100 ml of brew water, this crate computes the water, milk, and
//! coffee amounts for each cup and in total.
//!
//! All inputs are validated when the domain types are constructed, so a
//! [`BrewRequest`] can always be computed without further failure modes.
//!
//! # Example
//!
//! ```
//! use cuppa_core::{BrewRequest, CupSpec, Strength};
//!
//! let request = BrewRequest::new(
//!     vec![CupSpec::new(250.0, 0.2)?],
//!     Strength::default(),
//! )?;
//!
//! let plan = request.compute();
//! assert!((plan.total.milk_ml() - 50.0).abs() < 1e-9);
//! assert!((plan.total.water_ml() - 200.0).abs() < 1e-9);
//! assert!((plan.total.coffee_g() - 12.0).abs() < 1e-9);
//! # Ok::<(), cuppa_core::InvalidInput>(())
//! ```

mod amounts;
mod brew;
mod cup;
mod error;
mod ratio;
mod strength;

pub use amounts::CupAmounts;
pub use brew::{BrewPlan, BrewRequest, GROUNDS_RETENTION, MAX_CUPS};
pub use cup::CupSpec;
pub use error::InvalidInput;
pub use ratio::MilkRatio;
pub use strength::Strength;
