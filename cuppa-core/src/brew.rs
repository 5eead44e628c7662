use serde::Serialize;

use crate::{CupAmounts, CupSpec, InvalidInput, Strength};

/// Maximum number of cups in a single brew request.
pub const MAX_CUPS: usize = 5;

/// Fraction of poured water that makes it through the grounds and into
/// the cup. The rest stays behind in the filter.
pub const GROUNDS_RETENTION: f64 = 0.9;

/// An ordered list of cups plus a strength setting, validated and ready
/// to compute.
///
/// # Examples
///
/// ```
/// use cuppa_core::{BrewRequest, CupSpec, Strength};
///
/// let request = BrewRequest::new(
///     vec![
///         CupSpec::new(300.0, 0.25)?,
///         CupSpec::new(150.0, 0.0)?,
///     ],
///     Strength::default(),
/// )?;
///
/// let plan = request.compute();
/// assert_eq!(plan.cups.len(), 2);
/// assert!((plan.total.water_ml() - 375.0).abs() < 1e-9);
/// assert!((plan.total.coffee_g() - 22.5).abs() < 1e-9);
/// # Ok::<(), cuppa_core::InvalidInput>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BrewRequest {
    cups: Vec<CupSpec>,
    strength: Strength,
}

/// The result of one computation: amounts per cup, in request order,
/// plus their elementwise total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrewPlan {
    /// Per-cup amounts, in the order the cups were requested.
    pub cups: Vec<CupAmounts>,
    /// Elementwise total over all cups.
    pub total: CupAmounts,
}

impl BrewRequest {
    /// Creates a request from cups and a strength setting.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::NoCups`] for an empty list and
    /// [`InvalidInput::TooManyCups`] when the list exceeds [`MAX_CUPS`].
    pub fn new(cups: Vec<CupSpec>, strength: Strength) -> Result<Self, InvalidInput> {
        if cups.is_empty() {
            return Err(InvalidInput::NoCups);
        }
        if cups.len() > MAX_CUPS {
            return Err(InvalidInput::TooManyCups(cups.len()));
        }
        Ok(Self { cups, strength })
    }

    /// The requested cups, in order.
    #[must_use]
    pub fn cups(&self) -> &[CupSpec] {
        &self.cups
    }

    /// The strength setting.
    #[must_use]
    pub fn strength(&self) -> Strength {
        self.strength
    }

    /// Computes the amounts for every cup and their total.
    ///
    /// Pure and deterministic: the same request always produces the same
    /// plan, and nothing outside the returned value is touched. Totals
    /// are accumulated at full precision; rounding is left to display.
    #[must_use]
    pub fn compute(&self) -> BrewPlan {
        let cups: Vec<CupAmounts> = self
            .cups
            .iter()
            .map(|cup| cup.amounts(self.strength))
            .collect();
        let total = cups.iter().copied().sum();

        BrewPlan { cups, total }
    }
}
