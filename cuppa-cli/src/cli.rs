use clap::Parser;
use cuppa_core::Strength;

/// Default cup volume in milliliters.
pub const DEFAULT_CUP_ML: &str = "300";

/// Default milk fraction per cup.
pub const DEFAULT_MILK_RATIO: &str = "0.25";

/// Calculate water, milk, and coffee amounts for filter coffee.
///
/// Cup volumes and milk ratios are given as comma-separated lists of the
/// same length; each ratio is the fraction of that cup that is milk.
#[derive(Parser, Debug)]
#[command(name = "cuppa", version, about = "Filter coffee ratio calculator")]
pub struct Cli {
    /// Cup volumes in milliliters, comma separated (up to 5 cups).
    #[arg(
        long = "cups",
        value_name = "ML",
        value_delimiter = ',',
        default_value = DEFAULT_CUP_ML
    )]
    pub cups: Vec<f64>,

    /// Milk fraction per cup, in [0, 1], comma separated; one per cup.
    #[arg(
        long = "milk",
        value_name = "RATIO",
        value_delimiter = ',',
        default_value = DEFAULT_MILK_RATIO
    )]
    pub milk: Vec<f64>,

    /// Strength in grams of beans per 100 ml of brew water.
    #[arg(long, value_name = "GRAMS", default_value_t = Strength::DEFAULT_BEANS_PER_100_ML)]
    pub strength: f64,

    /// Output machine-readable JSON instead of the text table.
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}
