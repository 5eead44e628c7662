use std::fmt::Write;

use cuppa_core::BrewPlan;

/// Renders the plan as an aligned text table: one line per cup, then a
/// total line. Values are rounded to one decimal for display only; the
/// underlying plan is accumulated at full precision.
pub fn render_text(plan: &BrewPlan) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<6}{:>12}{:>12}{:>12}{:>12}",
        "cup", "water (ml)", "milk (ml)", "coffee (g)", "pour (ml)"
    );
    for (index, cup) in plan.cups.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<6}{:>12.1}{:>12.1}{:>12.1}{:>12.1}",
            index + 1,
            cup.water_ml(),
            cup.milk_ml(),
            cup.coffee_g(),
            cup.brew_water_ml()
        );
    }
    let _ = writeln!(
        out,
        "{:<6}{:>12.1}{:>12.1}{:>12.1}{:>12.1}",
        "total",
        plan.total.water_ml(),
        plan.total.milk_ml(),
        plan.total.coffee_g(),
        plan.total.brew_water_ml()
    );

    out
}

/// Renders the plan as pretty-printed JSON.
pub fn render_json(plan: &BrewPlan) -> serde_json::Result<String> {
    serde_json::to_string_pretty(plan)
}
