use serde::Deserialize;

/// A labeled value series, the shape both the macro breakdown and the
/// per-meal calorie totals arrive in.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LabeledSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Recommended vs. actual amounts, per nutrient.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NutrientComparison {
    pub nutrients: Vec<String>,
    pub recommended: Vec<f64>,
    pub actual: Vec<f64>,
}

/// The three independent datasets behind the visualization panel. Fetched
/// lazily whenever that panel becomes active.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VisualizationData {
    pub macros: LabeledSeries,
    pub meal_calories: LabeledSeries,
    pub nutrient_comparison: NutrientComparison,
}
