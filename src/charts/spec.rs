use crate::models::{LabeledSeries, NutrientComparison};

// Role-keyed palette. Each dataset keeps a stable, distinguishable color.
const PROTEIN_GREEN: &str = "#4CAF50";
const CARB_ORANGE: &str = "#FF9800";
const FAT_BLUE: &str = "#2196F3";
const CALORIE_GREEN: &str = "#81C784";
const TARGET_GREEN: &str = "#81C784";
const ACTUAL_ORANGE: &str = "#FF9800";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Pie,
    Bar,
    GroupedBar,
}

/// One dataset within a chart. `colors` holds a single entry for uniform
/// series (bars) and one entry per slice for proportion charts, mirroring
/// how the charting surface consumes them.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub values: Vec<f64>,
    pub colors: Vec<&'static str>,
}

impl Series {
    pub fn solid(name: &'static str, values: Vec<f64>, color: &'static str) -> Self {
        Self {
            name,
            values,
            colors: vec![color],
        }
    }

    pub fn color_at(&self, index: usize) -> &'static str {
        self.colors[index % self.colors.len()]
    }

    /// Each value's share of the series total, as whole percentages.
    pub fn shares(&self) -> Vec<f64> {
        let total: f64 = self.values.iter().sum();
        if total == 0.0 {
            return vec![0.0; self.values.len()];
        }
        self.values
            .iter()
            .map(|v| (v / total * 100.0).round())
            .collect()
    }
}

/// A declarative chart description, ready for any renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: &'static str,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    pub axis_label: Option<&'static str>,
}

/// Proportion chart over the three macro categories.
pub fn build_macro_breakdown(macros: &LabeledSeries) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Pie,
        title: "Macronutrient Breakdown",
        labels: macros.labels.clone(),
        series: vec![Series {
            name: "Calories",
            values: macros.values.clone(),
            colors: vec![PROTEIN_GREEN, CARB_ORANGE, FAT_BLUE],
        }],
        axis_label: None,
    }
}

/// Bar chart of per-meal calorie totals. Slot labels arrive lowercase and
/// are capitalized for display.
pub fn build_meal_calories(meal_calories: &LabeledSeries) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        title: "Calories per Meal",
        labels: meal_calories.labels.iter().map(|l| capitalize(l)).collect(),
        series: vec![Series::solid(
            "Calories",
            meal_calories.values.clone(),
            CALORIE_GREEN,
        )],
        axis_label: Some("Calories (kcal)"),
    }
}

/// Grouped bars comparing recommended vs. actual amounts per nutrient.
pub fn build_nutrient_comparison(comparison: &NutrientComparison) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::GroupedBar,
        title: "Recommended vs. Actual Nutrients",
        labels: comparison.nutrients.clone(),
        series: vec![
            Series::solid("Recommended", comparison.recommended.clone(), TARGET_GREEN),
            Series::solid(
                "Actual in Meal Plan",
                comparison.actual.clone(),
                ACTUAL_ORANGE,
            ),
        ],
        axis_label: Some("Amount (g)"),
    }
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_macros() -> LabeledSeries {
        LabeledSeries {
            labels: vec!["Protein".to_string(), "Carbs".to_string(), "Fat".to_string()],
            values: vec![500.0, 1000.0, 500.0],
        }
    }

    #[test]
    fn test_macro_breakdown_slice_colors_are_distinct() {
        let spec = build_macro_breakdown(&sample_macros());
        assert_eq!(spec.kind, ChartKind::Pie);
        let series = &spec.series[0];
        assert_eq!(series.colors.len(), 3);
        assert_ne!(series.color_at(0), series.color_at(1));
        assert_ne!(series.color_at(1), series.color_at(2));
    }

    #[test]
    fn test_macro_shares_round_to_whole_percent() {
        let spec = build_macro_breakdown(&sample_macros());
        assert_eq!(spec.series[0].shares(), vec![25.0, 50.0, 25.0]);
    }

    #[test]
    fn test_shares_of_empty_total() {
        let series = Series::solid("x", vec![0.0, 0.0], "#000000");
        assert_eq!(series.shares(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_meal_calorie_labels_capitalized() {
        let spec = build_meal_calories(&LabeledSeries {
            labels: vec!["breakfast".to_string(), "snacks".to_string()],
            values: vec![400.0, 150.0],
        });
        assert_eq!(spec.labels, vec!["Breakfast", "Snacks"]);
        assert_eq!(spec.axis_label, Some("Calories (kcal)"));
    }

    #[test]
    fn test_nutrient_comparison_has_two_series() {
        let spec = build_nutrient_comparison(&NutrientComparison {
            nutrients: vec!["Protein (g)".to_string()],
            recommended: vec![140.0],
            actual: vec![120.0],
        });
        assert_eq!(spec.kind, ChartKind::GroupedBar);
        assert_eq!(spec.series.len(), 2);
        assert_ne!(spec.series[0].color_at(0), spec.series[1].color_at(0));
    }
}
