use crate::charts::spec::{
    build_macro_breakdown, build_meal_calories, build_nutrient_comparison, ChartSpec,
};
use crate::models::VisualizationData;

/// The three drawing surfaces, one per visualization dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Macros,
    MealCalories,
    NutrientComparison,
}

impl Surface {
    pub const ALL: [Surface; 3] = [
        Surface::Macros,
        Surface::MealCalories,
        Surface::NutrientComparison,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Surface::Macros => "macros",
            Surface::MealCalories => "meal_calories",
            Surface::NutrientComparison => "nutrient_comparison",
        }
    }
}

/// A live chart bound to a surface. Disposal is terminal; a disposed chart
/// must never be drawn again.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    surface: Surface,
    spec: ChartSpec,
    disposed: bool,
}

impl Chart {
    fn new(surface: Surface, spec: ChartSpec) -> Self {
        Self {
            surface,
            spec,
            disposed: false,
        }
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
    }
}

/// Owns at most one live chart per surface. Replacing a surface's chart
/// disposes the previous one first, so rebuilding N times leaves exactly
/// one live chart per surface.
#[derive(Debug, Default)]
pub struct ChartBoard {
    macros: Option<Chart>,
    meal_calories: Option<Chart>,
    nutrient_comparison: Option<Chart>,
}

impl ChartBoard {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, surface: Surface) -> &mut Option<Chart> {
        match surface {
            Surface::Macros => &mut self.macros,
            Surface::MealCalories => &mut self.meal_calories,
            Surface::NutrientComparison => &mut self.nutrient_comparison,
        }
    }

    pub fn chart(&self, surface: Surface) -> Option<&Chart> {
        match surface {
            Surface::Macros => self.macros.as_ref(),
            Surface::MealCalories => self.meal_calories.as_ref(),
            Surface::NutrientComparison => self.nutrient_comparison.as_ref(),
        }
    }

    /// Dispose whatever chart is bound to the surface, install the new one,
    /// and hand the disposed chart back.
    pub fn replace(&mut self, surface: Surface, spec: ChartSpec) -> Option<Chart> {
        let slot = self.slot_mut(surface);
        let mut previous = slot.take();
        if let Some(chart) = previous.as_mut() {
            chart.dispose();
        }
        *slot = Some(Chart::new(surface, spec));
        previous
    }

    /// Rebuild all three charts from a fresh dataset. Returns the disposed
    /// predecessors (empty on the first build).
    pub fn rebuild(&mut self, data: &VisualizationData) -> Vec<Chart> {
        let specs = [
            (Surface::Macros, build_macro_breakdown(&data.macros)),
            (
                Surface::MealCalories,
                build_meal_calories(&data.meal_calories),
            ),
            (
                Surface::NutrientComparison,
                build_nutrient_comparison(&data.nutrient_comparison),
            ),
        ];

        specs
            .into_iter()
            .filter_map(|(surface, spec)| self.replace(surface, spec))
            .collect()
    }

    pub fn live_count(&self) -> usize {
        Surface::ALL
            .iter()
            .filter(|s| self.chart(**s).is_some_and(|c| !c.is_disposed()))
            .count()
    }

    pub fn charts(&self) -> impl Iterator<Item = &Chart> {
        Surface::ALL.into_iter().filter_map(|s| self.chart(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LabeledSeries, NutrientComparison};

    fn sample_data(scale: f64) -> VisualizationData {
        VisualizationData {
            macros: LabeledSeries {
                labels: vec!["Protein".to_string(), "Carbs".to_string(), "Fat".to_string()],
                values: vec![500.0 * scale, 700.0 * scale, 300.0 * scale],
            },
            meal_calories: LabeledSeries {
                labels: vec!["breakfast".to_string(), "lunch".to_string()],
                values: vec![350.0 * scale, 650.0 * scale],
            },
            nutrient_comparison: NutrientComparison {
                nutrients: vec!["Protein (g)".to_string()],
                recommended: vec![140.0 * scale],
                actual: vec![130.0 * scale],
            },
        }
    }

    #[test]
    fn test_first_rebuild_disposes_nothing() {
        let mut board = ChartBoard::new();
        let disposed = board.rebuild(&sample_data(1.0));
        assert!(disposed.is_empty());
        assert_eq!(board.live_count(), 3);
    }

    #[test]
    fn test_rebuild_is_idempotent_per_surface() {
        let mut board = ChartBoard::new();
        board.rebuild(&sample_data(1.0));
        let disposed = board.rebuild(&sample_data(2.0));

        // Exactly one live chart per surface, all from the second dataset.
        assert_eq!(board.live_count(), 3);
        let macros = board.chart(Surface::Macros).unwrap();
        assert_eq!(macros.spec().series[0].values, vec![1000.0, 1400.0, 600.0]);

        // The first dataset's charts all came back disposed.
        assert_eq!(disposed.len(), 3);
        assert!(disposed.iter().all(|c| c.is_disposed()));
        assert_eq!(disposed[0].spec().series[0].values, vec![500.0, 700.0, 300.0]);
    }

    #[test]
    fn test_replace_keeps_other_surfaces() {
        let mut board = ChartBoard::new();
        board.rebuild(&sample_data(1.0));

        let spec = build_macro_breakdown(&sample_data(3.0).macros);
        let old = board.replace(Surface::Macros, spec).unwrap();
        assert!(old.is_disposed());
        assert_eq!(old.surface(), Surface::Macros);

        assert_eq!(board.live_count(), 3);
        let untouched = board.chart(Surface::MealCalories).unwrap();
        assert_eq!(untouched.spec().series[0].values, vec![350.0, 650.0]);
    }
}
