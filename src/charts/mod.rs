mod board;
mod spec;

pub use board::{Chart, ChartBoard, Surface};
pub use spec::{
    build_macro_breakdown, build_meal_calories, build_nutrient_comparison, ChartKind, ChartSpec,
    Series,
};
