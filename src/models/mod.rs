mod bmi;
mod meal;
mod profile;
mod viz;

pub use bmi::{BmiCategory, BmiReport};
pub use meal::{FoodItem, MealPlan, MealSlot, NutritionSummary};
pub use profile::{ActivityLevel, Gender, Goal, ProfileForm, UserProfile};
pub use viz::{LabeledSeries, NutrientComparison, VisualizationData};
