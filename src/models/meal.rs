use serde::Deserialize;

/// A single food entry in a meal slot. Field names on the wire are the
/// backend's CSV-derived headers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "Food_items")]
    pub name: String,

    #[serde(rename = "Category")]
    pub category: String,

    #[serde(rename = "Calories")]
    pub calories: f64,

    #[serde(rename = "Protein")]
    pub protein: f64,

    #[serde(rename = "Carbohydrates")]
    pub carbohydrates: f64,

    #[serde(rename = "Fats")]
    pub fats: f64,

    #[serde(rename = "Fibre")]
    pub fibre: f64,
}

/// The four meal slots, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snacks,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snacks => "Snacks",
        }
    }

    /// Lowercase noun used in the empty-slot placeholder.
    pub fn noun(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snacks => "snack",
        }
    }
}

/// A full meal plan as received from the backend. Immutable once rendered
/// until the next recommendation request replaces it whole.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MealPlan {
    #[serde(default)]
    pub breakfast: Vec<FoodItem>,
    #[serde(default)]
    pub lunch: Vec<FoodItem>,
    #[serde(default)]
    pub dinner: Vec<FoodItem>,
    #[serde(default)]
    pub snacks: Vec<FoodItem>,
}

impl MealPlan {
    pub fn slot(&self, slot: MealSlot) -> &[FoodItem] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snacks => &self.snacks,
        }
    }
}

/// Recommended daily nutrition targets.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct NutritionSummary {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}
