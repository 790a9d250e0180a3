pub mod api;
pub mod charts;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod view;

pub use error::{AppError, Result};
pub use models::{FoodItem, MealPlan};
