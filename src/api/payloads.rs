use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{MealPlan, NutritionSummary};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BmiRequest {
    pub weight: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BmiResponse {
    pub bmi: f64,
}

/// Successful recommendation payload. The backend also sends `success` and
/// `nutritional_totals`; both are outside the contract and ignored here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendationResponse {
    pub nutrition_req: NutritionSummary,
    pub meal_plan: MealPlan,
}

/// Every endpoint answers with either its success shape or an `{error}`
/// body. The error arm is tried first; success shapes have no `error`
/// field, so the two never overlap.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiReply<T> {
    Err { error: String },
    Ok(T),
}

impl<T> ApiReply<T> {
    pub fn into_result(self) -> Result<T> {
        match self {
            ApiReply::Ok(value) => Ok(value),
            ApiReply::Err { error } => Err(AppError::Api(error)),
        }
    }
}
