use crate::api::RecommendationResponse;
use crate::error::AppError;
use crate::models::{
    ActivityLevel, BmiReport, Gender, Goal, UserProfile, VisualizationData,
};
use crate::view::Panel;

/// A single edit to the profile form.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Age(Option<u32>),
    Gender(Gender),
    Weight(Option<f64>),
    Height(Option<f64>),
    ActivityLevel(ActivityLevel),
    Goal(Goal),
    Vegetarian(bool),
    Vegan(bool),
    LowCarb(bool),
    LowFat(bool),
    HighProtein(bool),
    Allergies(String),
}

/// Everything that can happen to the view: user commands plus the response
/// events the driver feeds back after executing a fetch effect.
#[derive(Debug)]
pub enum UiEvent {
    SelectPanel(Panel),
    Edit(FieldEdit),
    CalculateBmi,
    GenerateRecommendations,
    DismissError,
    BmiLoaded(Result<f64, AppError>),
    RecommendationsLoaded(Result<RecommendationResponse, AppError>),
    VisualizationLoaded(Result<VisualizationData, AppError>),
}

/// Side effects requested by a handler, executed by the driver in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ShowPanel(Panel),
    FetchBmi { weight: f64, height: f64 },
    FetchRecommendations(UserProfile),
    FetchVisualization,
    ShowLoading,
    HideLoading,
    ShowBmi(BmiReport),
    RenderRecommendations,
    RenderCharts,
    ShowError(String),
    CloseError,
}
