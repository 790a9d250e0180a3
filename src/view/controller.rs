use crate::api::RecommendationResponse;
use crate::charts::ChartBoard;
use crate::error::AppError;
use crate::models::{BmiReport, ProfileForm, VisualizationData};
use crate::view::events::{Effect, FieldEdit, UiEvent};
use crate::view::Panel;

/// Owns all mutable view state: the active panel, the profile form, the
/// shared error surface, the loading flag, the chart board, and the last
/// results. Handlers are pure of I/O; they mutate this state and return
/// the side effects for the driver to execute in order.
pub struct ViewController {
    active: Panel,
    form: ProfileForm,
    loading: bool,
    error: Option<String>,
    bmi: Option<BmiReport>,
    recommendation: Option<RecommendationResponse>,
    charts: ChartBoard,
}

impl ViewController {
    /// The initial panel is a host decision, matching whichever panel the
    /// surrounding UI marks active at startup.
    pub fn new(initial: Panel) -> Self {
        Self {
            active: initial,
            form: ProfileForm::default(),
            loading: false,
            error: None,
            bmi: None,
            recommendation: None,
            charts: ChartBoard::new(),
        }
    }

    pub fn active_panel(&self) -> Panel {
        self.active
    }

    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn bmi(&self) -> Option<&BmiReport> {
        self.bmi.as_ref()
    }

    pub fn recommendation(&self) -> Option<&RecommendationResponse> {
        self.recommendation.as_ref()
    }

    pub fn charts(&self) -> &ChartBoard {
        &self.charts
    }

    pub fn handle(&mut self, event: UiEvent) -> Vec<Effect> {
        match event {
            UiEvent::SelectPanel(panel) => self.select_panel(panel),
            UiEvent::Edit(edit) => self.apply_edit(edit),
            UiEvent::CalculateBmi => self.calculate_bmi(),
            UiEvent::GenerateRecommendations => self.generate_recommendations(),
            UiEvent::DismissError => {
                self.error = None;
                vec![Effect::CloseError]
            }
            UiEvent::BmiLoaded(result) => self.on_bmi(result),
            UiEvent::RecommendationsLoaded(result) => self.on_recommendations(result),
            UiEvent::VisualizationLoaded(result) => self.on_visualization(result),
        }
    }

    /// Activating a panel deactivates all others. Entering the
    /// visualization panel always refetches its data; no other panel has
    /// an entry side effect.
    fn select_panel(&mut self, panel: Panel) -> Vec<Effect> {
        self.active = panel;
        let mut effects = vec![Effect::ShowPanel(panel)];
        if panel == Panel::Visualization {
            effects.push(Effect::FetchVisualization);
        }
        effects
    }

    fn apply_edit(&mut self, edit: FieldEdit) -> Vec<Effect> {
        let mut measurements_changed = false;
        match edit {
            FieldEdit::Age(age) => self.form.age = age,
            FieldEdit::Gender(gender) => self.form.gender = gender,
            FieldEdit::Weight(weight) => {
                self.form.weight = weight;
                measurements_changed = true;
            }
            FieldEdit::Height(height) => {
                self.form.height = height;
                measurements_changed = true;
            }
            FieldEdit::ActivityLevel(level) => self.form.activity_level = level,
            FieldEdit::Goal(goal) => self.form.goal = goal,
            FieldEdit::Vegetarian(checked) => self.form.set_vegetarian(checked),
            FieldEdit::Vegan(checked) => self.form.set_vegan(checked),
            FieldEdit::LowCarb(checked) => self.form.low_carb = checked,
            FieldEdit::LowFat(checked) => self.form.low_fat = checked,
            FieldEdit::HighProtein(checked) => self.form.high_protein = checked,
            FieldEdit::Allergies(text) => self.form.allergies = text,
        }

        // Editing a measurement recalculates the BMI once both are in.
        // This implicit trigger skips silently on incomplete input.
        if measurements_changed {
            if let (Some(weight), Some(height)) =
                (self.form.positive_weight(), self.form.positive_height())
            {
                return vec![Effect::FetchBmi { weight, height }];
            }
        }
        Vec::new()
    }

    /// The explicit BMI command reports a validation error instead of
    /// skipping silently.
    fn calculate_bmi(&mut self) -> Vec<Effect> {
        match (self.form.positive_weight(), self.form.positive_height()) {
            (Some(weight), Some(height)) => vec![Effect::FetchBmi { weight, height }],
            _ => self.show_error("Please enter both weight and height.".to_string()),
        }
    }

    fn generate_recommendations(&mut self) -> Vec<Effect> {
        match self.form.validate() {
            Ok(profile) => {
                self.loading = true;
                vec![Effect::ShowLoading, Effect::FetchRecommendations(profile)]
            }
            Err(message) => self.show_error(message),
        }
    }

    fn on_bmi(&mut self, result: Result<f64, AppError>) -> Vec<Effect> {
        match result {
            Ok(bmi) => {
                let report = BmiReport::from_value(bmi);
                self.bmi = Some(report);
                vec![Effect::ShowBmi(report)]
            }
            Err(err) => {
                let message = fetch_failure("calculate BMI", err);
                self.show_error(message)
            }
        }
    }

    fn on_recommendations(
        &mut self,
        result: Result<RecommendationResponse, AppError>,
    ) -> Vec<Effect> {
        self.loading = false;
        let mut effects = vec![Effect::HideLoading];
        match result {
            Ok(response) => {
                self.recommendation = Some(response);
                effects.push(Effect::RenderRecommendations);
                effects.extend(self.select_panel(Panel::Recommendations));
            }
            Err(err) => {
                let message = fetch_failure("generate recommendations", err);
                effects.extend(self.show_error(message));
            }
        }
        effects
    }

    /// A fresh dataset replaces all three charts; a failure leaves the
    /// existing charts untouched.
    fn on_visualization(&mut self, result: Result<VisualizationData, AppError>) -> Vec<Effect> {
        match result {
            Ok(data) => {
                self.charts.rebuild(&data);
                vec![Effect::RenderCharts]
            }
            Err(err) => {
                let message = fetch_failure("load visualization data", err);
                self.show_error(message)
            }
        }
    }

    /// Single shared error surface: last write wins, no queue.
    fn show_error(&mut self, message: String) -> Vec<Effect> {
        self.error = Some(message.clone());
        vec![Effect::ShowError(message)]
    }
}

/// Application-level errors surface verbatim; transport failures get a
/// prefix naming the failed operation.
fn fetch_failure(operation: &str, err: AppError) -> String {
    match err {
        AppError::Api(message) => message,
        other => format!("Failed to {operation}: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LabeledSeries, MealPlan, NutrientComparison, NutritionSummary};

    fn controller() -> ViewController {
        ViewController::new(Panel::Profile)
    }

    fn filled_controller() -> ViewController {
        let mut c = controller();
        c.handle(UiEvent::Edit(FieldEdit::Age(Some(30))));
        c.handle(UiEvent::Edit(FieldEdit::Weight(Some(70.0))));
        c.handle(UiEvent::Edit(FieldEdit::Height(Some(170.0))));
        c
    }

    fn sample_response() -> RecommendationResponse {
        RecommendationResponse {
            nutrition_req: NutritionSummary {
                calories: 2000.0,
                protein: 140.0,
                carbs: 175.0,
                fat: 67.0,
                fiber: 28.0,
            },
            meal_plan: MealPlan::default(),
        }
    }

    fn sample_viz() -> VisualizationData {
        VisualizationData {
            macros: LabeledSeries {
                labels: vec!["Protein".to_string(), "Carbs".to_string(), "Fat".to_string()],
                values: vec![560.0, 700.0, 600.0],
            },
            meal_calories: LabeledSeries::default(),
            nutrient_comparison: NutrientComparison::default(),
        }
    }

    fn has_fetch(effects: &[Effect]) -> bool {
        effects.iter().any(|e| {
            matches!(
                e,
                Effect::FetchBmi { .. }
                    | Effect::FetchRecommendations(_)
                    | Effect::FetchVisualization
            )
        })
    }

    #[test]
    fn test_selecting_visualization_always_fetches() {
        let mut c = controller();
        let effects = c.handle(UiEvent::SelectPanel(Panel::Visualization));
        assert_eq!(c.active_panel(), Panel::Visualization);
        assert!(effects.contains(&Effect::FetchVisualization));

        // Re-selecting the already active panel still refetches.
        let effects = c.handle(UiEvent::SelectPanel(Panel::Visualization));
        assert!(effects.contains(&Effect::FetchVisualization));
    }

    #[test]
    fn test_other_panels_have_no_entry_side_effect() {
        let mut c = controller();
        c.handle(UiEvent::SelectPanel(Panel::Visualization));
        c.handle(UiEvent::VisualizationLoaded(Ok(sample_viz())));

        let effects = c.handle(UiEvent::SelectPanel(Panel::Recommendations));
        assert_eq!(effects, vec![Effect::ShowPanel(Panel::Recommendations)]);
        let effects = c.handle(UiEvent::SelectPanel(Panel::Profile));
        assert!(!has_fetch(&effects));
    }

    #[test]
    fn test_generate_with_missing_age_sends_nothing() {
        let mut c = filled_controller();
        c.handle(UiEvent::Edit(FieldEdit::Age(None)));

        let effects = c.handle(UiEvent::GenerateRecommendations);
        assert!(!has_fetch(&effects));
        assert_eq!(
            effects,
            vec![Effect::ShowError("Please enter a valid age.".to_string())]
        );
        assert_eq!(c.error(), Some("Please enter a valid age."));
    }

    #[test]
    fn test_generate_with_zero_age_sends_nothing() {
        let mut c = filled_controller();
        c.handle(UiEvent::Edit(FieldEdit::Age(Some(0))));
        let effects = c.handle(UiEvent::GenerateRecommendations);
        assert!(!has_fetch(&effects));
    }

    #[test]
    fn test_generate_shows_loading_then_fetches() {
        let mut c = filled_controller();
        let effects = c.handle(UiEvent::GenerateRecommendations);
        assert!(c.is_loading());
        assert_eq!(effects[0], Effect::ShowLoading);
        assert!(matches!(effects[1], Effect::FetchRecommendations(_)));
    }

    #[test]
    fn test_successful_recommendations_switch_panel() {
        let mut c = filled_controller();
        c.handle(UiEvent::GenerateRecommendations);

        let effects = c.handle(UiEvent::RecommendationsLoaded(Ok(sample_response())));
        assert!(!c.is_loading());
        assert_eq!(c.active_panel(), Panel::Recommendations);
        assert_eq!(effects[0], Effect::HideLoading);
        assert!(effects.contains(&Effect::RenderRecommendations));
        // Forcing the recommendations panel never fetches visualization data.
        assert!(!effects.contains(&Effect::FetchVisualization));
        assert!(c.recommendation().is_some());
    }

    #[test]
    fn test_failed_recommendations_keep_panel_and_report() {
        let mut c = filled_controller();
        c.handle(UiEvent::GenerateRecommendations);

        let effects = c.handle(UiEvent::RecommendationsLoaded(Err(AppError::Api(
            "No foods match your dietary preferences and restrictions. Please adjust your preferences.".to_string(),
        ))));
        assert!(!c.is_loading());
        assert_eq!(c.active_panel(), Panel::Profile);
        assert_eq!(effects[0], Effect::HideLoading);
        assert!(matches!(effects[1], Effect::ShowError(_)));
        assert!(c.recommendation().is_none());
    }

    #[test]
    fn test_explicit_bmi_without_measurements_reports_error() {
        let mut c = controller();
        let effects = c.handle(UiEvent::CalculateBmi);
        assert_eq!(
            effects,
            vec![Effect::ShowError(
                "Please enter both weight and height.".to_string()
            )]
        );
    }

    #[test]
    fn test_measurement_edits_auto_trigger_bmi_silently() {
        let mut c = controller();
        // Only weight so far: no fetch, no error.
        let effects = c.handle(UiEvent::Edit(FieldEdit::Weight(Some(70.0))));
        assert!(effects.is_empty());

        // Height completes the pair.
        let effects = c.handle(UiEvent::Edit(FieldEdit::Height(Some(170.0))));
        assert_eq!(
            effects,
            vec![Effect::FetchBmi {
                weight: 70.0,
                height: 170.0
            }]
        );
    }

    #[test]
    fn test_bmi_response_stores_report() {
        let mut c = controller();
        let effects = c.handle(UiEvent::BmiLoaded(Ok(24.22)));
        assert_eq!(c.bmi().unwrap().label(), "24.22 (Normal)");
        assert!(matches!(effects[0], Effect::ShowBmi(_)));
    }

    #[test]
    fn test_transport_failure_is_prefixed() {
        let mut c = controller();
        c.handle(UiEvent::BmiLoaded(Err(AppError::InvalidInput(
            "connection refused".to_string(),
        ))));
        assert_eq!(
            c.error(),
            Some("Failed to calculate BMI: Invalid input: connection refused")
        );
    }

    #[test]
    fn test_api_failure_surfaces_verbatim() {
        let mut c = controller();
        c.handle(UiEvent::VisualizationLoaded(Err(AppError::Api(
            "No recommendation data available. Generate recommendations first.".to_string(),
        ))));
        assert_eq!(
            c.error(),
            Some("No recommendation data available. Generate recommendations first.")
        );
    }

    #[test]
    fn test_error_surface_last_write_wins_and_dismisses() {
        let mut c = controller();
        c.handle(UiEvent::BmiLoaded(Err(AppError::Api("first".to_string()))));
        c.handle(UiEvent::BmiLoaded(Err(AppError::Api("second".to_string()))));
        assert_eq!(c.error(), Some("second"));

        let effects = c.handle(UiEvent::DismissError);
        assert_eq!(effects, vec![Effect::CloseError]);
        assert_eq!(c.error(), None);
    }

    #[test]
    fn test_visualization_failure_leaves_charts_untouched() {
        let mut c = controller();
        c.handle(UiEvent::VisualizationLoaded(Ok(sample_viz())));
        assert_eq!(c.charts().live_count(), 3);

        c.handle(UiEvent::VisualizationLoaded(Err(AppError::Api(
            "backend down".to_string(),
        ))));
        assert_eq!(c.charts().live_count(), 3);
        let macros = c.charts().chart(crate::charts::Surface::Macros).unwrap();
        assert_eq!(macros.spec().series[0].values, vec![560.0, 700.0, 600.0]);
    }
}
