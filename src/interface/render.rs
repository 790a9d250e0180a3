use crate::api::RecommendationResponse;
use crate::charts::{Chart, ChartBoard, ChartKind, ChartSpec};
use crate::models::{BmiReport, FoodItem, MealPlan, MealSlot, NutritionSummary, ProfileForm};
use crate::view::Panel;

/// At most this many items are shown per meal slot.
const MAX_SLOT_ITEMS: usize = 3;

/// Width of the widest text bar.
const BAR_WIDTH: usize = 40;

/// Render the currently active panel from the controller's state.
pub fn display_panel(
    panel: Panel,
    form: &ProfileForm,
    bmi: Option<&BmiReport>,
    recommendation: Option<&RecommendationResponse>,
) {
    println!();
    println!("=== {} ===", panel.title());
    println!();

    match panel {
        Panel::Profile => display_profile(form, bmi),
        Panel::Recommendations => match recommendation {
            Some(response) => display_recommendations(response),
            None => println!("No recommendations yet. Generate them from your profile."),
        },
        // Chart output follows once the data fetch resolves.
        Panel::Visualization => {}
    }
}

fn display_profile(form: &ProfileForm, bmi: Option<&BmiReport>) {
    println!("Age:            {}", optional_u32(form.age));
    println!("Gender:         {}", form.gender.as_str());
    println!("Weight (kg):    {}", optional_f64(form.weight));
    println!("Height (cm):    {}", optional_f64(form.height));
    println!("Activity level: {}", form.activity_level.as_str());
    println!("Goal:           {}", form.goal.as_str());
    println!(
        "Preferences:    vegetarian:{} vegan:{} low-carb:{} low-fat:{} high-protein:{}",
        form.vegetarian, form.vegan, form.low_carb, form.low_fat, form.high_protein
    );
    let allergies = if form.allergies.is_empty() {
        "(none)"
    } else {
        form.allergies.as_str()
    };
    println!("Allergies:      {}", allergies);
    if let Some(report) = bmi {
        println!("BMI:            {}", report.label());
    }
}

pub fn display_bmi(report: &BmiReport) {
    println!("BMI: {}", report.label());
}

pub fn display_loading() {
    println!("Generating recommendations, please wait...");
}

pub fn display_error(message: &str) {
    println!();
    println!("!! {}", message);
}

pub fn display_recommendations(response: &RecommendationResponse) {
    display_nutrition_summary(&response.nutrition_req);
    display_meal_plan(&response.meal_plan);
}

fn display_nutrition_summary(req: &NutritionSummary) {
    println!("--- Daily Targets ---");
    println!("Calories:      {:.0} kcal", req.calories);
    println!("Protein:       {:.0}g", req.protein);
    println!("Carbohydrates: {:.0}g", req.carbs);
    println!("Fat:           {:.0}g", req.fat);
    println!("Fiber:         {:.0}g", req.fiber);
    println!();
}

fn display_meal_plan(plan: &MealPlan) {
    for slot in MealSlot::ALL {
        for line in slot_lines(slot, plan.slot(slot)) {
            println!("{}", line);
        }
        println!();
    }
}

/// Lines for one meal slot: a header, then up to `MAX_SLOT_ITEMS` items, or
/// a single placeholder when the slot is empty.
pub fn slot_lines(slot: MealSlot, items: &[FoodItem]) -> Vec<String> {
    let mut lines = vec![format!("{}:", slot.title())];

    if items.is_empty() {
        lines.push(format!(
            "  No {} items available based on your preferences.",
            slot.noun()
        ));
        return lines;
    }

    for item in items.iter().take(MAX_SLOT_ITEMS) {
        lines.push(format!("  - {} ({})", item.name, item.category));
        lines.push(format!(
            "      {:.0} kcal | protein {:.1}g | carbs {:.1}g | fat {:.1}g | fibre {:.1}g",
            item.calories, item.protein, item.carbohydrates, item.fats, item.fibre
        ));
    }
    lines
}

pub fn display_charts(board: &ChartBoard) {
    for chart in board.charts() {
        for line in chart_lines(chart) {
            println!("{}", line);
        }
        println!();
    }
}

/// Text rendering of one live chart. Disposed charts are never drawn.
pub fn chart_lines(chart: &Chart) -> Vec<String> {
    if chart.is_disposed() {
        return Vec::new();
    }

    let spec = chart.spec();
    let mut lines = vec![format!("--- {} ---", spec.title)];
    match spec.kind {
        ChartKind::Pie => lines.extend(pie_lines(spec)),
        ChartKind::Bar | ChartKind::GroupedBar => lines.extend(bar_lines(spec)),
    }
    if let Some(axis) = spec.axis_label {
        lines.push(format!("({})", axis));
    }
    lines
}

fn pie_lines(spec: &ChartSpec) -> Vec<String> {
    let series = &spec.series[0];
    let shares = series.shares();
    let width = label_width(&spec.labels);

    spec.labels
        .iter()
        .zip(shares.iter())
        .map(|(label, share)| format!("{:<width$} {:>3.0}%", label, share, width = width))
        .collect()
}

fn bar_lines(spec: &ChartSpec) -> Vec<String> {
    let max = spec
        .series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0_f64, f64::max);
    let width = label_width(&spec.labels);

    let mut lines = Vec::new();
    for (i, label) in spec.labels.iter().enumerate() {
        for series in &spec.series {
            let value = series.values.get(i).copied().unwrap_or(0.0);
            let name = if spec.series.len() > 1 {
                format!(" [{}]", series.name)
            } else {
                String::new()
            };
            lines.push(format!(
                "{:<width$} {} {:.0}{}",
                label,
                bar(value, max),
                value,
                name,
                width = width
            ));
        }
    }
    lines
}

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(len.min(BAR_WIDTH))
}

fn label_width(labels: &[String]) -> usize {
    labels.iter().map(|l| l.len()).max().unwrap_or(0)
}

fn optional_u32(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn optional_f64(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
