use dialoguer::{Confirm, Input, Select};

use crate::error::{AppError, Result};
use crate::models::{ActivityLevel, Gender, Goal, ProfileForm};
use crate::view::{FieldEdit, Panel};

/// Actions available from the dashboard menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    EditProfile,
    CalculateBmi,
    GenerateRecommendations,
    ShowPanel(Panel),
    Quit,
}

pub fn main_menu() -> Result<MenuAction> {
    let items = [
        "Edit profile",
        "Calculate BMI",
        "Generate recommendations",
        "View recommendations",
        "View visualization",
        "Quit",
    ];

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => MenuAction::EditProfile,
        1 => MenuAction::CalculateBmi,
        2 => MenuAction::GenerateRecommendations,
        3 => MenuAction::ShowPanel(Panel::Recommendations),
        4 => MenuAction::ShowPanel(Panel::Visualization),
        _ => MenuAction::Quit,
    })
}

/// Walk the full profile form. Every answer becomes a field edit so the
/// form rules (vegan implies vegetarian) apply in one place.
pub fn collect_profile_edits(current: &ProfileForm) -> Result<Vec<FieldEdit>> {
    let mut edits = Vec::new();

    edits.push(FieldEdit::Age(prompt_optional_u32("Age", current.age)?));
    edits.push(FieldEdit::Gender(prompt_gender(current.gender)?));
    edits.push(FieldEdit::Weight(prompt_optional_f64(
        "Weight (kg)",
        current.weight,
    )?));
    edits.push(FieldEdit::Height(prompt_optional_f64(
        "Height (cm)",
        current.height,
    )?));
    edits.push(FieldEdit::ActivityLevel(prompt_activity_level(
        current.activity_level,
    )?));
    edits.push(FieldEdit::Goal(prompt_goal(current.goal)?));

    edits.push(FieldEdit::Vegetarian(prompt_flag(
        "Vegetarian?",
        current.vegetarian,
    )?));
    edits.push(FieldEdit::Vegan(prompt_flag("Vegan?", current.vegan)?));
    edits.push(FieldEdit::LowCarb(prompt_flag("Low carb?", current.low_carb)?));
    edits.push(FieldEdit::LowFat(prompt_flag("Low fat?", current.low_fat)?));
    edits.push(FieldEdit::HighProtein(prompt_flag(
        "High protein?",
        current.high_protein,
    )?));

    let allergies: String = Input::new()
        .with_prompt("Allergies (comma-separated, empty for none)")
        .allow_empty(true)
        .default(current.allergies.clone())
        .interact_text()?;
    edits.push(FieldEdit::Allergies(allergies.trim().to_string()));

    Ok(edits)
}

/// Block until the user dismisses the error surface.
pub fn acknowledge_error() -> Result<()> {
    let _: String = Input::new()
        .with_prompt("Press Enter to dismiss")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}

fn prompt_optional_u32(prompt: &str, current: Option<u32>) -> Result<Option<u32>> {
    let default = current.map(|v| v.to_string()).unwrap_or_default();
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .default(default)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    input
        .parse()
        .map(Some)
        .map_err(|_| AppError::InvalidInput(format!("{prompt}: not a whole number")))
}

fn prompt_optional_f64(prompt: &str, current: Option<f64>) -> Result<Option<f64>> {
    let default = current.map(|v| v.to_string()).unwrap_or_default();
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .default(default)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    input
        .parse()
        .map(Some)
        .map_err(|_| AppError::InvalidInput(format!("{prompt}: not a number")))
}

fn prompt_flag(prompt: &str, current: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(current)
        .interact()?)
}

fn prompt_gender(current: Gender) -> Result<Gender> {
    let labels: Vec<&str> = Gender::ALL.iter().map(|g| g.as_str()).collect();
    let default = Gender::ALL.iter().position(|g| *g == current).unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Gender")
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(Gender::ALL[selection])
}

fn prompt_activity_level(current: ActivityLevel) -> Result<ActivityLevel> {
    let labels: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.as_str()).collect();
    let default = ActivityLevel::ALL
        .iter()
        .position(|a| *a == current)
        .unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(ActivityLevel::ALL[selection])
}

fn prompt_goal(current: Goal) -> Result<Goal> {
    let labels: Vec<&str> = Goal::ALL.iter().map(|g| g.as_str()).collect();
    let default = Goal::ALL.iter().position(|g| *g == current).unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Goal")
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(Goal::ALL[selection])
}
