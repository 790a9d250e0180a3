use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Activity levels recognized by the recommendation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ActivityLevel {
    Sedentary,
    #[default]
    #[serde(rename = "Lightly Active")]
    LightlyActive,
    #[serde(rename = "Moderately Active")]
    ModeratelyActive,
    #[serde(rename = "Very Active")]
    VeryActive,
    #[serde(rename = "Extremely Active")]
    ExtremelyActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtremelyActive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::ExtremelyActive => "Extremely Active",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Goal {
    #[default]
    #[serde(rename = "Weight Loss")]
    WeightLoss,
    #[serde(rename = "Muscle Gain")]
    MuscleGain,
    Maintenance,
    #[serde(rename = "General Health")]
    GeneralHealth,
}

impl Goal {
    pub const ALL: [Goal; 4] = [
        Goal::WeightLoss,
        Goal::MuscleGain,
        Goal::Maintenance,
        Goal::GeneralHealth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::MuscleGain => "Muscle Gain",
            Goal::Maintenance => "Maintenance",
            Goal::GeneralHealth => "General Health",
        }
    }
}

/// A complete profile, serialized as the recommendation request payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub age: u32,
    pub gender: Gender,
    pub weight: f64,
    pub height: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub vegetarian: bool,
    pub vegan: bool,
    pub low_carb: bool,
    pub low_fat: bool,
    pub high_protein: bool,
    pub allergies: String,
}

/// The profile form as the user fills it in. Required numeric fields stay
/// `None` until entered; `validate` turns a complete form into a profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub age: Option<u32>,
    pub gender: Gender,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub vegetarian: bool,
    pub vegan: bool,
    pub low_carb: bool,
    pub low_fat: bool,
    pub high_protein: bool,
    pub allergies: String,
}

impl ProfileForm {
    /// Vegan implies vegetarian.
    pub fn set_vegan(&mut self, checked: bool) {
        self.vegan = checked;
        if checked {
            self.vegetarian = true;
        }
    }

    /// Unchecking vegetarian clears vegan. The reverse direction is handled
    /// by `set_vegan`; no other propagation applies.
    pub fn set_vegetarian(&mut self, checked: bool) {
        self.vegetarian = checked;
        if !checked {
            self.vegan = false;
        }
    }

    pub fn positive_weight(&self) -> Option<f64> {
        self.weight.filter(|w| *w > 0.0)
    }

    pub fn positive_height(&self) -> Option<f64> {
        self.height.filter(|h| *h > 0.0)
    }

    /// Validate the required fields and build the request profile.
    ///
    /// Fails on the first missing or non-positive required field, with the
    /// message shown to the user verbatim.
    pub fn validate(&self) -> std::result::Result<UserProfile, String> {
        let age = match self.age {
            Some(age) if age > 0 => age,
            _ => return Err("Please enter a valid age.".to_string()),
        };
        let weight = self
            .positive_weight()
            .ok_or_else(|| "Please enter a valid weight.".to_string())?;
        let height = self
            .positive_height()
            .ok_or_else(|| "Please enter a valid height.".to_string())?;

        Ok(UserProfile {
            age,
            gender: self.gender,
            weight,
            height,
            activity_level: self.activity_level,
            goal: self.goal,
            vegetarian: self.vegetarian,
            vegan: self.vegan,
            low_carb: self.low_carb,
            low_fat: self.low_fat,
            high_protein: self.high_protein,
            allergies: self.allergies.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ProfileForm {
        ProfileForm {
            age: Some(30),
            weight: Some(70.0),
            height: Some(170.0),
            ..ProfileForm::default()
        }
    }

    #[test]
    fn test_vegan_forces_vegetarian() {
        let mut form = ProfileForm::default();
        form.set_vegan(true);
        assert!(form.vegan);
        assert!(form.vegetarian);
    }

    #[test]
    fn test_unchecking_vegetarian_clears_vegan() {
        let mut form = ProfileForm::default();
        form.set_vegan(true);
        form.set_vegetarian(false);
        assert!(!form.vegetarian);
        assert!(!form.vegan);
    }

    #[test]
    fn test_propagation_is_directional() {
        // Unchecking vegan leaves vegetarian alone.
        let mut form = ProfileForm::default();
        form.set_vegan(true);
        form.set_vegan(false);
        assert!(form.vegetarian);
        assert!(!form.vegan);

        // Checking vegetarian does not check vegan.
        let mut form = ProfileForm::default();
        form.set_vegetarian(true);
        assert!(form.vegetarian);
        assert!(!form.vegan);
    }

    #[test]
    fn test_validate_complete_form() {
        let profile = filled_form().validate().unwrap();
        assert_eq!(profile.age, 30);
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.goal, Goal::WeightLoss);
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut form = filled_form();
        form.age = None;
        assert_eq!(form.validate().unwrap_err(), "Please enter a valid age.");

        let mut form = filled_form();
        form.weight = Some(0.0);
        assert_eq!(form.validate().unwrap_err(), "Please enter a valid weight.");

        let mut form = filled_form();
        form.height = Some(-170.0);
        assert_eq!(form.validate().unwrap_err(), "Please enter a valid height.");
    }

    #[test]
    fn test_request_wire_names() {
        let mut form = filled_form();
        form.activity_level = ActivityLevel::ModeratelyActive;
        form.goal = Goal::GeneralHealth;
        let profile = form.validate().unwrap();

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["gender"], "Male");
        assert_eq!(json["activity_level"], "Moderately Active");
        assert_eq!(json["goal"], "General Health");
        assert_eq!(json["low_carb"], false);
        assert_eq!(json["allergies"], "");
    }
}
