use std::fmt;

/// BMI category, derived client-side from the numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Thresholds: <18.5 underweight, <25 normal, <30 overweight, else obese.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A BMI value as returned by the backend, with its derived category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiReport {
    pub bmi: f64,
    pub category: BmiCategory,
}

impl BmiReport {
    pub fn from_value(bmi: f64) -> Self {
        Self {
            bmi,
            category: BmiCategory::from_bmi(bmi),
        }
    }

    /// Display form, e.g. `24.2 (Normal)`. The value is shown as the backend
    /// sent it (rounded to two decimals server-side).
    pub fn label(&self) -> String {
        format!("{} ({})", self.bmi, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.99), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_report_label() {
        let report = BmiReport::from_value(24.22);
        assert_eq!(report.category, BmiCategory::Normal);
        assert_eq!(report.label(), "24.22 (Normal)");
    }

    #[test]
    fn test_report_label_whole_value() {
        assert_eq!(BmiReport::from_value(31.0).label(), "31 (Obese)");
    }
}
