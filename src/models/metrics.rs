use serde::Serialize;

/// Everything derived from a [`UserProfile`](super::UserProfile) by the calculator.
///
/// Macros are rounded to 0.1 g and water to 0.01 L; the energy figures are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetabolicResult {
    pub bmi: f64,
    pub bmr: f64,
    pub tdee: f64,
    pub daily_calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub water_liters: f64,
}

/// Reference BMI bands shown on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Height of this band's bar on the reference chart.
    pub fn reference_value(&self) -> f64 {
        match self {
            BmiCategory::Underweight => 18.5,
            BmiCategory::Normal => 24.9,
            BmiCategory::Overweight => 29.9,
            BmiCategory::Obese => 40.0,
        }
    }

    /// Classify a BMI value (WHO cut-offs at 18.5, 25 and 30).
    pub fn classify(bmi: f64) -> Self {
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
}
