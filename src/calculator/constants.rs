use crate::models::{Gender, Goal};

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor
// ─────────────────────────────────────────────────────────────────────────────

/// kcal per kg of body weight.
pub const BMR_WEIGHT_FACTOR: f64 = 10.0;

/// kcal per cm of height.
pub const BMR_HEIGHT_FACTOR: f64 = 6.25;

/// kcal subtracted per year of age.
pub const BMR_AGE_FACTOR: f64 = 5.0;

/// Sex constant added for men.
pub const BMR_MALE_OFFSET: f64 = 5.0;

/// Sex constant added for women.
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Goal adjustments
// ─────────────────────────────────────────────────────────────────────────────

/// Daily deficit when losing weight.
pub const LOSE_WEIGHT_DEFICIT: f64 = 500.0;

/// Daily surplus when gaining muscle.
pub const GAIN_MUSCLE_SURPLUS: f64 = 300.0;

// ─────────────────────────────────────────────────────────────────────────────
// Macronutrient split (fractions of daily calories)
// ─────────────────────────────────────────────────────────────────────────────

pub const PROTEIN_SHARE: f64 = 0.30;
pub const CARBS_SHARE: f64 = 0.50;
pub const FAT_SHARE: f64 = 0.20;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Decimal places kept on macro grams.
pub const MACRO_DECIMALS: u32 = 1;

// ─────────────────────────────────────────────────────────────────────────────
// Hydration
// ─────────────────────────────────────────────────────────────────────────────

/// Liters of water per kg of body weight.
pub const WATER_LITERS_PER_KG: f64 = 0.033;

/// Extra liters for the two most active tiers.
pub const WATER_ACTIVITY_BONUS: f64 = 0.5;

/// Decimal places kept on the water target.
pub const WATER_DECIMALS: u32 = 2;

/// Sex constant of the BMR formula.
pub fn bmr_sex_offset(gender: Gender) -> f64 {
    match gender {
        Gender::Male => BMR_MALE_OFFSET,
        Gender::Female => BMR_FEMALE_OFFSET,
    }
}

/// Calories added to TDEE for a goal.
pub fn goal_adjustment(goal: Goal) -> f64 {
    match goal {
        Goal::LoseWeight => -LOSE_WEIGHT_DEFICIT,
        Goal::MaintainWeight => 0.0,
        Goal::GainMuscle => GAIN_MUSCLE_SURPLUS,
    }
}
