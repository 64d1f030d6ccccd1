use tracing::debug;

use crate::calculator::constants::*;
use crate::error::{FitError, Result};
use crate::models::{ActivityLevel, Gender, Goal, MetabolicResult, UserProfile};

/// Macronutrient targets in grams.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Macros {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl Macros {
    /// Calories the rounded grams add back up to.
    pub fn total_calories(&self) -> f64 {
        self.protein_g * KCAL_PER_G_PROTEIN
            + self.carbs_g * KCAL_PER_G_CARBS
            + self.fat_g * KCAL_PER_G_FAT
    }
}

/// Round a float to n decimal places.
///
/// Goes through the precision formatter, which rounds the exact binary value
/// with ties to even. Scaling by 10^n first would round twice.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    format!("{:.*}", decimals as usize, value)
        .parse()
        .unwrap_or(value)
}

/// Body-mass index: weight(kg) / height(m)².
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Basal metabolic rate, Mifflin-St Jeor.
///
/// `10w + 6.25h - 5a + s` with `s = +5` for men and `-161` for women.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    BMR_WEIGHT_FACTOR * weight_kg + BMR_HEIGHT_FACTOR * height_cm - BMR_AGE_FACTOR * age as f64
        + bmr_sex_offset(gender)
}

/// Total daily energy expenditure.
pub fn calculate_tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}

/// Calorie target for a goal.
///
/// Not clamped: extreme profiles can produce a non-physical (even negative) target.
pub fn calculate_daily_calories(tdee: f64, goal: Goal) -> f64 {
    tdee + goal_adjustment(goal)
}

/// 30/50/20 protein/carbs/fat split of the calorie target.
pub fn calculate_macros(daily_calories: f64) -> Macros {
    Macros {
        protein_g: round_to(daily_calories * PROTEIN_SHARE / KCAL_PER_G_PROTEIN, MACRO_DECIMALS),
        carbs_g: round_to(daily_calories * CARBS_SHARE / KCAL_PER_G_CARBS, MACRO_DECIMALS),
        fat_g: round_to(daily_calories * FAT_SHARE / KCAL_PER_G_FAT, MACRO_DECIMALS),
    }
}

/// Daily water target in liters.
pub fn calculate_water_intake(weight_kg: f64, activity: ActivityLevel) -> f64 {
    let bonus = if activity.is_high_intensity() {
        WATER_ACTIVITY_BONUS
    } else {
        0.0
    };
    round_to(weight_kg * WATER_LITERS_PER_KG + bonus, WATER_DECIMALS)
}

/// Run every formula for a profile.
///
/// Fails only when the height is not strictly positive.
pub fn compute(profile: &UserProfile) -> Result<MetabolicResult> {
    // Also rejects NaN.
    if !(profile.height_cm > 0.0) {
        return Err(FitError::InvalidHeight(profile.height_cm));
    }

    let bmi = calculate_bmi(profile.weight_kg, profile.height_cm);
    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
    );
    let tdee = calculate_tdee(bmr, profile.activity_level);
    let daily_calories = calculate_daily_calories(tdee, profile.goal);
    let macros = calculate_macros(daily_calories);
    let water_liters = calculate_water_intake(profile.weight_kg, profile.activity_level);

    debug!(bmi, bmr, tdee, daily_calories, water_liters, "computed metabolic profile");

    Ok(MetabolicResult {
        bmi,
        bmr,
        tdee,
        daily_calories,
        protein_g: macros.protein_g,
        carbs_g: macros.carbs_g,
        fat_g: macros.fat_g,
        water_liters,
    })
}
