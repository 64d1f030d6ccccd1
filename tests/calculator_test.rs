use assert_float_eq::*;

use fit_guide_rs::calculator::{
    calculate_bmi, calculate_bmr, calculate_macros, calculate_water_intake, compute,
    WATER_ACTIVITY_BONUS, WATER_LITERS_PER_KG,
};
use fit_guide_rs::models::{ActivityLevel, Gender, Goal, UserProfile};
use fit_guide_rs::FitError;

fn make_profile(
    gender: Gender,
    age: u32,
    weight: f64,
    height: f64,
    activity: ActivityLevel,
    goal: Goal,
) -> UserProfile {
    UserProfile::new(gender, age, weight, height, activity, goal)
}

#[test]
fn test_end_to_end_sedentary_male_maintaining() {
    let profile = make_profile(
        Gender::Male,
        25,
        70.0,
        175.0,
        ActivityLevel::Sedentary,
        Goal::MaintainWeight,
    );
    let result = compute(&profile).unwrap();

    assert_float_absolute_eq!(result.bmi, 22.86, 0.005);
    assert_float_absolute_eq!(result.bmr, 1673.75, 1e-9);
    assert_float_absolute_eq!(result.tdee, 2008.5, 1e-9);
    assert_float_absolute_eq!(result.daily_calories, 2008.5, 1e-9);
    assert_eq!(result.protein_g, 150.6);
    assert_eq!(result.carbs_g, 251.1);
    assert_eq!(result.fat_g, 44.6);
    assert_eq!(result.water_liters, 2.31);
}

#[test]
fn test_end_to_end_super_active_female_losing() {
    let profile = make_profile(
        Gender::Female,
        30,
        60.0,
        160.0,
        ActivityLevel::SuperActive,
        Goal::LoseWeight,
    );
    let result = compute(&profile).unwrap();

    assert_float_absolute_eq!(result.bmr, 1289.0, 1e-9);
    assert_float_absolute_eq!(result.tdee, 2449.1, 1e-9);
    assert_float_absolute_eq!(result.daily_calories, result.tdee - 500.0, 1e-9);
    assert_eq!(result.water_liters, 2.48);
}

#[test]
fn test_bmi_independent_of_gender_activity_goal() {
    let expected = 82.5 / (1.81 * 1.81);
    for gender in Gender::ALL {
        for activity in ActivityLevel::ALL {
            for goal in Goal::ALL {
                let profile = make_profile(gender, 40, 82.5, 181.0, activity, goal);
                let result = compute(&profile).unwrap();
                assert_float_absolute_eq!(result.bmi, expected, 1e-9);
            }
        }
    }
    assert_float_absolute_eq!(calculate_bmi(82.5, 181.0), expected, 1e-9);
}

#[test]
fn test_male_female_bmr_gap_is_166() {
    for (weight, height, age) in [(50.0, 150.0, 5), (70.0, 175.0, 25), (120.0, 200.0, 100)] {
        let male = calculate_bmr(weight, height, age, Gender::Male);
        let female = calculate_bmr(weight, height, age, Gender::Female);
        assert_float_absolute_eq!(male - female, 166.0, 1e-9);
    }
}

#[test]
fn test_tdee_over_bmr_is_activity_multiplier() {
    let expected = [1.2, 1.375, 1.55, 1.725, 1.9];
    for (activity, multiplier) in ActivityLevel::ALL.into_iter().zip(expected) {
        let profile = make_profile(Gender::Male, 35, 80.0, 180.0, activity, Goal::MaintainWeight);
        let result = compute(&profile).unwrap();
        assert_float_absolute_eq!(result.tdee / result.bmr, multiplier, 1e-12);
    }
}

#[test]
fn test_goal_shifts_calories() {
    let cases = [
        (Goal::LoseWeight, -500.0),
        (Goal::MaintainWeight, 0.0),
        (Goal::GainMuscle, 300.0),
    ];
    for (goal, shift) in cases {
        let profile = make_profile(Gender::Female, 45, 65.0, 168.0, ActivityLevel::Moderate, goal);
        let result = compute(&profile).unwrap();
        assert_float_absolute_eq!(result.daily_calories - result.tdee, shift, 1e-9);
    }
}

#[test]
fn test_macros_add_back_to_calories() {
    for calories in [1200.0, 1949.1, 2008.5, 3150.75] {
        let macros = calculate_macros(calories);
        // Each gram figure is off by at most 0.05 g after rounding.
        let tolerance = 0.05 * (4.0 + 4.0 + 9.0);
        assert_float_absolute_eq!(macros.total_calories(), calories, tolerance);
    }
}

#[test]
fn test_macro_rounding_just_below_tie() {
    // Raw protein is 57.449999999999996 g here.
    let profile = make_profile(
        Gender::Male,
        25,
        30.0,
        140.0,
        ActivityLevel::Sedentary,
        Goal::LoseWeight,
    );
    let result = compute(&profile).unwrap();
    assert_float_absolute_eq!(result.daily_calories, 766.0, 1e-9);
    assert_eq!(result.protein_g, 57.4);
}

#[test]
fn test_water_rounding_exact_half_goes_to_even() {
    // 125 * 0.033 sits on 4.125.
    assert_eq!(calculate_water_intake(125.0, ActivityLevel::Sedentary), 4.12);
}

#[test]
fn test_water_bonus_for_top_two_tiers() {
    let weight = 77.0;
    let base = weight * WATER_LITERS_PER_KG;
    for activity in ActivityLevel::ALL {
        let water = calculate_water_intake(weight, activity);
        let expected = if activity.is_high_intensity() {
            base + WATER_ACTIVITY_BONUS
        } else {
            base
        };
        assert_float_absolute_eq!(water, expected, 0.005);
    }

    let low = calculate_water_intake(weight, ActivityLevel::Moderate);
    let high = calculate_water_intake(weight, ActivityLevel::VeryActive);
    assert_float_absolute_eq!(high - low, 0.5, 0.011);
}

#[test]
fn test_calories_are_not_clamped() {
    let profile = make_profile(
        Gender::Female,
        100,
        5.0,
        50.0,
        ActivityLevel::Sedentary,
        Goal::LoseWeight,
    );
    let result = compute(&profile).unwrap();
    assert!(result.daily_calories < 0.0);
    assert!(result.protein_g < 0.0);
}

#[test]
fn test_non_positive_height_is_rejected() {
    for height in [0.0, -1.0, -175.0] {
        let profile = make_profile(
            Gender::Male,
            25,
            70.0,
            height,
            ActivityLevel::Sedentary,
            Goal::MaintainWeight,
        );
        let err = compute(&profile).unwrap_err();
        assert!(matches!(err, FitError::InvalidHeight(h) if h == height));
        assert!(err.to_string().starts_with("Height must be greater than 0"));
    }
}

#[test]
fn test_compute_is_deterministic() {
    let profile = make_profile(
        Gender::Male,
        52,
        91.3,
        177.4,
        ActivityLevel::Light,
        Goal::GainMuscle,
    );
    assert_eq!(compute(&profile).unwrap(), compute(&profile).unwrap());
}
