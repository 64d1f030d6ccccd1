use dialoguer::{Confirm, Input, Select};

use crate::config::{validate_age, validate_weight, ProfileDraft, DEFAULT_AGE};
use crate::error::{FitError, Result};
use crate::models::{ActivityLevel, Gender, Goal, UserProfile};

/// Let the user pick one of a closed set of choices.
fn prompt_choice<T: Copy>(
    prompt: &str,
    choices: &[T],
    label: fn(&T) -> &'static str,
    default: usize,
) -> Result<T> {
    let options: Vec<&str> = choices.iter().map(label).collect();

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(default)
        .interact()?;

    choices
        .get(selection)
        .copied()
        .ok_or_else(|| FitError::InvalidInput(format!("no option at index {}", selection)))
}

/// Prompt for a number typed as text.
fn prompt_number<T: std::str::FromStr>(prompt: &str, default: Option<&str>) -> Result<T> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }

    let text = input.interact_text()?;
    text.trim()
        .parse()
        .map_err(|_| FitError::InvalidInput(format!("'{}' is not a valid number", text.trim())))
}

pub fn prompt_gender() -> Result<Gender> {
    prompt_choice("Select your gender", &Gender::ALL, Gender::label, 0)
}

/// Prompt for age in years.
pub fn prompt_age() -> Result<u32> {
    let age = prompt_number("Enter your age", Some(&DEFAULT_AGE.to_string()))?;
    validate_age(age)
}

/// Prompt for weight in kilograms.
pub fn prompt_weight() -> Result<f64> {
    let weight = prompt_number("Enter your weight (kg)", None)?;
    validate_weight(weight)
}

/// Prompt for height in centimeters.
///
/// Not range-checked here; the calculator rejects non-positive heights.
pub fn prompt_height() -> Result<f64> {
    prompt_number("Enter your height (cm)", None)
}

pub fn prompt_activity() -> Result<ActivityLevel> {
    prompt_choice(
        "Select your activity level",
        &ActivityLevel::ALL,
        ActivityLevel::label,
        0,
    )
}

pub fn prompt_goal() -> Result<Goal> {
    prompt_choice("Select your goal", &Goal::ALL, Goal::label, 0)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Ask for every field the draft is missing, then finish it into a profile.
pub fn complete_profile(draft: ProfileDraft) -> Result<UserProfile> {
    let draft = ProfileDraft {
        gender: Some(match draft.gender {
            Some(g) => g,
            None => prompt_gender()?,
        }),
        age: Some(match draft.age {
            Some(a) => a,
            None => prompt_age()?,
        }),
        weight_kg: Some(match draft.weight_kg {
            Some(w) => w,
            None => prompt_weight()?,
        }),
        height_cm: Some(match draft.height_cm {
            Some(h) => h,
            None => prompt_height()?,
        }),
        activity_level: Some(match draft.activity_level {
            Some(l) => l,
            None => prompt_activity()?,
        }),
        goal: Some(match draft.goal {
            Some(g) => g,
            None => prompt_goal()?,
        }),
    };

    draft.into_profile()
}
