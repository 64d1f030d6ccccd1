use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{FitError, Result};
use crate::models::{ActivityLevel, Gender, Goal, UserProfile};

/// Youngest age accepted at the input boundary.
pub const AGE_MIN: u32 = 5;

/// Oldest age accepted at the input boundary.
pub const AGE_MAX: u32 = 100;

/// Age offered by the interactive prompt.
pub const DEFAULT_AGE: u32 = 25;

/// Partially known profile, gathered from a profile file and command-line flags.
///
/// Enum fields accept the same spellings as the flags ("Lose Weight", "lose_weight", "lose").
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileDraft {
    pub gender: Option<Gender>,
    pub age: Option<u32>,
    #[serde(alias = "weight")]
    pub weight_kg: Option<f64>,
    #[serde(alias = "height")]
    pub height_cm: Option<f64>,
    #[serde(alias = "activity")]
    pub activity_level: Option<ActivityLevel>,
    pub goal: Option<Goal>,
}

impl ProfileDraft {
    /// Layer `over` on top of `self`; fields set in `over` win.
    pub fn overlay(self, over: ProfileDraft) -> Self {
        Self {
            gender: over.gender.or(self.gender),
            age: over.age.or(self.age),
            weight_kg: over.weight_kg.or(self.weight_kg),
            height_cm: over.height_cm.or(self.height_cm),
            activity_level: over.activity_level.or(self.activity_level),
            goal: over.goal.or(self.goal),
        }
    }

    /// Names of the fields still unset.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.gender.is_none() {
            missing.push("gender");
        }
        if self.age.is_none() {
            missing.push("age");
        }
        if self.weight_kg.is_none() {
            missing.push("weight");
        }
        if self.height_cm.is_none() {
            missing.push("height");
        }
        if self.activity_level.is_none() {
            missing.push("activity");
        }
        if self.goal.is_none() {
            missing.push("goal");
        }
        missing
    }

    /// Finish the draft into a profile, checking the input-boundary ranges.
    ///
    /// Height is left to the calculator, which rejects non-positive values.
    pub fn into_profile(self) -> Result<UserProfile> {
        let missing = self.missing_fields();
        match (
            self.gender,
            self.age,
            self.weight_kg,
            self.height_cm,
            self.activity_level,
            self.goal,
        ) {
            (Some(gender), Some(age), Some(weight_kg), Some(height_cm), Some(activity), Some(goal)) => {
                Ok(UserProfile::new(
                    gender,
                    validate_age(age)?,
                    validate_weight(weight_kg)?,
                    height_cm,
                    activity,
                    goal,
                ))
            }
            _ => Err(FitError::InvalidInput(format!(
                "missing value(s): {}",
                missing.join(", ")
            ))),
        }
    }
}

/// Age must lie in [AGE_MIN, AGE_MAX].
pub fn validate_age(age: u32) -> Result<u32> {
    if (AGE_MIN..=AGE_MAX).contains(&age) {
        Ok(age)
    } else {
        Err(FitError::InvalidInput(format!(
            "age must be between {} and {} (got {})",
            AGE_MIN, AGE_MAX, age
        )))
    }
}

/// Weight must be a positive number of kilograms.
pub fn validate_weight(weight_kg: f64) -> Result<f64> {
    if weight_kg > 0.0 && weight_kg.is_finite() {
        Ok(weight_kg)
    } else {
        Err(FitError::InvalidInput(format!(
            "weight must be greater than 0 (got {})",
            weight_kg
        )))
    }
}

/// Load a profile draft from a JSON file.
pub fn load_profile_draft<P: AsRef<Path>>(path: P) -> Result<ProfileDraft> {
    let content = fs::read_to_string(path.as_ref())?;
    let draft: ProfileDraft = serde_json::from_str(&content)?;
    debug!(path = %path.as_ref().display(), missing = ?draft.missing_fields(), "loaded profile file");
    Ok(draft)
}
