use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{FitError, Result};

/// Gender used by the Mifflin-St Jeor sex constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Gender::Male => &["m", "man"],
            Gender::Female => &["f", "woman"],
        }
    }
}

/// Activity tier, each mapping to a fixed TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ActivityLevel {
    /// Little to no exercise.
    Sedentary,
    /// Exercise 1-3 days/week.
    Light,
    /// Exercise 3-5 days/week.
    Moderate,
    /// Exercise 6-7 days/week.
    VeryActive,
    /// Intense training twice a day.
    SuperActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::VeryActive,
        ActivityLevel::SuperActive,
    ];

    /// TDEE multiplier for this tier.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::SuperActive => 1.9,
        }
    }

    /// Whether the tier earns the extra hydration allowance.
    pub fn is_high_intensity(&self) -> bool {
        matches!(self, ActivityLevel::VeryActive | ActivityLevel::SuperActive)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little to no exercise)",
            ActivityLevel::Light => "Light activity (1-3 days/week)",
            ActivityLevel::Moderate => "Moderate activity (3-5 days/week)",
            ActivityLevel::VeryActive => "Very active (6-7 days/week)",
            ActivityLevel::SuperActive => "Super active (twice/day intense training)",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            ActivityLevel::Sedentary => &["sedentary"],
            ActivityLevel::Light => &["light", "light activity", "lightly active"],
            ActivityLevel::Moderate => &["moderate", "moderate activity", "moderately active"],
            ActivityLevel::VeryActive => &["very active", "very"],
            ActivityLevel::SuperActive => &["super active", "super", "extra active"],
        }
    }
}

/// What the user wants to achieve; shifts the calorie target and picks the workout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Goal {
    LoseWeight,
    MaintainWeight,
    GainMuscle,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::LoseWeight, Goal::MaintainWeight, Goal::GainMuscle];

    pub fn label(&self) -> &'static str {
        match self {
            Goal::LoseWeight => "Lose Weight",
            Goal::MaintainWeight => "Maintain Weight",
            Goal::GainMuscle => "Gain Muscle",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Goal::LoseWeight => &["lose"],
            Goal::MaintainWeight => &["maintain"],
            Goal::GainMuscle => &["gain"],
        }
    }
}

/// Lowercase, treat `_`/`-` as spaces and collapse runs of whitespace.
fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve free-form text against a closed set of choices.
///
/// Accepts the display label and the per-variant aliases. On failure, the
/// error carries the closest known spelling when one scores above 0.7.
fn parse_choice<T: Copy>(
    input: &str,
    kind: &str,
    choices: &[T],
    label: impl Fn(&T) -> &'static str,
    aliases: impl Fn(&T) -> &'static [&'static str],
) -> Result<T> {
    let label = &label;
    let normalized = normalize(input);
    let wanted = normalized.as_str();

    let spellings = |choice: &T| {
        let mut all = vec![normalize(label(choice))];
        all.extend(aliases(choice).iter().map(|a| normalize(a)));
        all
    };

    if let Some(choice) = choices
        .iter()
        .find(|c| spellings(*c).iter().any(|s| s == wanted))
    {
        return Ok(*choice);
    }

    let closest = choices
        .iter()
        .flat_map(|c| {
            spellings(c)
                .into_iter()
                .map(move |s| (label(c), jaro_winkler(&s, wanted)))
        })
        .filter(|(_, score)| *score > 0.7)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let known: Vec<&str> = choices.iter().map(|c| label(c)).collect();
    let message = match closest {
        Some((hint, _)) => format!(
            "unknown {} '{}', did you mean '{}'?",
            kind, input, hint
        ),
        None => format!(
            "unknown {} '{}', expected one of: {}",
            kind,
            input,
            known.join(", ")
        ),
    };

    Err(FitError::InvalidArgument(message))
}

macro_rules! choice_impls {
    ($ty:ty, $kind:literal) => {
        impl FromStr for $ty {
            type Err = FitError;

            fn from_str(s: &str) -> Result<Self> {
                parse_choice(s, $kind, &<$ty>::ALL, <$ty>::label, <$ty>::aliases)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = FitError;

            fn try_from(value: String) -> Result<Self> {
                value.parse()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

choice_impls!(Gender, "gender");
choice_impls!(ActivityLevel, "activity level");
choice_impls!(Goal, "goal");

/// Biometric inputs for one calculation.
///
/// Built once at the input boundary and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub gender: Gender,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl UserProfile {
    pub fn new(
        gender: Gender,
        age: u32,
        weight_kg: f64,
        height_cm: f64,
        activity_level: ActivityLevel,
        goal: Goal,
    ) -> Self {
        Self {
            gender,
            age,
            weight_kg,
            height_cm,
            activity_level,
            goal,
        }
    }
}
