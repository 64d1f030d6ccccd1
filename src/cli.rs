use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::{ProfileDraft, AGE_MAX, AGE_MIN};
use crate::models::{ActivityLevel, Gender, Goal};

/// FitGuide: BMI, calorie and macro calculator with randomized meal and workout suggestions.
#[derive(Parser, Debug)]
#[command(name = "fit_guide")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log intermediate values to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate metrics and draw a meal and exercise plan.
    Plan(PlanArgs),

    /// List every exercise and meal the planner can suggest.
    Catalog,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

/// How the report is written to stdout.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Gender: male or female.
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Age in years.
    #[arg(long, value_parser = clap::value_parser!(u32).range(AGE_MIN as i64..=AGE_MAX as i64))]
    pub age: Option<u32>,

    /// Weight in kilograms.
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in centimeters.
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<f64>,

    /// Activity level: sedentary, light, moderate, very-active or super-active.
    #[arg(long)]
    pub activity: Option<ActivityLevel>,

    /// Goal: lose-weight, maintain-weight or gain-muscle.
    #[arg(long)]
    pub goal: Option<Goal>,

    /// JSON file with any of the profile fields; flags override it.
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// Seed for the meal and exercise draw (random when omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Fail on missing values instead of prompting for them.
    #[arg(long)]
    pub no_input: bool,
}

impl PlanArgs {
    /// Profile fields given on the command line.
    pub fn draft(&self) -> ProfileDraft {
        ProfileDraft {
            gender: self.gender,
            age: self.age,
            weight_kg: self.weight,
            height_cm: self.height,
            activity_level: self.activity,
            goal: self.goal,
        }
    }
}
