use rand::Rng;
use serde::Serialize;

use crate::calculator::compute;
use crate::error::Result;
use crate::models::{BmiCategory, MetabolicResult, PlanResult, UserProfile};
use crate::sampler::generate_plan;

/// Everything shown to the user for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub profile: UserProfile,
    pub metrics: MetabolicResult,
    pub bmi_category: BmiCategory,
    pub plan: PlanResult,
}

impl Report {
    /// Compute the metrics, then sample a plan against the resulting calorie target.
    ///
    /// Nothing is sampled when the calculator rejects the profile.
    pub fn build(profile: UserProfile, rng: &mut impl Rng) -> Result<Self> {
        let metrics = compute(&profile)?;
        let plan = generate_plan(profile.goal, metrics.daily_calories, rng);

        Ok(Self {
            bmi_category: BmiCategory::classify(metrics.bmi),
            profile,
            metrics,
            plan,
        })
    }
}
