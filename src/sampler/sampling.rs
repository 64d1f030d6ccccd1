use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::models::{Exercise, Goal, MealPlan, MealSlot, PlanResult};
use crate::sampler::catalog::{exercise_catalog, meal_catalog};

/// Number of exercises suggested per plan.
pub const EXERCISES_PER_PLAN: usize = 2;

/// Draw two distinct exercises for a goal, uniformly without replacement.
pub fn sample_exercises(goal: Goal, rng: &mut impl Rng) -> Vec<Exercise> {
    let chosen: Vec<Exercise> = exercise_catalog(goal)
        .choose_multiple(rng, EXERCISES_PER_PLAN)
        .copied()
        .collect();

    let names: Vec<&str> = chosen.iter().map(|e| e.name).collect();
    debug!(goal = %goal, exercises = ?names, "sampled exercises");
    chosen
}

/// Draw one dish per slot, each slot independently and uniformly.
///
/// `daily_calories` is accepted but does not influence the draw.
pub fn sample_meals(daily_calories: f64, rng: &mut impl Rng) -> MealPlan {
    let meals: MealPlan = MealSlot::ALL
        .into_iter()
        .filter_map(|slot| meal_catalog(slot).choose(&mut *rng).map(|meal| (slot, *meal)))
        .collect();

    debug!(daily_calories, dishes = meals.len(), "sampled meals");
    meals
}

/// Sample a full day: meals for the calorie target plus workouts for the goal.
pub fn generate_plan(goal: Goal, daily_calories: f64, rng: &mut impl Rng) -> PlanResult {
    let meals = sample_meals(daily_calories, rng);
    let exercises = sample_exercises(goal, rng);
    PlanResult { meals, exercises }
}
