pub mod catalog;
pub mod sampling;

pub use catalog::{exercise_catalog, meal_catalog};
pub use sampling::{generate_plan, sample_exercises, sample_meals, EXERCISES_PER_PLAN};
