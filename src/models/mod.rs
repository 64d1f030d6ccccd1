pub mod metrics;
pub mod plan;
pub mod profile;

pub use metrics::{BmiCategory, MetabolicResult};
pub use plan::{Exercise, Meal, MealPlan, MealSlot, PlanResult};
pub use profile::{ActivityLevel, Gender, Goal, UserProfile};
