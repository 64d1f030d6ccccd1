use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// A catalog exercise with its rough burn estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Exercise {
    pub name: &'static str,
    pub calorie_note: &'static str,
}

/// A catalog dish with its calorie count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Meal {
    pub dish: &'static str,
    pub calories: u32,
}

/// Fixed meal slots of a day, ordered as they are eaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snacks,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snacks => "Snacks",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One dish per slot, iterated in slot order.
pub type MealPlan = BTreeMap<MealSlot, Meal>;

/// A freshly sampled day of meals and workouts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanResult {
    pub meals: MealPlan,
    pub exercises: Vec<Exercise>,
}

impl PlanResult {
    /// Sum of the calories of every chosen dish.
    pub fn total_meal_calories(&self) -> u32 {
        self.meals.values().map(|m| m.calories).sum()
    }
}
