use crate::models::{Exercise, Goal, Meal, MealSlot};

const fn exercise(name: &'static str, calorie_note: &'static str) -> Exercise {
    Exercise { name, calorie_note }
}

const fn meal(dish: &'static str, calories: u32) -> Meal {
    Meal { dish, calories }
}

pub const LOSE_WEIGHT_EXERCISES: &[Exercise] = &[
    exercise("Cardio (Running) - 30 mins", "Burns ~300 kcal"),
    exercise("HIIT Workout - 25 mins", "Burns ~350 kcal"),
    exercise("Jump Rope - 20 mins", "Burns ~250 kcal"),
];

pub const MAINTAIN_WEIGHT_EXERCISES: &[Exercise] = &[
    exercise("Full Body Strength - 45 mins", "Burns ~250 kcal"),
    exercise("Cycling - 30 mins", "Burns ~200 kcal"),
    exercise("Pilates - 30 mins", "Burns ~180 kcal"),
];

pub const GAIN_MUSCLE_EXERCISES: &[Exercise] = &[
    exercise("Strength Training - 1 hour", "Burns ~350 kcal"),
    exercise("Resistance Bands - 40 mins", "Burns ~200 kcal"),
    exercise("Bodyweight Exercises - 30 mins", "Burns ~180 kcal"),
];

pub const BREAKFAST_MEALS: &[Meal] = &[
    meal("Oatmeal & Peanut Butter", 350),
    meal("Scrambled Eggs & Toast", 400),
    meal("Greek Yogurt & Granola", 300),
];

pub const LUNCH_MEALS: &[Meal] = &[
    meal("Grilled Chicken & Quinoa", 600),
    meal("Veggie Stir-Fry & Tofu", 500),
    meal("Salmon with Sweet Potatoes", 650),
];

pub const DINNER_MEALS: &[Meal] = &[
    meal("Steak & Roasted Veggies", 700),
    meal("Pasta with Lean Meat Sauce", 650),
    meal("Baked Fish with Salad", 600),
];

pub const SNACK_MEALS: &[Meal] = &[
    meal("Nuts & Dried Fruits", 200),
    meal("Protein Shake", 250),
    meal("Hummus & Veggies", 180),
];

/// Exercises eligible for a goal.
pub fn exercise_catalog(goal: Goal) -> &'static [Exercise] {
    match goal {
        Goal::LoseWeight => LOSE_WEIGHT_EXERCISES,
        Goal::MaintainWeight => MAINTAIN_WEIGHT_EXERCISES,
        Goal::GainMuscle => GAIN_MUSCLE_EXERCISES,
    }
}

/// Dishes eligible for a meal slot.
pub fn meal_catalog(slot: MealSlot) -> &'static [Meal] {
    match slot {
        MealSlot::Breakfast => BREAKFAST_MEALS,
        MealSlot::Lunch => LUNCH_MEALS,
        MealSlot::Dinner => DINNER_MEALS,
        MealSlot::Snacks => SNACK_MEALS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_goal_has_three_exercises() {
        for goal in Goal::ALL {
            assert_eq!(exercise_catalog(goal).len(), 3, "{goal}");
        }
    }

    #[test]
    fn test_every_slot_has_three_meals() {
        for slot in MealSlot::ALL {
            assert_eq!(meal_catalog(slot).len(), 3, "{slot}");
        }
    }
}
