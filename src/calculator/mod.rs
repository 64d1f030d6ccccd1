pub mod constants;
pub mod formulas;

pub use constants::*;
pub use formulas::{
    calculate_bmi, calculate_bmr, calculate_daily_calories, calculate_macros,
    calculate_tdee, calculate_water_intake, compute, round_to, Macros,
};
