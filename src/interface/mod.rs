pub mod prompts;
pub mod render;

pub use prompts::{
    complete_profile, prompt_activity, prompt_age, prompt_gender, prompt_goal, prompt_height,
    prompt_weight, prompt_yes_no,
};
pub use render::{
    display_catalog, display_plan, display_report, render_bmi_chart, render_report, write_csv,
    write_json,
};
