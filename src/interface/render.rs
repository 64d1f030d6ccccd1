use std::io::Write;

use crate::error::Result;
use crate::models::{BmiCategory, Goal, MealSlot, PlanResult};
use crate::report::Report;
use crate::sampler::{exercise_catalog, meal_catalog};

/// Columns used by the bars of the BMI chart.
pub const CHART_WIDTH: usize = 50;

/// Lowest top of the chart's BMI axis.
const CHART_MIN_SCALE: f64 = 45.0;

/// Draw the BMI reference bars with a marker column at `bmi`.
pub fn render_bmi_chart(bmi: f64) -> String {
    let scale = if bmi.is_finite() {
        bmi.max(CHART_MIN_SCALE)
    } else {
        CHART_MIN_SCALE
    };
    let to_col = |value: f64| ((value / scale) * CHART_WIDTH as f64).round().max(0.0) as usize;
    let marker = to_col(bmi).min(CHART_WIDTH);

    let label_width = BmiCategory::ALL
        .iter()
        .map(|c| c.label().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str("=== BMI Categories ===\n");

    for category in BmiCategory::ALL {
        let bar_len = to_col(category.reference_value());
        let row: String = (0..=CHART_WIDTH)
            .map(|col| {
                if col == marker {
                    '|'
                } else if col < bar_len {
                    '#'
                } else {
                    ' '
                }
            })
            .collect();

        out.push_str(&format!(
            "  {:<width$}  {} {:>4.1}\n",
            category.label(),
            row,
            category.reference_value(),
            width = label_width
        ));
    }

    out.push_str(&format!(
        "  {:<width$}  {}^ Your BMI: {:.2}\n",
        "",
        " ".repeat(marker),
        bmi,
        width = label_width
    ));

    out
}

fn render_plan(plan: &PlanResult) -> String {
    let mut out = String::new();

    out.push_str("=== Meal Plan ===\n");
    for (slot, meal) in &plan.meals {
        out.push_str(&format!("  {}: {} ({} kcal)\n", slot, meal.dish, meal.calories));
    }
    out.push_str(&format!("  Total: {} kcal\n", plan.total_meal_calories()));

    out.push('\n');
    out.push_str("=== Exercise Plan ===\n");
    for exercise in &plan.exercises {
        out.push_str(&format!("  {} - {}\n", exercise.name, exercise.calorie_note));
    }

    out
}

/// Human-readable report, without the chart.
pub fn render_report(report: &Report) -> String {
    let m = &report.metrics;
    let mut out = String::new();

    out.push_str(&format!(
        "Your BMI: {:.2} ({})\n",
        m.bmi,
        report.bmi_category.label()
    ));
    out.push_str(&format!("Daily Caloric Target: {:.0} kcal\n", m.daily_calories));
    out.push('\n');

    out.push_str("=== Macronutrient Breakdown ===\n");
    out.push_str(&format!(
        "  Protein: {:.1}g | Carbs: {:.1}g | Fats: {:.1}g\n",
        m.protein_g, m.carbs_g, m.fat_g
    ));
    out.push('\n');

    out.push_str("=== Hydration Recommendation ===\n");
    out.push_str(&format!(
        "  Drink at least {:.2}L of water per day.\n",
        m.water_liters
    ));
    out.push('\n');

    out.push_str(&render_plan(&report.plan));
    out
}

/// Print the report and the BMI chart.
pub fn display_report(report: &Report) {
    println!();
    print!("{}", render_report(report));
    println!();
    print!("{}", render_bmi_chart(report.metrics.bmi));
    println!();
}

/// Print a freshly drawn plan on its own.
pub fn display_plan(plan: &PlanResult) {
    println!();
    print!("{}", render_plan(plan));
    println!();
}

/// Write the report as pretty JSON.
pub fn write_json<W: Write>(report: &Report, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    Ok(())
}

/// Write the report as `section,name,detail,value,unit` rows.
pub fn write_csv<W: Write>(report: &Report, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    let m = &report.metrics;

    wtr.write_record(["section", "name", "detail", "value", "unit"])?;

    let metrics = [
        ("bmi", report.bmi_category.label(), format!("{:.2}", m.bmi), "kg/m2"),
        ("bmr", "", format!("{:.2}", m.bmr), "kcal"),
        ("tdee", "", format!("{:.2}", m.tdee), "kcal"),
        ("daily_calories", report.profile.goal.label(), format!("{:.0}", m.daily_calories), "kcal"),
        ("protein", "", format!("{:.1}", m.protein_g), "g"),
        ("carbs", "", format!("{:.1}", m.carbs_g), "g"),
        ("fat", "", format!("{:.1}", m.fat_g), "g"),
        ("water", "", format!("{:.2}", m.water_liters), "L"),
    ];
    for (name, detail, value, unit) in &metrics {
        wtr.write_record(["metric", *name, *detail, value.as_str(), *unit])?;
    }

    for (slot, meal) in &report.plan.meals {
        wtr.write_record([
            "meal",
            slot.label(),
            meal.dish,
            meal.calories.to_string().as_str(),
            "kcal",
        ])?;
    }

    for exercise in &report.plan.exercises {
        wtr.write_record(["exercise", exercise.name, exercise.calorie_note, "", ""])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Print every exercise and meal the sampler can choose from.
pub fn display_catalog() {
    println!();
    println!("=== Exercises ===");
    for goal in Goal::ALL {
        println!();
        println!("{}:", goal);
        for exercise in exercise_catalog(goal) {
            println!("  {} - {}", exercise.name, exercise.calorie_note);
        }
    }

    println!();
    println!("=== Meals ===");
    for slot in MealSlot::ALL {
        println!();
        println!("{}:", slot);
        for meal in meal_catalog(slot) {
            println!("  {} ({} kcal)", meal.dish, meal.calories);
        }
    }
    println!();
}
