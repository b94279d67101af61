//! `somaleo curriculum`: list supported subjects and grades.

use anyhow::Result;
use console::style;

use somaleo_core::curriculum::{GRADES, GRADES_DESCRIPTION, SUBJECTS, TUTOR_NAME};

/// Print the curriculum the tutor covers.
pub fn show_curriculum(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&curriculum_json())?);
        return Ok(());
    }

    println!();
    println!("  {} {}", style("📚").bold(), style(TUTOR_NAME).cyan().bold());
    println!("  {}", style(GRADES_DESCRIPTION).dim());
    println!();
    print_subjects();
    println!();
    print_grades();
    println!();
    Ok(())
}

pub fn print_subjects() {
    println!("  {}", style("Subjects:").bold());
    for subject in SUBJECTS {
        println!("    {} {subject}", style("•").cyan());
    }
}

pub fn print_grades() {
    let grades = GRADES
        .iter()
        .map(|g| format!("Grade {g}"))
        .collect::<Vec<_>>()
        .join(", ");
    println!("  {} {grades}", style("Grades:").bold());
}

fn curriculum_json() -> serde_json::Value {
    serde_json::json!({
        "tutor_name": TUTOR_NAME,
        "subjects": SUBJECTS,
        "grades": GRADES,
        "description": GRADES_DESCRIPTION,
    })
}
