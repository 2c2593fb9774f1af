use bk_core::{EntityBuilder, parse_assignment};
use colored::Colorize;

pub fn run(assignments: &[String], format: &str) -> Result<(), String> {
    let mut builder = EntityBuilder::new();
    for assignment in assignments {
        let (kind, value) = parse_assignment(assignment).map_err(|e| e.to_string())?;
        builder.add_property(kind, value);
    }

    let unmatched = builder.unmatched_kinds();
    if !unmatched.is_empty() {
        let names: Vec<String> = unmatched.iter().map(|k| k.to_string()).collect();
        eprintln!(
            "{} no slot for {}; ignored",
            "note:".yellow().bold(),
            names.join(", ")
        );
    }

    let out = super::render(&builder.build(), format)?;
    print!("{out}");
    Ok(())
}
