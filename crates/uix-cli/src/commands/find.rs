//! Find command implementation

use colored::Colorize;
use serde_json::Value;

use crate::context::Context;
use crate::error::Result;

/// Print the alias specs matching `patterns`
pub fn run_find(context: &Context, patterns: &[String], json: bool) -> Result<()> {
    let found = context.registry.find(patterns);

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    if found.is_empty() {
        eprintln!(
            "{} no alias specs match {}",
            "warning:".yellow().bold(),
            patterns.join(" ")
        );
        return Ok(());
    }

    for spec in found {
        match spec {
            // Plain strings print bare so the output can be piped
            Value::String(s) => println!("{s}"),
            other => println!("{other}"),
        }
    }
    Ok(())
}
