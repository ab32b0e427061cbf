//! Check command implementation

use colored::Colorize;

use crate::context::Context;
use crate::error::Result;

/// Report what every plugin contributed.
///
/// Registration failures surface as errors before anything is printed.
pub fn run_check(context: &Context) -> Result<()> {
    let registry = &context.registry;

    println!("{}", "Plugins".bold());
    if context.plugins.is_empty() {
        println!("  {} (use {} to add a scan dir)", "None".dimmed(), "--plugin-dir".cyan());
    }
    for plugin in &context.plugins {
        let types: Vec<&str> = plugin.export_types().collect();
        let app_count = plugin.apps().map_or(0, |apps| apps.len());
        println!(
            "  {} {:<20} {} app(s) [{}]",
            "+".green(),
            plugin.id.cyan(),
            app_count,
            types.join(", ").dimmed()
        );
    }
    println!();

    println!("{}", "Aggregated".bold());
    println!("  {:<18} {}", "apps:".dimmed(), registry.all_apps().len());
    println!("  {:<18} {}", "nav links:".dimmed(), registry.nav_links().len());
    println!("  {:<18} {}", "alias categories:".dimmed(), registry.aliases().len());
    println!("  {:<18} {}", "bundles:".dimmed(), registry.bundle_providers().len());
    println!();

    println!(
        "{} {} plugin(s) registered",
        "OK".green().bold(),
        context.plugins.len()
    );
    Ok(())
}
