//! Apps, links and bundles listings

use colored::Colorize;

use crate::context::Context;
use crate::error::Result;

/// List applications, visible first then hidden
pub fn run_apps(context: &Context, json: bool) -> Result<()> {
    let apps = context.registry.all_apps();

    if json {
        println!("{}", serde_json::to_string_pretty(&apps)?);
        return Ok(());
    }

    println!("{}", "Applications".bold());
    if apps.is_empty() {
        println!("  {}", "None".dimmed());
    }
    for app in &apps {
        let title = app.title.as_deref().unwrap_or("");
        let marker = if app.hidden {
            "hidden".yellow()
        } else {
            "visible".green()
        };
        println!(
            "  {:<20} {:<24} {} ({})",
            app.id.cyan(),
            title,
            app.url.dimmed(),
            marker
        );
    }
    println!();
    println!("Total: {} apps", apps.len());
    Ok(())
}

/// List navigation links in presentation order
pub fn run_links(context: &Context, json: bool) -> Result<()> {
    let links = context.registry.nav_links().in_order();

    if json {
        println!("{}", serde_json::to_string_pretty(&links)?);
        return Ok(());
    }

    println!("{}", "Navigation Links".bold());
    if links.is_empty() {
        println!("  {}", "None".dimmed());
    }
    for link in &links {
        println!(
            "  {:>4} {:<20} {}",
            link.order,
            link.id.cyan(),
            link.url.dimmed()
        );
    }
    Ok(())
}

/// List bundle providers in registration order
pub fn run_bundles(context: &Context, json: bool) -> Result<()> {
    let bundles = context.registry.bundle_providers();

    if json {
        println!("{}", serde_json::to_string_pretty(bundles)?);
        return Ok(());
    }

    println!("{}", "Bundle Providers".bold());
    if bundles.is_empty() {
        println!("  {}", "None".dimmed());
    }
    for (i, bundle) in bundles.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, bundle);
    }
    Ok(())
}
