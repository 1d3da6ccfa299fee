//! Status command implementation

use chrono::Utc;
use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::models::SessionDisplay;
use crate::output::json;

/// Run the status command to display the current session
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let snapshot = ctx.handle().ready().await;
    let display = SessionDisplay::new(&snapshot, &ctx.api_host);

    if ctx.format == OutputFormat::Json {
        println!("{}", json::format_json(&display)?);
        return Ok(());
    }

    println!("{}\n", "Inspecta Session Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!("Config file: {}", config_path.display().to_string().cyan());
    println!("API host:    {}", display.api_host.cyan());
    println!();

    match display.email {
        Some(ref email) => {
            println!("{} Logged in as {}", "✓".green(), email.bold());

            if display.roles.is_empty() {
                println!("{} No roles assigned", "○".dimmed());
            } else {
                println!("{} Roles: {}", "✓".green(), display.role_labels());
            }

            match display.remaining(Utc::now()) {
                Some(remaining) => {
                    println!("{} Session valid (expires in {})", "✓".green(), remaining)
                }
                None => println!("{} Session expiry unknown", "○".dimmed()),
            }
        }
        None => {
            println!("{} Not logged in", "✗".red());
            println!("  → Run 'inspecta login' to sign in");
        }
    }

    Ok(())
}
