//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::config::{Config, DEFAULT_API_HOST};
use crate::error::{ConfigError, Result};

/// Check that a host looks like `http(s)://host[:port]`
fn validate_host(input: &str) -> std::result::Result<(), String> {
    let host = input.trim();
    if host.starts_with("http://") || host.starts_with("https://") {
        Ok(())
    } else {
        Err("Host must start with http:// or https://".to_string())
    }
}

/// Run the init command
///
/// Asks for the backend host and default output format and writes them to
/// the config file. Existing preferences are kept.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to Inspecta!".bold().green());
    println!("Let's point the CLI at your inspection backend.\n");

    let mut config = Config::load_or_default_at(opts.config_ref())?;
    let theme = ColorfulTheme::default();

    let current = config.api_host(opts.api_host_ref());
    let host: String = Input::with_theme(&theme)
        .with_prompt("Backend URL")
        .default(current)
        .validate_with(|input: &String| validate_host(input))
        .interact_text()?;
    let host = host.trim().trim_end_matches('/').to_string();
    validate_host(&host).map_err(ConfigError::Invalid)?;

    let formats = ["table", "json"];
    let current_format = config.preferences.format.as_deref().unwrap_or("table");
    let selected = Select::with_theme(&theme)
        .with_prompt("Default output format")
        .items(&formats)
        .default(formats.iter().position(|f| *f == current_format).unwrap_or(0))
        .interact()?;

    config.api_host = if host == DEFAULT_API_HOST {
        None
    } else {
        Some(host)
    };
    config.preferences.format = Some(formats[selected].to_string());
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Sign in", "inspecta login".cyan());
    println!("  {} - Browse inspection reports", "inspecta report list".cyan());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_host() {
        assert!(validate_host("http://localhost:8080").is_ok());
        assert!(validate_host(" https://inspect.example.org ").is_ok());
        assert!(validate_host("localhost:8080").is_err());
    }
}
