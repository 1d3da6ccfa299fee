//! Account command implementations: login, logout, register, password reset

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::AuthApi;
use crate::client::models::{ForgotPasswordRequest, RegisterRequest, ResetPasswordRequest};
use crate::error::Result;
use crate::models::SessionDisplay;
use crate::output::{json, progress};

/// Use the given value or ask for it
fn prompt_email(email: Option<String>) -> Result<String> {
    match email {
        Some(email) => Ok(email),
        None => Ok(Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Email")
            .interact_text()?),
    }
}

fn prompt_password(password: Option<String>, prompt: &str, confirm: bool) -> Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }

    let theme = ColorfulTheme::default();
    let mut input = Password::with_theme(&theme).with_prompt(prompt);
    if confirm {
        input = input.with_confirmation("Confirm password", "Passwords do not match");
    }
    Ok(input.interact()?)
}

/// Print a backend confirmation, or `fallback` when it sent none
fn print_confirmation(message: Option<String>, fallback: &str) {
    let message = message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());
    println!("{} {}", "✓".green(), message);
}

/// Run the login command
pub async fn login(
    opts: &GlobalOptions,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;

    let email = prompt_email(email)?;
    let password = prompt_password(password, "Password", false)?;

    let spinner = progress::spinner("Signing in...");
    let result = ctx.session.login(&email, &password).await;
    spinner.finish_and_clear();
    let identity = result?;

    ctx.client.set_token(ctx.session.token().await).await;
    debug!("Signed in as {}", identity.email);

    let display = SessionDisplay::new(&ctx.session.snapshot(), &ctx.api_host);
    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&display)?),
        OutputFormat::Table => {
            println!("{} Logged in as {}", "✓".green(), identity.email.bold());
            if !display.roles.is_empty() {
                println!("  Roles: {}", display.role_labels());
            }
        }
    }

    Ok(())
}

/// Run the logout command. Succeeds when already logged out.
pub async fn logout(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let was_signed_in = ctx.handle().snapshot().identity.is_some();

    ctx.session.logout().await?;
    ctx.client.set_token(None).await;

    if was_signed_in {
        println!("{} Logged out", "✓".green());
    } else {
        println!("{} Not logged in", "○".dimmed());
    }

    Ok(())
}

/// Run the register command
pub async fn register(
    opts: &GlobalOptions,
    email: String,
    first_name: Option<String>,
    last_name: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let password = prompt_password(password, "Choose a password", true)?;

    let request = RegisterRequest {
        email,
        password,
        first_name,
        last_name,
    };

    let spinner = progress::spinner("Creating account...");
    let result = ctx.client.register(&request).await;
    spinner.finish_and_clear();

    print_confirmation(result?, "Account created. You can now run `inspecta login`.");
    Ok(())
}

/// Run the forgot-password command
pub async fn forgot_password(opts: &GlobalOptions, email: String) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;

    let spinner = progress::spinner("Requesting reset link...");
    let result = ctx
        .client
        .forgot_password(&ForgotPasswordRequest { email })
        .await;
    spinner.finish_and_clear();

    print_confirmation(
        result?,
        "If the account exists, a reset link has been sent by email.",
    );
    Ok(())
}

/// Run the reset-password command
pub async fn reset_password(
    opts: &GlobalOptions,
    token: String,
    password: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let new_password = prompt_password(password, "New password", true)?;

    let spinner = progress::spinner("Updating password...");
    let result = ctx
        .client
        .reset_password(&ResetPasswordRequest {
            token,
            new_password,
        })
        .await;
    spinner.finish_and_clear();

    print_confirmation(result?, "Password updated. You can now run `inspecta login`.");
    Ok(())
}
