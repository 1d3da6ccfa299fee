//! Inspecta CLI - companion for the inspection report platform

use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use log::LevelFilter;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod session;

use cli::args::GlobalOptions;
use cli::{Cli, Commands, EstablishmentCommands, ReportCommands, TeacherCommands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{} {}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

/// Route `log` output to stderr. `--debug` wins over `RUST_LOG`.
fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module("inspecta", LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts),
        Commands::Login { email, password } => cli::auth::login(&opts, email, password).await,
        Commands::Logout => cli::auth::logout(&opts).await,
        Commands::Status => cli::status::run(&opts).await,
        Commands::Register {
            email,
            first_name,
            last_name,
            password,
        } => cli::auth::register(&opts, email, first_name, last_name, password).await,
        Commands::ForgotPassword { email } => cli::auth::forgot_password(&opts, email).await,
        Commands::ResetPassword { token, password } => {
            cli::auth::reset_password(&opts, token, password).await
        }
        Commands::Establishment(cmd) => match cmd {
            EstablishmentCommands::List { search, pagination } => {
                cli::establishment::list(&opts, search.as_deref(), &pagination).await
            }
        },
        Commands::Teacher(cmd) => match cmd {
            TeacherCommands::List { search, pagination } => {
                cli::teacher::list(&opts, search.as_deref(), &pagination).await
            }
        },
        Commands::Report(cmd) => match cmd {
            ReportCommands::List {
                filters,
                pagination,
            } => cli::report::list(&opts, &filters, &pagination).await,
        },
        Commands::Version => {
            println!("inspecta version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
