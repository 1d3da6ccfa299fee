//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod auth;
pub mod completions;
pub mod context;
pub mod establishment;
pub mod handlers;
pub mod init;
pub mod report;
pub mod status;
pub mod teacher;

pub use args::{OutputFormat, PaginationArgs, ReportFilterArgs};
pub use context::CommandContext;

/// Inspecta - companion CLI for the inspection report platform
#[derive(Parser, Debug)]
#[command(name = "inspecta")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "INSPECTA_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "INSPECTA_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Backend base URL (e.g. http://localhost:8080)
    #[arg(long, global = true, env = "INSPECTA_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "INSPECTA_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configure the backend to talk to
    Init,

    /// Sign in and store the session
    Login {
        /// Account email (prompted if omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Password (prompted if omitted)
        #[arg(long, env = "INSPECTA_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Show who is logged in and their roles
    #[command(visible_alias = "whoami")]
    Status,

    /// Create an account
    Register {
        /// Account email
        #[arg(long, short = 'e')]
        email: String,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        /// Password (prompted with confirmation if omitted)
        #[arg(long, env = "INSPECTA_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Request a password reset link
    ForgotPassword {
        /// Account email
        #[arg(long, short = 'e')]
        email: String,
    },

    /// Set a new password with the token from a reset link
    ResetPassword {
        /// Reset token from the email link
        #[arg(long, short = 't')]
        token: String,

        /// New password (prompted with confirmation if omitted)
        #[arg(long, env = "INSPECTA_NEW_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Browse establishments
    #[command(subcommand)]
    Establishment(EstablishmentCommands),

    /// Browse teachers
    #[command(subcommand)]
    Teacher(TeacherCommands),

    /// Browse inspection reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   inspecta completion bash > /etc/bash_completion.d/inspecta
  zsh:    inspecta completion zsh > \"${fpath[1]}/_inspecta\"
  fish:   inspecta completion fish > ~/.config/fish/completions/inspecta.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Establishment subcommands
#[derive(Subcommand, Debug)]
pub enum EstablishmentCommands {
    /// List establishments
    #[command(visible_alias = "ls")]
    List {
        /// Filter by name, code or city (case-insensitive)
        #[arg(long, short = 'q')]
        search: Option<String>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },
}

/// Teacher subcommands
#[derive(Subcommand, Debug)]
pub enum TeacherCommands {
    /// List teachers (administrators and directors)
    #[command(visible_alias = "ls")]
    List {
        /// Filter by name, email or subject (case-insensitive)
        #[arg(long, short = 'q')]
        search: Option<String>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// List inspection reports with filtering, sorting and paging
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            inspecta report list                              # Newest first\n  \
            inspecta report list --status validated           # Only validated\n  \
            inspecta report list -q maths --sort-by title --sort-dir asc\n  \
            inspecta report list -n 20 -p 2 --format json     # Second page of 20"
    )]
    List {
        #[command(flatten)]
        filters: ReportFilterArgs,

        #[command(flatten)]
        pagination: PaginationArgs,
    },
}
