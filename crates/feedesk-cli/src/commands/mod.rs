//! CLI command definitions and dispatch.

pub mod customer;
pub mod fee;
pub mod loan;
pub mod session;

use clap::{Parser, Subcommand};

use feedesk_core::error::{AppError, ErrorKind};
use feedesk_core::result::AppResult;

use crate::context::AppContext;
use crate::output::{self, OutputFormat};

/// Shown whenever a command ended the session on the user's behalf.
pub const SESSION_ENDED_NOTICE: &str = "Session ended; please log in again with `feedesk login`";

/// FeeDesk — fee and loan back-office client
#[derive(Debug, Parser)]
#[command(name = "feedesk", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in and store the session token
    Login(session::LoginArgs),
    /// End the current session
    Logout,
    /// Show the current session
    Whoami,
    /// Customer registration and lookup
    Customer(customer::CustomerArgs),
    /// Fee table maintenance
    Fee(fee::FeeArgs),
    /// Loans
    Loan(loan::LoanArgs),
}

impl Cli {
    /// Execute the CLI command against `ctx`.
    pub async fn execute(&self, ctx: &AppContext) -> AppResult<()> {
        let mut navigation = ctx.gateway.navigation();

        let result = match &self.command {
            Commands::Login(args) => session::login(args, ctx).await,
            Commands::Logout => session::logout(ctx),
            Commands::Whoami => session::whoami(ctx, self.format),
            Commands::Customer(args) => customer::execute(args, ctx, self.format).await,
            Commands::Fee(args) => fee::execute(args, ctx, self.format).await,
            Commands::Loan(args) => loan::execute(args, ctx, self.format).await,
        };

        let forced = navigation.try_recv().is_ok();
        if forced && !matches!(self.command, Commands::Logout) {
            output::print_warning(SESSION_ENDED_NOTICE);
        }
        result
    }
}

/// Ask for a line of text unless it was given on the command line.
pub(crate) fn input_or_prompt(value: &Option<String>, prompt: &str) -> AppResult<String> {
    if let Some(value) = value {
        return Ok(value.clone());
    }
    dialoguer::Input::<String>::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| AppError::new(ErrorKind::Validation, format!("Input error: {}", e)))
}

/// Ask for a secret without echo unless it was given on the command line.
pub(crate) fn secret_or_prompt(value: &Option<String>, prompt: &str) -> AppResult<String> {
    if let Some(value) = value {
        return Ok(value.clone());
    }
    dialoguer::Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| AppError::new(ErrorKind::Validation, format!("Input error: {}", e)))
}
