//! Login, logout and session inspection.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use feedesk_core::result::AppResult;

use super::{input_or_prompt, secret_or_prompt};
use crate::context::AppContext;
use crate::output::{self, OutputFormat};

/// Arguments for `login`
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Username (prompted when omitted)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password (prompted without echo when omitted)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Session display row
#[derive(Debug, Serialize, Tabled)]
struct SessionRow {
    /// Username
    username: String,
    /// Roles
    roles: String,
    /// Issuer
    issuer: String,
    /// Expires
    expires: String,
    /// Seconds left
    remaining: u64,
}

/// Exchange credentials for a session.
pub async fn login(args: &LoginArgs, ctx: &AppContext) -> AppResult<()> {
    let username = input_or_prompt(&args.username, "Username")?;
    let password = secret_or_prompt(&args.password, "Password")?;

    ctx.gateway.login(&username, &password).await?;
    output::print_success(&format!("Logged in as '{}'", username));
    Ok(())
}

/// End the session. Succeeds when already logged out.
pub fn logout(ctx: &AppContext) -> AppResult<()> {
    let was_logged_in = ctx.gateway.is_logged_in();
    ctx.gateway.logout();
    if was_logged_in {
        output::print_success("Logged out");
    } else {
        println!("No active session.");
    }
    Ok(())
}

/// Show who the stored token belongs to.
pub fn whoami(ctx: &AppContext, format: OutputFormat) -> AppResult<()> {
    if !ctx.gateway.is_logged_in() {
        debug!(has_token = ctx.gateway.current_token().is_some(), "No valid session");
        output::print_warning("Not logged in.");
        return Ok(());
    }
    let Some(claims) = ctx.gateway.claims() else {
        output::print_warning("Not logged in.");
        return Ok(());
    };

    let row = SessionRow {
        username: claims.sub.clone().unwrap_or_default(),
        roles: ctx.gateway.roles().into_iter().collect::<Vec<_>>().join(" "),
        issuer: claims.iss.clone(),
        expires: claims
            .expires_at()
            .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_default(),
        remaining: claims.remaining_ttl_seconds(),
    };
    output::print_item(&row, format);
    Ok(())
}
