//! Customer CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use feedesk_core::result::AppResult;
use feedesk_entity::customer::{CustomerRequest, CustomerResponse};
use feedesk_entity::validation::validate_request;

use crate::context::AppContext;
use crate::output::{self, OutputFormat};

/// Arguments for customer commands
#[derive(Debug, Args)]
pub struct CustomerArgs {
    /// Customer subcommand
    #[command(subcommand)]
    pub command: CustomerCommand,
}

/// Customer subcommands
#[derive(Debug, Subcommand)]
pub enum CustomerCommand {
    /// Register a new customer
    Save {
        /// Customer name
        name: String,
        /// Contact email
        #[arg(short, long)]
        email: String,
    },
    /// Update a customer's email
    Update {
        /// Customer name
        name: String,
        /// Contact email
        #[arg(short, long)]
        email: String,
    },
    /// Look a customer up by name
    Find {
        /// Customer name
        name: String,
    },
}

/// Customer display row
#[derive(Debug, Serialize, Tabled)]
struct CustomerRow {
    /// Name
    customer: String,
    /// Email
    email: String,
}

impl From<CustomerResponse> for CustomerRow {
    fn from(c: CustomerResponse) -> Self {
        Self {
            customer: c.customer,
            email: c.email,
        }
    }
}

/// Execute customer commands
pub async fn execute(args: &CustomerArgs, ctx: &AppContext, format: OutputFormat) -> AppResult<()> {
    match &args.command {
        CustomerCommand::Save { name, email } => {
            let request = form(name, email)?;
            let reply = ctx.customers.save(&request).await?;
            output::print_success(&confirmation(&reply, "Customer saved"));
        }
        CustomerCommand::Update { name, email } => {
            let request = form(name, email)?;
            let reply = ctx.customers.update(&request).await?;
            output::print_success(&confirmation(&reply, "Customer updated"));
        }
        CustomerCommand::Find { name } => {
            let customer = ctx.customers.find(name).await?;
            output::print_item(&CustomerRow::from(customer), format);
        }
    }
    Ok(())
}

fn form(name: &str, email: &str) -> AppResult<CustomerRequest> {
    let request = CustomerRequest {
        customer: name.trim().to_string(),
        email: email.trim().to_string(),
    };
    validate_request(&request)?;
    Ok(request)
}

/// The server's reply text, or `fallback` when it sent none.
pub(crate) fn confirmation(reply: &str, fallback: &str) -> String {
    let reply = reply.trim();
    if reply.is_empty() {
        fallback.to_string()
    } else {
        reply.to_string()
    }
}
