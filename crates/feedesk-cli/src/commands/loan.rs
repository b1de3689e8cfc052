//! Loan CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use feedesk_core::result::AppResult;
use feedesk_entity::fee::{CardFlag, TableNumber};
use feedesk_entity::loan::{LoanRequest, LoanResponse};
use feedesk_entity::validation::validate_request;

use crate::context::AppContext;
use crate::output::{self, OutputFormat};

/// Arguments for loan commands
#[derive(Debug, Args)]
pub struct LoanArgs {
    /// Loan subcommand
    #[command(subcommand)]
    pub command: LoanCommand,
}

/// Loan subcommands
#[derive(Debug, Subcommand)]
pub enum LoanCommand {
    /// Issue a loan priced against a fee table
    Create {
        /// Fee table (ONE..FOUR)
        #[arg(short, long)]
        table: TableNumber,
        /// Customer name
        #[arg(short, long)]
        customer: String,
        /// Card flag (MASTER_VISA or AMEX_ELO_HIPER)
        #[arg(long)]
        flag: CardFlag,
        /// Number of installments
        #[arg(short, long)]
        installments: u32,
        /// Purchase value
        #[arg(short, long)]
        value: f64,
    },
    /// List a customer's loans
    List {
        /// Customer name
        customer: String,
    },
}

/// Loan display row
#[derive(Debug, Serialize, Tabled)]
struct LoanRow {
    /// ID
    id: i64,
    /// Customer
    customer: String,
    /// Purchase
    purchase: String,
    /// Installments
    installments: String,
    /// Machine retained
    machine_retained: String,
    /// Retained
    retained: String,
    /// Released to client
    released: String,
    /// Date
    date: String,
}

impl From<LoanResponse> for LoanRow {
    fn from(l: LoanResponse) -> Self {
        Self {
            id: l.id,
            customer: l.customer,
            purchase: format!("{:.2}", l.purchase_value),
            installments: format!("{}x {:.2}", l.number_of_installments, l.installment_value),
            machine_retained: format!("{:.2}", l.amount_retained_by_machine),
            retained: format!("{:.2}", l.amount_retained),
            released: format!("{:.2}", l.amount_released_for_client),
            date: l.purchase_date.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute loan commands
pub async fn execute(args: &LoanArgs, ctx: &AppContext, format: OutputFormat) -> AppResult<()> {
    match &args.command {
        LoanCommand::Create {
            table,
            customer,
            flag,
            installments,
            value,
        } => {
            let request = LoanRequest {
                customer: customer.trim().to_string(),
                flag: *flag,
                number_of_installments: *installments,
                purchase_value: *value,
            };
            validate_request(&request)?;
            ctx.loans.save(*table, &request).await?;
            output::print_success(&format!(
                "Loan of {:.2} in {}x created for '{}'",
                request.purchase_value, request.number_of_installments, request.customer
            ));
        }
        LoanCommand::List { customer } => {
            let loans = ctx.loans.find_by_customer(customer).await?;
            let rows: Vec<LoanRow> = loans.into_iter().map(LoanRow::from).collect();
            output::print_list(&rows, format);
        }
    }
    Ok(())
}
