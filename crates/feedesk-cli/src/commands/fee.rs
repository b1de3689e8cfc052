//! Fee table CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use feedesk_core::result::AppResult;
use feedesk_entity::fee::{CardFlag, FeeQuery, FeeRequest, FeeResponse, FeeUpdateRequest, TableNumber};
use feedesk_entity::validation::validate_request;

use super::customer::confirmation;
use crate::context::AppContext;
use crate::output::{self, OutputFormat};

/// Arguments for fee commands
#[derive(Debug, Args)]
pub struct FeeArgs {
    /// Fee subcommand
    #[command(subcommand)]
    pub command: FeeCommand,
}

/// The editable fields of a fee row
#[derive(Debug, Clone, Args)]
pub struct FeeFields {
    /// Fee table (ONE..FOUR)
    #[arg(short, long)]
    pub table: TableNumber,
    /// Number of installments (1-12)
    #[arg(short, long)]
    pub installments: u32,
    /// Card flag (MASTER_VISA or AMEX_ELO_HIPER)
    #[arg(long)]
    pub flag: CardFlag,
    /// Percentage retained by the card machine
    #[arg(long)]
    pub machine_fee: f64,
    /// Percentage charged to the client
    #[arg(long)]
    pub client_fee: f64,
}

impl From<&FeeFields> for FeeRequest {
    fn from(f: &FeeFields) -> Self {
        Self {
            number_table: f.table,
            number_of_installments: f.installments,
            flag: f.flag,
            machine_fee: f.machine_fee,
            client_fee: f.client_fee,
        }
    }
}

/// Fee subcommands
#[derive(Debug, Subcommand)]
pub enum FeeCommand {
    /// Create a fee row
    Create(FeeFields),
    /// Update an existing fee row
    Update {
        /// Fee row ID
        #[arg(long)]
        id: i64,
        #[command(flatten)]
        fields: FeeFields,
    },
    /// Look up the fee for a table, installment count and flag
    Find {
        /// Fee table (ONE..FOUR)
        #[arg(short, long)]
        table: Option<TableNumber>,
        /// Number of installments
        #[arg(short, long)]
        installments: Option<u32>,
        /// Card flag
        #[arg(long)]
        flag: Option<CardFlag>,
    },
}

/// Fee display row
#[derive(Debug, Serialize, Tabled)]
struct FeeRow {
    /// ID
    id: i64,
    /// Table
    table: String,
    /// Installments
    installments: u32,
    /// Flag
    flag: String,
    /// Machine fee
    machine_fee: String,
    /// Client fee
    client_fee: String,
}

impl From<FeeResponse> for FeeRow {
    fn from(f: FeeResponse) -> Self {
        Self {
            id: f.id,
            table: f.number_table.to_string(),
            installments: f.number_of_installments,
            flag: f.flag.to_string(),
            machine_fee: format!("{:.2}%", f.machine_fee),
            client_fee: format!("{:.2}%", f.client_fee),
        }
    }
}

/// Execute fee commands
pub async fn execute(args: &FeeArgs, ctx: &AppContext, format: OutputFormat) -> AppResult<()> {
    match &args.command {
        FeeCommand::Create(fields) => {
            let request = FeeRequest::from(fields);
            validate_request(&request)?;
            ctx.fees.create(&request).await?;
            output::print_success(&format!(
                "Fee created for table {} / {}x / {}",
                request.number_table, request.number_of_installments, request.flag
            ));
        }
        FeeCommand::Update { id, fields } => {
            let request = FeeUpdateRequest::from_request(*id, FeeRequest::from(fields));
            validate_request(&request)?;
            let reply = ctx.fees.update(&request).await?;
            output::print_success(&confirmation(&reply, &format!("Fee {} updated", id)));
        }
        FeeCommand::Find {
            table,
            installments,
            flag,
        } => {
            let query = FeeQuery {
                number_table: *table,
                number_of_installments: *installments,
                flag: *flag,
            };
            let fee = ctx.fees.find(&query).await?;
            output::print_item(&FeeRow::from(fee), format);
        }
    }
    Ok(())
}
