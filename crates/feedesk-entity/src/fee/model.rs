//! Fee entity models.

use serde::{Deserialize, Serialize};
use validator::Validate;

use feedesk_core::error::AppError;

use super::flag::CardFlag;
use super::table::TableNumber;

/// Body of `POST /api/fees`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FeeRequest {
    /// Fee table the rate belongs to.
    pub number_table: TableNumber,
    /// Number of installments (1 to 12).
    #[validate(range(min = 1, max = 12))]
    pub number_of_installments: u32,
    /// Card brand group.
    pub flag: CardFlag,
    /// Percentage retained by the card machine.
    #[validate(range(min = 0.0))]
    pub machine_fee: f64,
    /// Percentage charged to the client.
    #[validate(range(min = 0.0))]
    pub client_fee: f64,
}

/// Body of `PUT /api/fees`; identifies the row by `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FeeUpdateRequest {
    /// Fee row identifier.
    pub id: i64,
    /// Fee table the rate belongs to.
    pub number_table: TableNumber,
    /// Number of installments (1 to 12).
    #[validate(range(min = 1, max = 12))]
    pub number_of_installments: u32,
    /// Card brand group.
    pub flag: CardFlag,
    /// Percentage retained by the card machine.
    #[validate(range(min = 0.0))]
    pub machine_fee: f64,
    /// Percentage charged to the client.
    #[validate(range(min = 0.0))]
    pub client_fee: f64,
}

impl FeeUpdateRequest {
    /// Turn a create request into an update of row `id`.
    pub fn from_request(id: i64, request: FeeRequest) -> Self {
        Self {
            id,
            number_table: request.number_table,
            number_of_installments: request.number_of_installments,
            flag: request.flag,
            machine_fee: request.machine_fee,
            client_fee: request.client_fee,
        }
    }
}

/// A stored fee row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeeResponse {
    /// Fee row identifier.
    pub id: i64,
    /// Fee table the rate belongs to.
    pub number_table: TableNumber,
    /// Number of installments.
    pub number_of_installments: u32,
    /// Card brand group.
    pub flag: CardFlag,
    /// Percentage retained by the card machine.
    pub machine_fee: f64,
    /// Percentage charged to the client.
    pub client_fee: f64,
}

/// Lookup criteria for `GET /api/fees`. All three are required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeeQuery {
    /// Fee table.
    pub number_table: Option<TableNumber>,
    /// Number of installments; zero counts as missing.
    pub number_of_installments: Option<u32>,
    /// Card brand group.
    pub flag: Option<CardFlag>,
}

impl FeeQuery {
    /// A fully specified query.
    pub fn new(number_table: TableNumber, number_of_installments: u32, flag: CardFlag) -> Self {
        Self {
            number_table: Some(number_table),
            number_of_installments: Some(number_of_installments),
            flag: Some(flag),
        }
    }

    /// Query-string pairs, or a validation error if any criterion is missing.
    pub fn to_params(&self) -> Result<[(&'static str, String); 3], AppError> {
        match (self.number_table, self.number_of_installments, self.flag) {
            (Some(table), Some(installments), Some(flag)) if installments > 0 => Ok([
                ("numberTable", table.to_string()),
                ("numberOfInstallments", installments.to_string()),
                ("flag", flag.to_string()),
            ]),
            _ => Err(AppError::validation("All parameters are required")),
        }
    }
}
