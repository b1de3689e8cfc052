//! Loan entity models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::fee::CardFlag;

/// Body of `POST /api/loan/{tableNumber}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    /// Customer the loan is issued to.
    #[validate(length(min = 1))]
    pub customer: String,
    /// Card brand group used for the purchase.
    pub flag: CardFlag,
    /// Number of installments.
    #[validate(range(min = 1))]
    pub number_of_installments: u32,
    /// Gross purchase value.
    #[validate(range(min = 1.0))]
    pub purchase_value: f64,
}

/// A loan as returned by `GET /api/loan/{customer}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoanResponse {
    /// Loan identifier.
    pub id: i64,
    /// Customer name.
    pub customer: String,
    /// Gross purchase value.
    pub purchase_value: f64,
    /// Number of installments.
    pub number_of_installments: u32,
    /// Value of each installment.
    pub installment_value: f64,
    /// Amount the card machine keeps.
    pub amount_retained_by_machine: f64,
    /// Amount the card machine releases.
    pub amount_released_by_machine: f64,
    /// Amount retained by the business.
    pub amount_retained: f64,
    /// Amount released to the client.
    pub amount_released_for_client: f64,
    /// When the purchase happened.
    #[serde(with = "super::purchase_date")]
    pub purchase_date: NaiveDateTime,
}
