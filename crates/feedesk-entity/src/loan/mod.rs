//! Loan models.

pub mod model;
pub mod purchase_date;

pub use model::{LoanRequest, LoanResponse};
