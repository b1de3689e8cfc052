//! # feedesk-client
//!
//! REST clients for the back-office resources. Every client sends its
//! requests through [`AuthorizedClient`], which refuses to send without a
//! valid token and ends the session when the server rejects it.

pub mod customer;
pub mod fee;
pub mod http;
pub mod loan;

pub use customer::CustomerClient;
pub use fee::FeeClient;
pub use http::{ApiRequest, AuthorizedClient, ResourceMessages};
pub use loan::LoanClient;
