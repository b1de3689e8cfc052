//! Customer registration models.

pub mod model;

pub use model::{CustomerRequest, CustomerResponse};
