//! Login endpoint models.

pub mod model;

pub use model::{LoginRequest, LoginResponse};
