//! # feedesk-core
//!
//! Core crate for FeeDesk. Contains configuration schemas, the durable
//! token storage trait, and the unified error system shared by the
//! session layer, the resource clients, and the command line.
//!
//! This crate has **no** internal dependencies on other FeeDesk crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
