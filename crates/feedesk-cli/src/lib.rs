//! # feedesk-cli
//!
//! Terminal front-end: each back-office screen is a subcommand. Forms are
//! validated here before any client is called, and a session ended by the
//! server is reported back to the user.

pub mod commands;
pub mod context;
pub mod output;

pub use commands::{Cli, Commands};
pub use context::AppContext;
pub use output::OutputFormat;
