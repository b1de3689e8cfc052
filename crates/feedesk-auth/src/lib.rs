//! # feedesk-auth
//!
//! Client-side session handling for the FeeDesk back office.
//!
//! ## Modules
//!
//! - `jwt` — bearer token decoding and expiry checks (fail-safe-closed)
//! - `session` — the process-wide reactive token store and its durable backends
//! - `gateway` — login/logout and the derived session queries
//! - `transport` — classification of transport-level failures

pub mod gateway;
pub mod jwt;
pub mod session;
pub mod transport;

pub use gateway::{AuthGateway, Navigation};
pub use jwt::{Claims, TokenCodec};
pub use session::{FileTokenStorage, MemoryTokenStorage, Observable, SessionStore, Subscription};
